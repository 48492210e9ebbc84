//! Performance benchmarks for tagdown
//!
//! Run with: cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use tagdown::{Delimiters, EntityParser, Outline, Parser, PlainText};

/// Sample documents of various sizes
mod samples {
    pub const TINY: &str = "Hello, B<world>!";

    pub const SMALL: &str = r#"=head1 NAME

tagdown - parse B<tagged> markup

=head1 SYNOPSIS

    use tagdown::parse;
    let doc = parse(text)?;

Entities like I<italic>, C<< $code->[0] >> and L<links|somewhere> resolve
through the handler.
"#;

    /// Generate a large document by repeating sections
    pub fn large() -> String {
        let section = r#"
=head2 Section Title

This paragraph contains various inline entities like I<emphasis>, B<strong>,
C<code>, and B<nested I<entities> inside>.

+list

=item First item with B<bold> text

=item Second item with C<< a > b >> text

-list

    fn example() {
        let x = 42;
    }

  Another verbatim run that merges
  with the previous one.

Another paragraph to add some content. This helps test the parser's ability
to handle longer documents efficiently.
"#;
        section.repeat(50)
    }

    /// Deeply nested entities
    pub fn pathological_nested() -> String {
        "B<".repeat(200) + "deep" + &">".repeat(200)
    }

    /// Many uppercase letters that never open an entity
    pub fn pathological_capitals() -> String {
        "ABCDEFGHIJ <> ".repeat(1000)
    }
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    let parser = Parser::new();

    group.throughput(Throughput::Bytes(samples::TINY.len() as u64));
    group.bench_function("tiny", |b| {
        b.iter(|| parser.parse(black_box(samples::TINY), &mut PlainText))
    });

    group.throughput(Throughput::Bytes(samples::SMALL.len() as u64));
    group.bench_function("small", |b| {
        b.iter(|| parser.parse(black_box(samples::SMALL), &mut PlainText))
    });

    let large = samples::large();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large", |b| {
        b.iter(|| parser.parse(black_box(&large), &mut Outline))
    });

    group.bench_function("large_blocks_only", |b| {
        b.iter(|| parser.blocks(black_box(&large)))
    });

    group.finish();
}

fn bench_entities(c: &mut Criterion) {
    let mut group = c.benchmark_group("entities");
    let delimiters = Delimiters::default();
    let scanner = EntityParser::new(&delimiters);

    let plain = "Hello, this is plain text without any delimiters. ".repeat(100);
    group.throughput(Throughput::Bytes(plain.len() as u64));
    group.bench_function("plain_text", |b| {
        b.iter(|| scanner.parse(black_box(&plain), &mut PlainText))
    });

    let dense = "B<x> I<y C<z>> ".repeat(100);
    group.throughput(Throughput::Bytes(dense.len() as u64));
    group.bench_function("dense", |b| {
        b.iter(|| scanner.parse(black_box(&dense), &mut Outline))
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(20); // Fewer samples for slow cases

    let parser = Parser::new();

    let nested = samples::pathological_nested();
    group.throughput(Throughput::Bytes(nested.len() as u64));
    group.bench_function("deep_nesting", |b| {
        b.iter(|| parser.parse(black_box(&nested), &mut PlainText))
    });

    let capitals = samples::pathological_capitals();
    group.throughput(Throughput::Bytes(capitals.len() as u64));
    group.bench_function("capitals", |b| {
        b.iter(|| parser.parse(black_box(&capitals), &mut PlainText))
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_entities, bench_pathological);
criterion_main!(benches);
