use tagdown::{
    Compose, Fragment, Handler, Options, Outline, ParseError, Parser, ScanError, outline,
};

fn outline_with(delimiters: &str, input: &str) -> Result<Vec<String>, ParseError> {
    let options = Options {
        delimiters: delimiters.to_string(),
        ..Options::default()
    };
    let parser = Parser::with_options(options)?;
    let doc = parser.parse(input, &mut Outline)?;
    Ok(doc.blocks.into_iter().map(|b| b.value).collect())
}

fn first(input: &str) -> String {
    outline_with("<", input).unwrap().remove(0)
}

/// Counts entity callbacks per tag.
#[derive(Default)]
struct Counter {
    tags: Vec<char>,
}

impl Handler for Counter {
    type Output = String;

    fn on_entity(&mut self, tag: char, content: Vec<Fragment<String>>) -> String {
        self.tags.push(tag);
        String::compose(content)
    }
}

// --- Basic entities ---

#[test]
fn entity_in_paragraph() {
    assert_eq!(first("Some B<bold> text"), "Some B{bold} text");
}

#[test]
fn no_leftover_delimiters() {
    let doc = tagdown::parse("x C<<< y >>> z").unwrap();
    assert_eq!(doc.blocks[0].value, "x  y  z");
}

#[test]
fn entities_in_commands_and_begins() {
    let values = outline_with("<", "=head1 The I<name>\n\n+over B<4>\n\n-over").unwrap();
    assert_eq!(values, ["The I{name}", "B{4}", ""]);
}

#[test]
fn entities_not_resolved_in_verbatim() {
    let values = outline_with("<", "    my B<x> = 1;").unwrap();
    assert_eq!(values, ["my B<x> = 1;"]);
}

// --- Delimiter runs ---

#[test]
fn double_angle_brackets() {
    assert_eq!(first("C<< $x->{y} >>"), "C{ $x->{y} }");
}

#[test]
fn two_pipes_round_trip() {
    let values = outline_with("<|", "T|| Two|pipes ||").unwrap();
    assert_eq!(values, ["T{ Two|pipes }"]);
}

#[test]
fn empty_pipe_entities() {
    let values = outline_with("<|", "aZ||b\n\nsee E||").unwrap();
    assert_eq!(values, ["ab", "see E{}"]);
}

#[test]
fn mixed_delimiter_set_at_top_level() {
    let values = outline_with("<[{", "B<a> I[b] C{c}").unwrap();
    assert_eq!(values, ["B{a} I{b} C{c}"]);
}

#[test]
fn nested_frame_ignores_other_delimiters() {
    let values = outline_with("<[", "B[I<x>]").unwrap();
    assert_eq!(values, ["B{I<x>}"]);
}

#[test]
fn nested_frame_reuses_its_delimiter() {
    let values = outline_with("<[", "B[I[x] and C[y]]").unwrap();
    assert_eq!(values, ["B{I{x} and C{y}}"]);
}

// --- Zero-width divider ---

#[test]
fn divider_is_invisible() {
    let mut counter = Counter::default();
    let doc = Parser::new().parse("aZ<>b", &mut counter).unwrap();
    assert_eq!(doc.blocks[0].value, "ab");
    assert!(counter.tags.is_empty());
}

#[test]
fn divider_breaks_entity_start() {
    let mut counter = Counter::default();
    let doc = Parser::new().parse("IZ<><3 you", &mut counter).unwrap();
    assert_eq!(doc.blocks[0].value, "I<3 you");
    assert!(counter.tags.is_empty());
}

#[test]
fn entity_callback_order_is_bottom_up() {
    let mut counter = Counter::default();
    Parser::new()
        .parse("B<I<x> C<y>> E<z>", &mut counter)
        .unwrap();
    assert_eq!(counter.tags, ['I', 'C', 'B', 'E']);
}

// --- Errors ---

#[test]
fn unterminated_entity_aborts() {
    let err = tagdown::parse("First paragraph.\n\nC<abc").unwrap_err();
    assert_eq!(
        err,
        ParseError::Entity {
            line: 3,
            source: ScanError::Unterminated { tag: 'C', offset: 0 }
        }
    );
}

#[test]
fn mismatched_run_length_aborts() {
    let err = tagdown::parse("see B<<this>").unwrap_err();
    assert_eq!(
        err,
        ParseError::Entity {
            line: 1,
            source: ScanError::DelimiterMismatch {
                tag: 'B',
                offset: 4,
                expected: 2,
                found: 1
            }
        }
    );
}

#[test]
fn divider_with_body_aborts() {
    let err = tagdown::parse("Z<oops>").unwrap_err();
    assert!(matches!(
        err,
        ParseError::Entity {
            source: ScanError::NonEmptyDivider { .. },
            ..
        }
    ));
}

#[test]
fn error_in_later_block_reports_its_line() {
    let err = tagdown::parse("=head1 Fine\n\nStill fine\n\n=item B<broken").unwrap_err();
    assert_eq!(err.line(), Some(5));
}

#[test]
fn invalid_delimiter_option() {
    assert_eq!(
        outline_with("a", "x"),
        Err(ParseError::InvalidDelimiter {
            delimiter: Some('a')
        })
    );
}

#[test]
fn outline_render_shows_structure() {
    let doc = Parser::new()
        .parse("=head2 A B<b>\n\nText", &mut Outline)
        .unwrap();
    assert_eq!(
        outline::render(&doc),
        "command head2: \"A B{b}\"\nparagraph: \"Text\"\n"
    );
}
