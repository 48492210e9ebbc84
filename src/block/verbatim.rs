//! Verbatim indentation handling.
//!
//! Verbatim lines lose their minimum common leading whitespace. Adjacent
//! verbatim blocks are then merged into one, re-leveled so that only the
//! smallest indentation of the merged run is stripped. Paragraphs made only
//! of zero-width dividers (`Z<>`) between two verbatim blocks are dropped
//! and do not interrupt the run.

use crate::inline::{Delimiters, is_divider_only};

use super::types::{Block, BlockKind};

/// Width of the leading whitespace run of a line, in chars.
#[inline]
pub fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Minimum leading whitespace across `lines` (0 for no lines).
pub fn min_indent<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(|l| leading_whitespace(l.as_ref()))
        .min()
        .unwrap_or(0)
}

/// Strip `n` leading whitespace chars from every line and join with `\n`.
///
/// Lines with fewer leading whitespace chars lose only those.
pub fn strip_indent<S: AsRef<str>>(lines: &[S], n: usize) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(strip_line(line.as_ref(), n));
    }
    out
}

fn strip_line(line: &str, n: usize) -> &str {
    let cut = line
        .char_indices()
        .take_while(|(_, c)| c.is_whitespace())
        .take(n)
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());
    &line[cut..]
}

/// Merge runs of consecutive verbatim blocks in place.
///
/// The merged block keeps the line number of the first block of the run.
/// `delimiters` decides which paragraphs are divider-only.
pub fn merge_verbatim(blocks: &mut Vec<Block>, delimiters: &Delimiters) {
    let mut merged: Vec<Block> = Vec::with_capacity(blocks.len());
    // Divider paragraphs seen right after a verbatim block
    let mut dividers: Vec<Block> = Vec::new();

    for block in blocks.drain(..) {
        match merged.last_mut() {
            Some(prev) if prev.kind == BlockKind::Verbatim && block.kind == BlockKind::Verbatim => {
                for divider in dividers.drain(..) {
                    log::trace!("dropping divider paragraph at line {}", divider.line);
                }
                append_verbatim(prev, block);
            }
            Some(prev)
                if prev.kind == BlockKind::Verbatim && is_divider_paragraph(&block, delimiters) =>
            {
                dividers.push(block);
            }
            _ => {
                merged.append(&mut dividers);
                merged.push(block);
            }
        }
    }

    merged.append(&mut dividers);
    *blocks = merged;
}

fn is_divider_paragraph(block: &Block, delimiters: &Delimiters) -> bool {
    block.kind == BlockKind::Paragraph && is_divider_only(block.content_str(), delimiters)
}

fn append_verbatim(prev: &mut Block, next: Block) {
    let delta = prev.indent.abs_diff(next.indent);
    let indent = prev.indent.min(next.indent);
    log::trace!(
        "merging verbatim at line {} into line {} (indent {} / {}, delta {delta})",
        next.line,
        prev.line,
        prev.indent,
        next.indent
    );

    prev.raw.extend(next.raw);
    prev.indent = indent;
    prev.content = Some(strip_indent(&prev.raw, indent));
}
