//! Block classifier implementation.

use crate::cursor::Cursor;
use crate::diagnostic::{Diagnostic, DiagnosticKind};

use super::types::{Block, BlockKind};

/// Lines accumulated since the last flush point.
#[derive(Debug)]
struct Buffer {
    kind: BlockKind,
    /// Marker name for command/begin/end buffers.
    name: String,
    /// Content fragments (paragraph/command/begin) or raw lines (verbatim).
    lines: Vec<String>,
    /// Line number the buffer started on.
    line: usize,
}

/// Line-oriented classifier grouping source lines into blocks.
pub struct BlockParser<I> {
    lines: I,
    /// Current 1-based line number.
    line_no: usize,
    /// Currently open buffer, if any.
    buffer: Option<Buffer>,
}

impl<I, S> BlockParser<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    /// Create a classifier over an ordered sequence of lines.
    pub fn new<T>(lines: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter(),
            line_no: 0,
            buffer: None,
        }
    }

    /// Classify all lines, pushing blocks and recoverable diagnostics.
    pub fn parse(&mut self, blocks: &mut Vec<Block>, diagnostics: &mut Vec<Diagnostic>) {
        while let Some(line) = self.lines.next() {
            self.line_no += 1;
            self.parse_line(line.as_ref(), blocks, diagnostics);
        }

        // Close any open buffer at end of input
        self.flush(blocks, diagnostics);
    }

    /// Classify a single line.
    fn parse_line(
        &mut self,
        line: &str,
        blocks: &mut Vec<Block>,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        // Blank lines end the current block (leading ones are no-ops)
        if line.trim().is_empty() {
            self.flush(blocks, diagnostics);
            return;
        }

        let mut cursor = Cursor::new(line);
        let first = match cursor.peek() {
            Some(c) => c,
            None => return,
        };

        if let Some(kind) = BlockKind::from_marker(first) {
            self.start_marker(kind, cursor, blocks, diagnostics);
        } else if first.is_whitespace() {
            self.push_line(BlockKind::Verbatim, line);
        } else {
            self.push_line(BlockKind::Paragraph, line);
        }
    }

    /// Start a command, begin or end buffer from a marker line.
    fn start_marker(
        &mut self,
        kind: BlockKind,
        mut cursor: Cursor<'_>,
        blocks: &mut Vec<Block>,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        if self.buffer.is_some() {
            diagnostics.push(Diagnostic::report(self.line_no, DiagnosticKind::MalformedAdjacency));
            self.flush(blocks, diagnostics);
        }

        cursor.bump(); // marker
        let name = cursor.take_token().to_string();
        cursor.skip_whitespace();
        let rest = cursor.rest().trim_end();

        let mut lines = Vec::new();
        if !rest.is_empty() {
            lines.push(rest.to_string());
        }

        self.buffer = Some(Buffer {
            kind,
            name,
            lines,
            line: self.line_no,
        });
    }

    /// Append a content line, opening a buffer of `kind` if none is open.
    fn push_line(&mut self, kind: BlockKind, line: &str) {
        let line_no = self.line_no;
        let buffer = self.buffer.get_or_insert_with(|| Buffer {
            kind,
            name: String::new(),
            lines: Vec::new(),
            line: line_no,
        });
        buffer.lines.push(line.to_string());
    }

    /// Turn the open buffer, if any, into a block.
    fn flush(&mut self, blocks: &mut Vec<Block>, diagnostics: &mut Vec<Diagnostic>) {
        let Some(buffer) = self.buffer.take() else {
            return;
        };

        let block = match buffer.kind {
            BlockKind::Paragraph => Block::paragraph(join_fragments(&buffer.lines), buffer.line),
            BlockKind::Command | BlockKind::Begin => Block::named(
                buffer.kind,
                buffer.name,
                join_fragments(&buffer.lines),
                buffer.line,
            ),
            BlockKind::End => {
                if !buffer.lines.is_empty() {
                    diagnostics.push(Diagnostic::report(
                        buffer.line,
                        DiagnosticKind::TrailingEndText {
                            name: buffer.name.clone(),
                        },
                    ));
                }
                Block::end(buffer.name, buffer.line)
            }
            BlockKind::Verbatim => Block::verbatim(buffer.lines, buffer.line),
        };

        log::trace!("line {}: {} block", block.line, block.kind.label());
        blocks.push(block);
    }
}

/// Join content fragments with single spaces, trimming each one.
fn join_fragments(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(line);
    }
    out
}
