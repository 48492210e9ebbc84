//! Inline entity scanner.
//!
//! Recursive descent over the content of one block. An entity is a tag
//! letter `A`-`Z` followed by a run of an opening delimiter, a body and a
//! closing run of the same length (`B<bold>`, `C<< a > b >>`).
//!
//! Each recursion frame carries its own delimiter regime:
//! - the outermost frame accepts any configured delimiter and a run of any
//!   length;
//! - a nested frame is locked to the delimiter its entity was opened with
//!   and opens inner entities with exactly one occurrence of it.
//!
//! The body of an entity is resolved bottom-up, handed to
//! [`Handler::on_entity`], and the result is spliced into the parent as a
//! [`Fragment::Value`].

mod delimiter;
mod fragment;

pub use delimiter::{Delimiters, closing_for};
pub use fragment::{Fragment, push_text};

use thiserror::Error;

use crate::cursor::Cursor;
use crate::handler::Handler;
use crate::limits::MAX_ENTITY_NESTING;

/// Reserved tag for the zero-width divider `Z<>`.
pub const DIVIDER_TAG: char = 'Z';

/// Malformed entity, with the byte offset of its tag letter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Input ended before the closing run.
    #[error("unterminated {tag} entity starting at offset {offset}")]
    Unterminated { tag: char, offset: usize },

    /// Input ended before the closing run, and only shorter closing runs
    /// were seen inside the body.
    #[error(
        "{tag} entity at offset {offset} opens with {expected} delimiters but closes with {found}"
    )]
    DelimiterMismatch {
        tag: char,
        offset: usize,
        expected: usize,
        found: usize,
    },

    /// `Z` must be closed immediately.
    #[error("zero-width divider at offset {offset} has a body")]
    NonEmptyDivider { offset: usize },

    /// Entities nested beyond [`MAX_ENTITY_NESTING`].
    #[error("entity at offset {offset} nested deeper than {limit} levels")]
    NestingTooDeep { offset: usize, limit: usize },
}

impl ScanError {
    /// Byte offset of the offending entity within the scanned text.
    pub fn offset(&self) -> usize {
        match self {
            ScanError::Unterminated { offset, .. }
            | ScanError::DelimiterMismatch { offset, .. }
            | ScanError::NonEmptyDivider { offset }
            | ScanError::NestingTooDeep { offset, .. } => *offset,
        }
    }
}

/// Delimiter regime of one recursion frame.
#[derive(Debug, Clone, Copy)]
enum Frame {
    /// Top of a block: any configured delimiter, no closer.
    Outer,
    /// Inside an entity opened with `open`, closed by `run` x `close`.
    Locked { open: char, close: char, run: usize },
}

/// How a frame ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Close {
    /// The closing run was found and consumed.
    Closed,
    /// Input ran out. `partial` is the longest too-short closing run seen.
    Eof { partial: Option<usize> },
}

/// Entity scanner bound to a delimiter set.
///
/// Holds no per-parse state; one instance can scan any number of blocks.
#[derive(Debug, Clone, Copy)]
pub struct EntityParser<'d> {
    delimiters: &'d Delimiters,
}

impl<'d> EntityParser<'d> {
    /// Create a scanner for the given delimiter set.
    pub fn new(delimiters: &'d Delimiters) -> Self {
        Self { delimiters }
    }

    /// Resolve all entities in `text` into an alternating sequence.
    pub fn parse<H: Handler>(
        &self,
        text: &str,
        handler: &mut H,
    ) -> Result<Vec<Fragment<H::Output>>, ScanError> {
        let mut fragments = Vec::new();

        // No delimiter anywhere: nothing can open an entity
        if self.delimiters.find_in(text).is_none() {
            push_text(&mut fragments, text);
            return Ok(fragments);
        }

        let mut cursor = Cursor::new(text);
        self.scan(&mut cursor, Frame::Outer, 0, handler, &mut fragments)?;
        Ok(fragments)
    }

    /// Scan one frame until its closing run or the end of input.
    fn scan<H: Handler>(
        &self,
        cursor: &mut Cursor<'_>,
        frame: Frame,
        depth: usize,
        handler: &mut H,
        out: &mut Vec<Fragment<H::Output>>,
    ) -> Result<Close, ScanError> {
        let mut text_start = cursor.offset();
        let mut partial: Option<usize> = None;

        while let Some(c) = cursor.peek() {
            if let Frame::Locked { close, run, .. } = frame {
                if c == close {
                    let len = cursor.run_len(close);
                    if len >= run {
                        push_text(out, cursor.slice_from(text_start));
                        cursor.eat_run(close, run);
                        return Ok(Close::Closed);
                    }
                    // Too short to close: literal text
                    partial = Some(partial.map_or(len, |p| p.max(len)));
                    cursor.eat_run(close, len);
                    continue;
                }
            }

            if self.starts_entity(c, cursor.peek_second(), frame) {
                push_text(out, cursor.slice_from(text_start));
                self.entity(cursor, frame, depth, handler, out)?;
                text_start = cursor.offset();
                continue;
            }

            cursor.bump();
        }

        push_text(out, cursor.slice_from(text_start));
        Ok(Close::Eof { partial })
    }

    /// Whether `tag` followed by `next` opens an entity in `frame`.
    #[inline]
    fn starts_entity(&self, tag: char, next: Option<char>, frame: Frame) -> bool {
        if !tag.is_ascii_uppercase() {
            return false;
        }
        match (next, frame) {
            (Some(d), Frame::Outer) => self.delimiters.contains(d),
            (Some(d), Frame::Locked { open, .. }) => d == open,
            (None, _) => false,
        }
    }

    /// Parse one entity; the cursor sits on its tag letter.
    fn entity<H: Handler>(
        &self,
        cursor: &mut Cursor<'_>,
        frame: Frame,
        depth: usize,
        handler: &mut H,
        out: &mut Vec<Fragment<H::Output>>,
    ) -> Result<(), ScanError> {
        let offset = cursor.offset();
        let (Some(tag), Some(open)) = (cursor.next_char(), cursor.peek()) else {
            return Ok(());
        };

        let run = match frame {
            Frame::Outer => {
                let run = cursor.run_len(open);
                opening_run(tag, open, run, &cursor.rest()[run * open.len_utf8()..])
            }
            Frame::Locked { .. } => 1,
        };
        cursor.eat_run(open, run);
        let close = closing_for(open);

        if tag == DIVIDER_TAG {
            return if cursor.eat_run(close, run) {
                Ok(())
            } else {
                Err(ScanError::NonEmptyDivider { offset })
            };
        }

        if depth >= MAX_ENTITY_NESTING {
            return Err(ScanError::NestingTooDeep {
                offset,
                limit: MAX_ENTITY_NESTING,
            });
        }

        let mut body = Vec::new();
        let inner = Frame::Locked { open, close, run };
        match self.scan(cursor, inner, depth + 1, handler, &mut body)? {
            Close::Closed => {
                let value = handler.on_entity(tag, body);
                out.push(Fragment::Value(value));
                Ok(())
            }
            Close::Eof {
                partial: Some(found),
            } => Err(ScanError::DelimiterMismatch {
                tag,
                offset,
                expected: run,
                found,
            }),
            Close::Eof { partial: None } => Err(ScanError::Unterminated { tag, offset }),
        }
    }
}

/// Length of the opening run for an outer-frame entity whose delimiter
/// run is `run` chars of `open`, followed by `after`.
///
/// A self-closing delimiter has no distinct closer, so a doubled run with
/// no run of the same length further on (`E||`, and always `Z||`) is an
/// empty entity: half of it opens, half of it closes.
fn opening_run(tag: char, open: char, run: usize, after: &str) -> usize {
    if run < 2 || open != closing_for(open) {
        return run;
    }
    if tag == DIVIDER_TAG || !has_run(after, open, run) {
        run / 2
    } else {
        run
    }
}

/// Whether `text` contains `n` consecutive `c`.
fn has_run(text: &str, c: char, n: usize) -> bool {
    let mut len = 0;
    for x in text.chars() {
        if x != c {
            len = 0;
            continue;
        }
        len += 1;
        if len >= n {
            return true;
        }
    }
    false
}

/// Whether `text` holds nothing but zero-width dividers and whitespace.
///
/// Such a paragraph resolves to no output.
pub fn is_divider_only(text: &str, delimiters: &Delimiters) -> bool {
    let mut cursor = Cursor::new(text);
    let mut seen = false;

    loop {
        cursor.skip_whitespace();
        if cursor.is_eof() {
            return seen;
        }
        if cursor.next_char() != Some(DIVIDER_TAG) {
            return false;
        }
        let open = match cursor.peek() {
            Some(c) if delimiters.contains(c) => c,
            _ => return false,
        };
        let run = cursor.run_len(open);
        let run = opening_run(DIVIDER_TAG, open, run, &cursor.rest()[run * open.len_utf8()..]);
        cursor.eat_run(open, run);
        if !cursor.eat_run(closing_for(open), run) {
            return false;
        }
        seen = true;
    }
}
