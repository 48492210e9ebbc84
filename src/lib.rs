//! tagdown: embeddable parser for tagged-entity markup
//!
//! The input is plain text made of:
//! - paragraphs (lines of text, blank-line separated)
//! - commands `=name rest`, begin markers `+name rest` and end markers `-name`
//! - verbatim runs (lines starting with whitespace)
//! - inline entities: a tag letter, a delimiter run, a body and a matching
//!   closing run (`B<bold>`, `C<< a > b >>`, `Z<>`)
//!
//! What a command or an entity letter *means* is up to the caller, who
//! supplies a [`Handler`]. The parser resolves entities bottom-up, hands each
//! block to the handler and collects the returned values in a [`Document`].
//!
//! # Design
//! - Two phases: classify and normalize all blocks, then dispatch
//! - The entity scanner threads its delimiter regime through each recursion
//!   frame; nothing is shared between parses
//! - Structural problems are recoverable [`Diagnostic`]s, malformed entities
//!   are a fatal [`ParseError`]

pub mod block;
pub mod cursor;
pub mod diagnostic;
pub mod dispatch;
pub mod error;
pub mod handler;
pub mod inline;
pub mod limits;
pub mod outline;
pub mod registry;

// Re-export primary types
pub use block::{Block, BlockKind, BlockParser, merge_verbatim};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use dispatch::{Document, Resolved};
pub use error::{ParseError, Result};
pub use handler::{Compose, Handler, PlainText};
pub use inline::{Delimiters, EntityParser, Fragment, ScanError, closing_for};
pub use outline::Outline;
pub use registry::Registry;

use cursor::Cursor;
use dispatch::Dispatcher;

/// Parser options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Chars accepted as opening entity delimiters.
    pub delimiters: String,
    /// Treat a mismatched end marker as a fatal error instead of a
    /// diagnostic.
    pub strict_blocks: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            delimiters: "<".to_string(),
            strict_blocks: false,
        }
    }
}

/// A configured parser.
///
/// Holds only immutable configuration; every call owns its own state, so
/// one parser can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    delimiters: Delimiters,
    strict_blocks: bool,
}

impl Parser {
    /// Parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser with validated options.
    pub fn with_options(options: Options) -> Result<Self> {
        Ok(Self {
            delimiters: Delimiters::new(&options.delimiters)?,
            strict_blocks: options.strict_blocks,
        })
    }

    /// The active delimiter set.
    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    /// Parse a whole document.
    ///
    /// # Example
    /// ```
    /// use tagdown::{Parser, PlainText};
    ///
    /// let doc = Parser::new().parse("=head1 B<Hello>\n\nSome I<text>.", &mut PlainText).unwrap();
    /// let values: Vec<_> = doc.values().cloned().collect();
    /// assert_eq!(values, ["Hello", "Some text."]);
    /// ```
    pub fn parse<H: Handler>(&self, text: &str, handler: &mut H) -> Result<Document<H::Output>> {
        self.parse_lines(split_lines(text), handler)
    }

    /// Parse a document given as an ordered sequence of lines.
    pub fn parse_lines<I, S, H>(&self, lines: I, handler: &mut H) -> Result<Document<H::Output>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        H: Handler,
    {
        let (blocks, mut diagnostics) = self.blocks_from_lines(lines);
        let block_count = blocks.len();

        let blocks = Dispatcher::new(&self.delimiters, handler, self.strict_blocks)
            .run(blocks, &mut diagnostics)?;

        log::debug!(
            "parsed {block_count} blocks with {} diagnostics",
            diagnostics.len()
        );
        Ok(Document {
            blocks,
            diagnostics,
        })
    }

    /// Classify and normalize a document without dispatching it.
    pub fn blocks(&self, text: &str) -> (Vec<Block>, Vec<Diagnostic>) {
        self.blocks_from_lines(split_lines(text))
    }

    fn blocks_from_lines<I, S>(&self, lines: I) -> (Vec<Block>, Vec<Diagnostic>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut blocks = Vec::new();
        let mut diagnostics = Vec::new();
        BlockParser::new(lines).parse(&mut blocks, &mut diagnostics);
        merge_verbatim(&mut blocks, &self.delimiters);
        (blocks, diagnostics)
    }
}

/// Split text into lines (`\n` or `\r\n` terminated).
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut cursor = Cursor::new(text);
    std::iter::from_fn(move || (!cursor.is_eof()).then(|| cursor.consume_line()))
}

/// Parse a document with default options, reducing entities to their text.
///
/// # Example
/// ```
/// let doc = tagdown::parse("A B<bold> move.").unwrap();
/// assert_eq!(doc.blocks[0].value, "A bold move.");
/// ```
pub fn parse(text: &str) -> Result<Document<String>> {
    Parser::new().parse(text, &mut PlainText)
}

/// Parse pre-split lines with default options.
pub fn parse_lines<I, S>(lines: I) -> Result<Document<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Parser::new().parse_lines(lines, &mut PlainText)
}
