//! Block-level classification.
//!
//! The classifier is line-oriented and produces:
//! - Paragraphs (plain lines joined with single spaces)
//! - Commands (`=name rest`)
//! - Begin and end markers (`+name rest`, `-name`)
//! - Verbatim runs (lines starting with whitespace)
//!
//! [`merge_verbatim`] then collapses adjacent verbatim blocks.

mod parser;
mod types;
pub mod verbatim;

pub use parser::BlockParser;
pub use types::{Block, BlockKind};
pub use verbatim::merge_verbatim;
