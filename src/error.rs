//! Fatal parse errors.
//!
//! Anything that aborts a `parse`/`parse_lines` call ends up here.
//! Recoverable structural problems are reported as
//! [`Diagnostic`](crate::Diagnostic)s instead.

use thiserror::Error;

use crate::inline::ScanError;

/// Error returned when a document cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Malformed entity inside a paragraph, command or begin block.
    #[error("line {line}: {source}")]
    Entity {
        /// First source line of the block containing the entity.
        line: usize,
        /// What went wrong and where inside the block content.
        #[source]
        source: ScanError,
    },

    /// An end marker did not match the innermost open begin block.
    ///
    /// Only raised with [`Options::strict_blocks`](crate::Options::strict_blocks);
    /// otherwise recorded as a diagnostic.
    #[error("line {line}: end of `{found}` does not match {}", expected_desc(.expected))]
    UnbalancedBlock {
        /// Line of the offending end marker.
        line: usize,
        /// Name on top of the begin stack, if any.
        expected: Option<String>,
        /// Name carried by the end marker.
        found: String,
    },

    /// The configured delimiter set is unusable.
    #[error("invalid entity delimiter {delimiter:?}")]
    InvalidDelimiter {
        /// The offending character, `None` for an empty set.
        delimiter: Option<char>,
    },
}

fn expected_desc(expected: &Option<String>) -> String {
    match expected {
        Some(name) => format!("open block `{name}`"),
        None => "any open block".to_string(),
    }
}

/// Convenience alias for results of parse calls.
pub type Result<T> = std::result::Result<T, ParseError>;

impl ParseError {
    /// Attach a block line to a scanner error.
    pub fn entity(line: usize, source: ScanError) -> Self {
        ParseError::Entity { line, source }
    }

    /// Line of the source the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Entity { line, .. } | ParseError::UnbalancedBlock { line, .. } => {
                Some(*line)
            }
            ParseError::InvalidDelimiter { .. } => None,
        }
    }
}
