//! Recoverable structural warnings.

use std::fmt;

/// What kind of recoverable problem was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A command, begin or end marker directly followed other content
    /// without a separating blank line. The pending block was closed.
    MalformedAdjacency,
    /// An end marker did not match the innermost open begin block.
    UnbalancedBlock {
        /// Name on top of the begin stack, `None` if the stack was empty.
        expected: Option<String>,
        /// Name carried by the end marker.
        found: String,
    },
    /// A begin block was still open at the end of the document.
    UnclosedBlock {
        /// Name of the begin block.
        name: String,
    },
    /// Text after an end marker's name was dropped.
    TrailingEndText {
        /// Name carried by the end marker.
        name: String,
    },
}

/// A recoverable problem, tied to a 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Create a diagnostic and emit it through the `log` facade.
    pub fn report(line: usize, kind: DiagnosticKind) -> Self {
        let diagnostic = Self { line, kind };
        log::warn!("{diagnostic}");
        diagnostic
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            DiagnosticKind::MalformedAdjacency => {
                f.write_str("marker line without a preceding blank line")
            }
            DiagnosticKind::UnbalancedBlock {
                expected: Some(expected),
                found,
            } => write!(f, "end of `{found}` while `{expected}` is open"),
            DiagnosticKind::UnbalancedBlock {
                expected: None,
                found,
            } => write!(f, "end of `{found}` without an open block"),
            DiagnosticKind::UnclosedBlock { name } => write!(f, "`{name}` is never closed"),
            DiagnosticKind::TrailingEndText { name } => {
                write!(f, "text after end of `{name}` ignored")
            }
        }
    }
}
