//! Entity delimiters.

use smallvec::SmallVec;

use crate::error::ParseError;

/// Closing char for an opening delimiter.
///
/// Bracket pairs map to their mirror; every other char closes itself.
#[inline]
pub const fn closing_for(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        '<' => '>',
        other => other,
    }
}

/// The set of chars accepted as opening delimiters at the outermost level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    chars: SmallVec<[char; 4]>,
    /// All chars are ASCII, so byte search applies.
    ascii: bool,
}

impl Delimiters {
    /// Build a set from a string of delimiter chars.
    ///
    /// Duplicates are ignored. Whitespace and ASCII alphanumerics are
    /// rejected since they would make every word an entity candidate.
    pub fn new(spec: &str) -> Result<Self, ParseError> {
        let mut chars: SmallVec<[char; 4]> = SmallVec::new();
        for c in spec.chars() {
            if c.is_whitespace() || c.is_ascii_alphanumeric() {
                return Err(ParseError::InvalidDelimiter { delimiter: Some(c) });
            }
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
        if chars.is_empty() {
            return Err(ParseError::InvalidDelimiter { delimiter: None });
        }
        let ascii = chars.iter().all(char::is_ascii);
        Ok(Self { chars, ascii })
    }

    /// Whether `c` opens an entity at the outermost level.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// The configured chars, in configuration order.
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Byte offset of the first delimiter char in `text`.
    pub fn find_in(&self, text: &str) -> Option<usize> {
        if !self.ascii {
            return text.find(|c| self.contains(c));
        }
        let bytes = text.as_bytes();
        // ASCII bytes never occur inside multi-byte sequences
        match self.chars.as_slice() {
            [a] => memchr::memchr(*a as u8, bytes),
            [a, b] => memchr::memchr2(*a as u8, *b as u8, bytes),
            [a, b, c] => memchr::memchr3(*a as u8, *b as u8, *c as u8, bytes),
            _ => bytes.iter().position(|&b| self.contains(b as char)),
        }
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        let mut chars = SmallVec::new();
        chars.push('<');
        Self { chars, ascii: true }
    }
}
