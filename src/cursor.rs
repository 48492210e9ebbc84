//! Char-aware cursor over a string slice.
//!
//! Offsets are byte offsets into the input and always sit on a char
//! boundary. Both the block classifier and the entity scanner walk their
//! input with this cursor.

/// A cursor for scanning a `&str` one char at a time.
///
/// # Example
/// ```
/// use tagdown::cursor::Cursor;
///
/// let mut cursor = Cursor::new("B<<bold>>");
///
/// assert_eq!(cursor.peek(), Some('B'));
/// cursor.bump();
/// assert_eq!(cursor.run_len('<'), 2);
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of `input`.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Number of bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Check if cursor is at end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The unconsumed part of the input.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Peek the current char without advancing.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Peek the char after the current one.
    #[inline]
    pub fn peek_second(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Advance past the current char.
    #[inline]
    pub fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Consume and return the current char.
    #[inline]
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Length of the run of `c` starting at the current position.
    pub fn run_len(&self, c: char) -> usize {
        self.rest().chars().take_while(|&x| x == c).count()
    }

    /// Consume `n` repetitions of `c`. Returns false and leaves the cursor
    /// untouched if fewer than `n` are present.
    pub fn eat_run(&mut self, c: char, n: usize) -> bool {
        if self.run_len(c) < n {
            return false;
        }
        self.pos += c.len_utf8() * n;
        true
    }

    /// Skip while predicate is true, returning the number of chars skipped.
    #[inline]
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(char) -> bool,
    {
        let mut count = 0;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.pos += c.len_utf8();
            count += 1;
        }
        count
    }

    /// Skip any whitespace.
    #[inline]
    pub fn skip_whitespace(&mut self) -> usize {
        self.skip_while(char::is_whitespace)
    }

    /// Consume the longest run of non-whitespace chars and return it.
    pub fn take_token(&mut self) -> &'a str {
        let start = self.pos;
        self.skip_while(|c| !c.is_whitespace());
        &self.input[start..self.pos]
    }

    /// Slice from a start offset to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    /// Find the next occurrence of an ASCII byte using memchr.
    #[inline]
    pub fn find(&self, needle: u8) -> Option<usize> {
        memchr::memchr(needle, self.rest().as_bytes())
    }

    /// Consume up to the next newline, returning the line without its
    /// terminator (a trailing `\r` is dropped as well).
    pub fn consume_line(&mut self) -> &'a str {
        let start = self.pos;
        let end = match self.find(b'\n') {
            Some(n) => {
                self.pos += n + 1;
                start + n
            }
            None => {
                self.pos = self.input.len();
                self.input.len()
            }
        };
        let line = &self.input[start..end];
        line.strip_suffix('\r').unwrap_or(line)
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset())
            .field("remaining", &self.remaining())
            .finish()
    }
}
