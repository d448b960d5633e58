//! Byte cursor for navigating SVG source

/// Cursor over the source bytes.
///
/// Every stop position the parser slices at is an ASCII delimiter, so
/// [`Cursor::slice_from`] always lands on `char` boundaries.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create cursor at the start of `input`
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Get current byte without consuming
    pub fn current(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Peek at byte ahead without consuming
    pub fn peek(&self, ahead: usize) -> Option<u8> {
        self.input
            .as_bytes()
            .get(self.pos.saturating_add(ahead))
            .copied()
    }

    /// Advance cursor by one byte
    pub fn advance(&mut self) {
        if self.pos < self.input.len() {
            self.pos += 1;
        }
    }

    /// Advance cursor by `n` bytes, stopping at end of input
    pub fn advance_by(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.input.len());
    }

    /// Move the cursor to an absolute position, never backwards
    pub fn jump_to(&mut self, pos: usize) {
        self.pos = pos.clamp(self.pos, self.input.len());
    }

    /// Skip whitespace, returning whether anything was skipped
    pub fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.current().is_some_and(is_whitespace) {
            self.advance();
        }
        self.pos > start
    }

    /// Consume byte if it matches
    pub fn consume(&mut self, expected: u8) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Check whether the remaining input starts with `pattern`
    pub fn starts_with(&self, pattern: &[u8]) -> bool {
        self.remaining().starts_with(pattern)
    }

    /// Absolute position of the next occurrence of `pattern`, if any
    pub fn find(&self, pattern: &[u8]) -> Option<usize> {
        if pattern.is_empty() {
            return Some(self.pos);
        }
        self.remaining()
            .windows(pattern.len())
            .position(|window| window == pattern)
            .map(|idx| self.pos + idx)
    }

    /// Get remaining bytes
    pub fn remaining(&self) -> &'a [u8] {
        self.input.as_bytes().get(self.pos..).unwrap_or_default()
    }

    /// Get current position index
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Check if at end of input
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Get text from `start` up to the current position
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Get text between two absolute positions
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.input.get(start..end).unwrap_or_default()
    }
}

/// ASCII whitespace as it may separate attributes
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C')
}

/// Characters allowed in tag and attribute names
pub const fn is_name_char(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b':' | b'_' | b'-')
}
