//! Byte cursor and number scanning for timings lines
//!
//! A [`Cursor`] walks one bounded segment of a line. Reaching the end of the
//! segment is what stops the inner scanning loops, so a NUL byte in the input
//! is just another character.

use super::errors::TimingsError;

/// Largest value [`parse_number`] accepts
const NUMBER_LIMIT: u64 = i32::MAX as u64;

/// Position within one segment of a line
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    /// Segment being scanned
    text: &'a str,
    /// Byte offset of the current character
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of a segment
    pub(crate) const fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }

    /// Current byte offset within the segment
    pub(crate) const fn position(&self) -> usize {
        self.position
    }

    /// Current byte, or `None` at the end of the segment
    pub(crate) fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.position).copied()
    }

    /// Current character, decoded for error reporting
    pub(crate) fn peek_char(&self) -> Option<char> {
        self.text.get(self.position..)?.chars().next()
    }

    /// Step past the current byte
    pub(crate) fn bump(&mut self) {
        if self.position < self.text.len() {
            self.position += 1;
        }
    }

    /// Consume `expected` if it is the current byte
    pub(crate) fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Skip spaces and tabs
    pub(crate) fn skip_blanks(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.bump();
        }
    }

    /// Check if at end of segment
    pub(crate) const fn is_at_end(&self) -> bool {
        self.position >= self.text.len()
    }

    /// Text between `start` and the current position
    ///
    /// Only called with offsets taken at ASCII delimiters, which are always
    /// character boundaries.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        self.text.get(start..self.position).unwrap_or_default()
    }
}

/// Whether `byte` separates tokens on a timings line
pub(crate) const fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t')
}

/// Scan a run of ASCII digits into a non-negative integer
///
/// At least one digit is required. Values above `i32::MAX` are rejected
/// rather than wrapped.
pub(crate) fn parse_number(cursor: &mut Cursor<'_>) -> Result<u32, TimingsError> {
    if !matches!(cursor.peek(), Some(b'0'..=b'9')) {
        return Err(TimingsError::ExpectedDigit);
    }

    let mut value: u64 = 0;
    while let Some(digit @ b'0'..=b'9') = cursor.peek() {
        value = value * 10 + u64::from(digit - b'0');
        if value > NUMBER_LIMIT {
            return Err(TimingsError::NumberOverflow);
        }
        cursor.bump();
    }

    u32::try_from(value).map_err(|_| TimingsError::NumberOverflow)
}
