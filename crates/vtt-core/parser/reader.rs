//! Character and line layer
//!
//! Wraps a [`CharSource`] with a single byte of pushback and splits the
//! stream into lines. A line ends at LF, CR, or CR LF.

use tracing::trace;

use crate::{parser::ParseError, source::CharSource, Result};
use std::io;

/// Line feed
const LF: u8 = b'\n';
/// Carriage return
const CR: u8 = b'\r';

/// Line reader over a character source
#[derive(Debug)]
pub(crate) struct LineReader<S> {
    /// Where bytes come from
    source: S,
    /// Byte to hand out before asking the source again
    pushback: Option<u8>,
    /// Number of lines read so far
    line: usize,
    /// Longest line accepted, in bytes
    max_line_length: usize,
}

impl<S: CharSource> LineReader<S> {
    /// Create a reader positioned at the start of the stream
    pub(crate) const fn new(source: S, max_line_length: usize) -> Self {
        Self {
            source,
            pushback: None,
            line: 0,
            max_line_length,
        }
    }

    /// Number of lines read so far, which is also the 1-based number of the
    /// most recent line
    pub(crate) const fn line(&self) -> usize {
        self.line
    }

    /// Give back the wrapped source
    pub(crate) fn into_inner(self) -> S {
        self.source
    }

    /// Next byte, taking the pushed-back byte first
    pub(crate) fn get_char(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pushback.take() {
            return Ok(Some(byte));
        }
        self.source.next_char()
    }

    /// Push one byte back to be returned by the next [`get_char`](Self::get_char)
    pub(crate) fn unget_char(&mut self, byte: u8) {
        debug_assert!(self.pushback.is_none(), "only one byte of pushback");
        self.pushback = Some(byte);
    }

    /// Consume the rest of a line terminator whose first byte was `byte`
    ///
    /// LF ends the line at once. CR ends it too, but swallows a directly
    /// following LF so that CR LF counts as one terminator.
    pub(crate) fn consume_terminator(&mut self, byte: u8) -> io::Result<()> {
        debug_assert!(byte == LF || byte == CR);
        if byte == LF {
            return Ok(());
        }

        match self.get_char()? {
            Some(LF) | None => {}
            Some(next) => self.unget_char(next),
        }
        Ok(())
    }

    /// Read one line without its terminator
    ///
    /// Returns `Ok(None)` only when the stream ended before any byte of a new
    /// line was read. Text after the last terminator is still returned as a
    /// line.
    pub(crate) fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();

        loop {
            match self.get_char()? {
                None if buf.is_empty() => return Ok(None),
                None => break,
                Some(byte @ (LF | CR)) => {
                    self.consume_terminator(byte)?;
                    break;
                }
                Some(byte) => {
                    if buf.len() >= self.max_line_length {
                        return Err(ParseError::LineTooLong {
                            line: self.line + 1,
                            limit: self.max_line_length,
                        }
                        .into());
                    }
                    buf.push(byte);
                }
            }
        }

        self.line += 1;
        trace!(line = self.line, len = buf.len(), "read line");

        String::from_utf8(buf)
            .map(Some)
            .map_err(|_| ParseError::InvalidUtf8 { line: self.line }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{source::SliceSource, CoreError};

    fn reader(text: &str) -> LineReader<SliceSource<'_>> {
        LineReader::new(SliceSource::from(text), 64)
    }

    fn lines(text: &str) -> Vec<String> {
        let mut reader = reader(text);
        let mut out = Vec::new();
        while let Some(line) = reader.read_line().unwrap() {
            out.push(line);
        }
        out
    }

    #[test]
    fn three_terminators() {
        assert_eq!(lines("a\nb\rc\r\nd"), ["a", "b", "c", "d"]);
    }

    #[test]
    fn cr_cr_is_two_lines() {
        assert_eq!(lines("a\r\rb"), ["a", "", "b"]);
    }

    #[test]
    fn lf_cr_is_two_terminators() {
        assert_eq!(lines("a\n\rb"), ["a", "", "b"]);
    }

    #[test]
    fn trailing_cr_at_end_of_stream() {
        assert_eq!(lines("a\r"), ["a"]);
    }

    #[test]
    fn empty_stream_has_no_lines() {
        let mut reader = reader("");
        assert_eq!(reader.read_line().unwrap(), None);
        assert_eq!(reader.line(), 0);
    }

    #[test]
    fn blank_lines_are_lines() {
        assert_eq!(lines("\n\n"), ["", ""]);
    }

    #[test]
    fn pushback_is_delivered_first() {
        let mut reader = reader("b");
        reader.unget_char(b'a');
        assert_eq!(reader.get_char().unwrap(), Some(b'a'));
        assert_eq!(reader.get_char().unwrap(), Some(b'b'));
        assert_eq!(reader.get_char().unwrap(), None);
    }

    #[test]
    fn counts_lines() {
        let mut reader = reader("x\ny\n");
        reader.read_line().unwrap();
        reader.read_line().unwrap();
        assert_eq!(reader.line(), 2);
        assert_eq!(reader.read_line().unwrap(), None);
        assert_eq!(reader.line(), 2);
    }

    #[test]
    fn line_limit() {
        let mut reader = LineReader::new(SliceSource::from("abcd\n"), 3);
        let err = reader.read_line().unwrap_err();
        assert!(matches!(
            err,
            CoreError::Parse(ParseError::LineTooLong { line: 1, limit: 3 })
        ));
    }

    #[test]
    fn invalid_utf8() {
        let mut reader = LineReader::new(SliceSource::new(b"ok\n\xff\xfe\n"), 64);
        assert_eq!(reader.read_line().unwrap().as_deref(), Some("ok"));
        let err = reader.read_line().unwrap_err();
        assert!(matches!(
            err,
            CoreError::Parse(ParseError::InvalidUtf8 { line: 2 })
        ));
    }
}
