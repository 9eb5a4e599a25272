//! Character sources feeding the parser
//!
//! The parser pulls one byte at a time through [`CharSource`]. End-of-stream
//! is `Ok(None)` and is kept apart from failures, which are plain
//! `io::Error`s handed back to the caller untouched.
//!
//! Two sources are provided: [`SliceSource`] for text already in memory and
//! [`ReaderSource`] for anything implementing [`io::Read`]. Opening files is
//! left to the caller.

use std::io::{self, Read};

/// Supplies the bytes of a WebVTT stream one at a time
///
/// There is no seeking and no peeking; the parser keeps its own single byte
/// of lookahead.
pub trait CharSource {
    /// Get the next byte of the stream
    ///
    /// # Errors
    ///
    /// Returns whatever error the underlying stream reports.
    fn next_char(&mut self) -> io::Result<Option<u8>>;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn next_char(&mut self) -> io::Result<Option<u8>> {
        (**self).next_char()
    }
}

impl<S: CharSource + ?Sized> CharSource for Box<S> {
    fn next_char(&mut self) -> io::Result<Option<u8>> {
        (**self).next_char()
    }
}

/// Source over bytes already in memory
///
/// # Example
///
/// ```rust
/// use vtt_core::source::{CharSource, SliceSource};
///
/// let mut source = SliceSource::from("WE");
/// assert_eq!(source.next_char()?, Some(b'W'));
/// assert_eq!(source.next_char()?, Some(b'E'));
/// assert_eq!(source.next_char()?, None);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    /// Remaining input
    bytes: &'a [u8],
    /// Byte offset of the next byte to hand out
    position: usize,
}

impl<'a> SliceSource<'a> {
    /// Create a source over a byte slice
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// Number of bytes handed out so far
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Bytes not handed out yet
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.position..]
    }
}

impl<'a> From<&'a str> for SliceSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for SliceSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl CharSource for SliceSource<'_> {
    fn next_char(&mut self) -> io::Result<Option<u8>> {
        let byte = self.bytes.get(self.position).copied();
        if byte.is_some() {
            self.position += 1;
        }
        Ok(byte)
    }
}

/// Source adapting any [`io::Read`]
///
/// Bytes are requested one at a time, so unbuffered readers such as files or
/// sockets should be wrapped in an [`io::BufReader`] first. Interrupted
/// reads are retried.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// use vtt_core::source::{CharSource, ReaderSource};
///
/// let mut source = ReaderSource::new(Cursor::new(b"W".to_vec()));
/// assert_eq!(source.next_char()?, Some(b'W'));
/// assert_eq!(source.next_char()?, None);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct ReaderSource<R> {
    /// Byte iterator over the wrapped reader
    bytes: io::Bytes<R>,
}

impl<R: Read> ReaderSource<R> {
    /// Wrap a reader
    pub fn new(reader: R) -> Self {
        Self {
            bytes: reader.bytes(),
        }
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> io::Result<Option<u8>> {
        self.bytes.next().transpose()
    }
}
