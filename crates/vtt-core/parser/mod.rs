//! Streaming WebVTT parser
//!
//! [`Parser`] pulls bytes from a [`CharSource`] and hands out one [`Cue`] per
//! call. [`Parser::init`] must run once first to validate the header.
//!
//! # Example
//!
//! ```rust
//! use vtt_core::parser::{ParseStatus, Parser};
//! use vtt_core::{source::SliceSource, Cue, Time};
//!
//! let input = "WEBVTT\n\n00:00:01.000 --> 00:00:02.500 align:middle\nHello world\n";
//! let mut parser = Parser::new(SliceSource::from(input));
//! parser.init()?;
//!
//! let mut cue = Cue::default();
//! assert_eq!(parser.parse(&mut cue)?, ParseStatus::Cue);
//! assert_eq!(cue.start_time, Time::new(0, 0, 1, 0));
//! assert_eq!(cue.payload, ["Hello world"]);
//!
//! assert_eq!(parser.parse(&mut cue)?, ParseStatus::EndOfStream);
//! # Ok::<(), vtt_core::CoreError>(())
//! ```

pub mod ast;
mod document;
pub mod errors;
mod header;
mod limits;
mod reader;
pub(crate) mod scanner;
pub(crate) mod timings;

pub use ast::{Cue, Header, Presentation, Setting, Time};
pub use document::Document;
pub use errors::{ParseError, TimeComponent, TimingsError};
pub use limits::{ParserLimits, DEFAULT_MAX_LINE_LENGTH, DEFAULT_MAX_PAYLOAD_LINES};

use core::iter::FusedIterator;

use tracing::{debug, trace};

use crate::{source::CharSource, Result};
use reader::LineReader;
use timings::{parse_timings_line, ARROW};

/// Outcome of a successful [`Parser::parse`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseStatus {
    /// A cue was read into the caller's record
    Cue,
    /// No cues remain; the record was left untouched
    EndOfStream,
}

/// Where the parser is in the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    /// Header has not been read yet
    AwaitingHeader,
    /// Header accepted; cues follow
    ReadingCues,
    /// Header rejected; the stream is unusable
    Failed,
}

/// Pull parser over a WebVTT byte stream
///
/// The parser owns its source value. To keep ownership elsewhere, pass
/// `&mut source`; `&mut S` is itself a [`CharSource`].
///
/// A failed [`parse`](Self::parse) is not recovered from. The next call
/// resumes reading wherever the failure left the stream. A failed
/// [`init`](Self::init) is final: every later call reports
/// [`ParseError::HeaderRejected`].
///
/// Every line must be valid UTF-8. A stream in another encoding, such as
/// Latin-1, fails with [`ParseError::InvalidUtf8`] at the first line that
/// does not decode; transcode it before handing it to the parser.
#[derive(Debug)]
pub struct Parser<S> {
    /// Byte and line layer
    reader: LineReader<S>,
    /// Limits in force
    limits: ParserLimits,
    /// Whether the header has been read
    state: ParserState,
}

impl<S: CharSource> Parser<S> {
    /// Create a parser with default limits
    ///
    /// The defaults from [`ParserLimits::default`] reject lines longer than
    /// 64 KiB and cues with more than 4096 payload lines. Use
    /// [`with_limits`](Self::with_limits) and [`ParserLimits::unlimited`] to
    /// lift them.
    pub fn new(source: S) -> Self {
        Self::with_limits(source, ParserLimits::default())
    }

    /// Create a parser with explicit limits
    pub fn with_limits(source: S, limits: ParserLimits) -> Self {
        Self {
            reader: LineReader::new(source, limits.max_line_length),
            limits,
            state: ParserState::AwaitingHeader,
        }
    }

    /// Limits in force
    #[must_use]
    pub const fn limits(&self) -> &ParserLimits {
        &self.limits
    }

    /// Number of lines read so far
    #[must_use]
    pub const fn line(&self) -> usize {
        self.reader.line()
    }

    /// Give back the source, positioned wherever parsing stopped
    pub fn into_inner(self) -> S {
        self.reader.into_inner()
    }

    /// Validate the byte order mark, signature and header lines
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::AlreadyInitialized`] on a second call after
    /// success, [`ParseError::HeaderRejected`] on any call after a failure,
    /// any source error, or the header violation found.
    pub fn init(&mut self) -> Result<Header> {
        match self.state {
            ParserState::AwaitingHeader => {}
            ParserState::ReadingCues => return Err(ParseError::AlreadyInitialized.into()),
            ParserState::Failed => return Err(ParseError::HeaderRejected.into()),
        }

        match header::read_header(&mut self.reader) {
            Ok(header) => {
                debug!(
                    has_bom = header.has_bom,
                    description = %header.description,
                    "accepted WebVTT header"
                );
                self.state = ParserState::ReadingCues;
                Ok(header)
            }
            Err(err) => {
                debug!(line = self.reader.line(), error = %err, "rejected WebVTT header");
                self.state = ParserState::Failed;
                Err(err)
            }
        }
    }

    /// Read the next cue into `cue`
    ///
    /// Blank lines before the cue are skipped. On
    /// [`ParseStatus::EndOfStream`] the record is not touched. On error the
    /// record is not touched either, but callers should not rely on its
    /// contents.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NotInitialized`] before [`init`](Self::init),
    /// [`ParseError::HeaderRejected`] after a failed `init`, any source
    /// error, or the grammar violation found. A cue cut short by the end of
    /// the stream is a violation.
    pub fn parse(&mut self, cue: &mut Cue) -> Result<ParseStatus> {
        match self.state {
            ParserState::ReadingCues => {}
            ParserState::AwaitingHeader => return Err(ParseError::NotInitialized.into()),
            ParserState::Failed => return Err(ParseError::HeaderRejected.into()),
        }

        match self.read_cue() {
            Ok(Some(parsed)) => {
                trace!(
                    line = self.reader.line(),
                    identifier = %parsed.identifier,
                    start = %parsed.start_time,
                    stop = %parsed.stop_time,
                    settings = parsed.settings.len(),
                    payload = parsed.payload.len(),
                    "parsed cue"
                );
                *cue = parsed;
                Ok(ParseStatus::Cue)
            }
            Ok(None) => {
                trace!(line = self.reader.line(), "end of stream");
                Ok(ParseStatus::EndOfStream)
            }
            Err(err) => {
                debug!(line = self.reader.line(), error = %err, "rejected cue");
                Err(err)
            }
        }
    }

    /// Read the next cue into a fresh record
    ///
    /// # Errors
    ///
    /// Same as [`parse`](Self::parse).
    pub fn next_cue(&mut self) -> Result<Option<Cue>> {
        let mut cue = Cue::default();
        match self.parse(&mut cue)? {
            ParseStatus::Cue => Ok(Some(cue)),
            ParseStatus::EndOfStream => Ok(None),
        }
    }

    /// Iterate over the remaining cues
    ///
    /// The iterator stops after end of stream or after yielding the first
    /// error.
    pub fn cues(&mut self) -> Cues<'_, S> {
        Cues {
            parser: self,
            finished: false,
        }
    }

    /// Read one cue block, or `None` if only blank lines remain
    fn read_cue(&mut self) -> Result<Option<Cue>> {
        let first = loop {
            match self.reader.read_line()? {
                None => return Ok(None),
                Some(line) if line.is_empty() => {}
                Some(line) => break line,
            }
        };
        let first_line = self.reader.line();

        // The arrow may not appear in an identifier, so its presence marks
        // the timings line.
        let (identifier, timings_line) = if first.contains(ARROW) {
            (String::new(), first)
        } else {
            let Some(next) = self.reader.read_line()? else {
                return Err(ParseError::UnexpectedEnd {
                    line: self.reader.line() + 1,
                }
                .into());
            };
            if !next.contains(ARROW) {
                return Err(ParseError::MissingTimings {
                    line: self.reader.line(),
                }
                .into());
            }
            (first, next)
        };

        let line = self.reader.line();
        let timings = parse_timings_line(&timings_line)
            .map_err(|reason| ParseError::InvalidTimings { line, reason })?;

        let mut payload = Vec::new();
        while let Some(text) = self.reader.read_line()? {
            if text.is_empty() {
                break;
            }
            if payload.len() >= self.limits.max_payload_lines {
                return Err(ParseError::TooManyPayloadLines {
                    line: self.reader.line(),
                    limit: self.limits.max_payload_lines,
                }
                .into());
            }
            payload.push(text);
        }

        if payload.is_empty() {
            return Err(ParseError::EmptyPayload { line: first_line }.into());
        }

        Ok(Some(Cue {
            identifier,
            start_time: timings.start,
            stop_time: timings.stop,
            settings: timings.settings,
            payload,
        }))
    }
}

/// Iterator returned by [`Parser::cues`]
#[derive(Debug)]
pub struct Cues<'p, S> {
    /// Parser being drained
    parser: &'p mut Parser<S>,
    /// Set once end of stream or an error was reported
    finished: bool,
}

impl<S: CharSource> Iterator for Cues<'_, S> {
    type Item = Result<Cue>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.parser.next_cue() {
            Ok(Some(cue)) => Some(Ok(cue)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl<S: CharSource> FusedIterator for Cues<'_, S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{source::SliceSource, CoreError};

    fn ready(input: &str) -> Parser<SliceSource<'_>> {
        let mut parser = Parser::new(SliceSource::from(input));
        parser.init().unwrap();
        parser
    }

    fn parse_error(input: &str) -> ParseError {
        let mut parser = ready(input);
        match parser.next_cue() {
            Err(CoreError::Parse(err)) => err,
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn parse_before_init() {
        let mut parser = Parser::new(SliceSource::from("WEBVTT\n\n"));
        let err = parser.next_cue().unwrap_err();
        assert!(matches!(err, CoreError::Parse(ParseError::NotInitialized)));
    }

    #[test]
    fn init_twice() {
        let mut parser = ready("WEBVTT\n\n");
        let err = parser.init().unwrap_err();
        assert!(matches!(
            err,
            CoreError::Parse(ParseError::AlreadyInitialized)
        ));
    }

    #[test]
    fn rejected_header_is_final() {
        let mut parser = Parser::new(SliceSource::new(b"XWEBVTT\n\n1 --> 2\nhi\n"));
        let err = parser.init().unwrap_err();
        assert!(matches!(err, CoreError::Parse(ParseError::MissingSignature)));

        let err = parser.init().unwrap_err();
        assert!(matches!(err, CoreError::Parse(ParseError::HeaderRejected)));
        let err = parser.next_cue().unwrap_err();
        assert!(matches!(err, CoreError::Parse(ParseError::HeaderRejected)));
    }

    #[test]
    fn identifier_line() {
        let mut parser = ready("WEBVTT\n\nintro\n1 --> 2\ntext\n");
        let cue = parser.next_cue().unwrap().unwrap();
        assert_eq!(cue.identifier, "intro");
        assert_eq!(cue.payload, ["text"]);
    }

    #[test]
    fn identifier_then_end_of_stream() {
        assert_eq!(
            parse_error("WEBVTT\n\nintro"),
            ParseError::UnexpectedEnd { line: 4 }
        );
    }

    #[test]
    fn identifier_without_timings() {
        assert_eq!(
            parse_error("WEBVTT\n\nintro\nnot timings\ntext\n"),
            ParseError::MissingTimings { line: 4 }
        );
    }

    #[test]
    fn blank_line_after_identifier() {
        assert_eq!(
            parse_error("WEBVTT\n\nintro\n\n1 --> 2\ntext\n"),
            ParseError::MissingTimings { line: 4 }
        );
    }

    #[test]
    fn timings_error_carries_line() {
        assert_eq!(
            parse_error("WEBVTT\n\n\n\n1x --> 3\ntext\n"),
            ParseError::InvalidTimings {
                line: 5,
                reason: TimingsError::TrailingCharacter('x'),
            }
        );
        assert_eq!(
            parse_error("WEBVTT\n\n1 -> 2 --> 3\ntext\n"),
            ParseError::InvalidTimings {
                line: 3,
                reason: TimingsError::JunkBeforeArrow,
            }
        );
    }

    #[test]
    fn empty_payload() {
        assert_eq!(
            parse_error("WEBVTT\n\n1 --> 2\n\ntext\n"),
            ParseError::EmptyPayload { line: 3 }
        );
        assert_eq!(
            parse_error("WEBVTT\n\n1 --> 2"),
            ParseError::EmptyPayload { line: 3 }
        );
    }

    #[test]
    fn payload_limit() {
        let limits = ParserLimits {
            max_payload_lines: 2,
            ..ParserLimits::default()
        };
        let mut parser =
            Parser::with_limits(SliceSource::from("WEBVTT\n\n1 --> 2\na\nb\nc\n"), limits);
        parser.init().unwrap();
        let err = parser.next_cue().unwrap_err();
        assert!(matches!(
            err,
            CoreError::Parse(ParseError::TooManyPayloadLines { line: 6, limit: 2 })
        ));
    }

    #[test]
    fn end_of_stream_leaves_record_untouched() {
        let mut parser = ready("WEBVTT\n\n1 --> 2\ntext\n\n\n");
        let mut cue = Cue::default();
        assert_eq!(parser.parse(&mut cue).unwrap(), ParseStatus::Cue);
        let snapshot = cue.clone();
        assert_eq!(parser.parse(&mut cue).unwrap(), ParseStatus::EndOfStream);
        assert_eq!(parser.parse(&mut cue).unwrap(), ParseStatus::EndOfStream);
        assert_eq!(cue, snapshot);
    }

    #[test]
    fn record_is_overwritten() {
        let mut parser = ready("WEBVTT\n\nid\n1 --> 2 a:b\nfirst\n\n3 --> 4\nsecond\n");
        let mut cue = Cue::default();
        parser.parse(&mut cue).unwrap();
        parser.parse(&mut cue).unwrap();
        assert_eq!(cue.identifier, "");
        assert!(cue.settings.is_empty());
        assert_eq!(cue.payload, ["second"]);
    }

    #[test]
    fn iterator_stops_after_error() {
        let mut parser = ready("WEBVTT\n\n1 --> 2\nok\n\nbad\nbad\n\n3 --> 4\nlater\n");
        let results: Vec<_> = parser.cues().collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }

    #[test]
    fn caller_can_resume_after_error() {
        let mut parser = ready("WEBVTT\n\nbad\nbad\n\n3 --> 4\nlater\n");
        assert!(parser.next_cue().is_err());
        let cue = parser.next_cue().unwrap().unwrap();
        assert_eq!(cue.payload, ["later"]);
    }

    #[test]
    fn borrowed_source() {
        let mut source = SliceSource::from("WEBVTT\n\n1 --> 2\ntext\n\nrest");
        {
            let mut parser = Parser::new(&mut source);
            parser.init().unwrap();
            assert!(parser.next_cue().unwrap().is_some());
        }
        assert_eq!(source.remaining(), b"rest");
    }
}
