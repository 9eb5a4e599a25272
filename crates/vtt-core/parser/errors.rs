//! Parse error types for WebVTT streams
//!
//! `ParseError` is the grammar-violation half of [`CoreError`](crate::CoreError).
//! Violations inside a timings line are reported by the scanner as a
//! [`TimingsError`] and wrapped with the line they occurred on.

use core::fmt;

use thiserror::Error;

/// Grammar violation detected while reading a WebVTT stream
///
/// Line numbers are 1-based and count every line terminator consumed,
/// including the header lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Stream ended where more input was required
    #[error("unexpected end of stream at line {line}")]
    UnexpectedEnd { line: usize },

    /// Stream started a UTF-8 byte order mark but did not finish it
    #[error("incomplete UTF-8 byte order mark")]
    IncompleteBom,

    /// Stream does not start with the `WEBVTT` signature
    #[error("missing WEBVTT signature")]
    MissingSignature,

    /// Signature is followed by something other than a space or tab
    #[error("unexpected text after WEBVTT signature at line {line}")]
    InvalidSignatureLine { line: usize },

    /// Header is not followed by a blank line
    #[error("expected blank line after header at line {line}")]
    MissingHeaderSeparator { line: usize },

    /// Identifier line is not followed by a timings line
    #[error("expected cue timings at line {line}")]
    MissingTimings { line: usize },

    /// Timings line could not be scanned
    #[error("invalid cue timings at line {line}: {reason}")]
    InvalidTimings { line: usize, reason: TimingsError },

    /// Cue has timings but no payload text
    #[error("cue starting at line {line} has no payload")]
    EmptyPayload { line: usize },

    /// Line is not valid UTF-8
    #[error("line {line} is not valid UTF-8")]
    InvalidUtf8 { line: usize },

    /// Line is longer than the configured limit
    #[error("line {line} exceeds the {limit} byte line limit")]
    LineTooLong { line: usize, limit: usize },

    /// Cue has more payload lines than the configured limit
    #[error("cue payload at line {line} exceeds the {limit} line limit")]
    TooManyPayloadLines { line: usize, limit: usize },

    /// A cue was requested before the header was read
    #[error("cues requested before the WebVTT header was read")]
    NotInitialized,

    /// The header was read twice
    #[error("WebVTT header has already been read")]
    AlreadyInitialized,
    /// An earlier header check failed and the stream cannot be used
    #[error("WebVTT header was rejected")]
    HeaderRejected,
}

impl ParseError {
    /// Line the violation was detected on, if it happened inside the stream
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::UnexpectedEnd { line }
            | Self::InvalidSignatureLine { line }
            | Self::MissingHeaderSeparator { line }
            | Self::MissingTimings { line }
            | Self::InvalidTimings { line, .. }
            | Self::EmptyPayload { line }
            | Self::InvalidUtf8 { line }
            | Self::LineTooLong { line, .. }
            | Self::TooManyPayloadLines { line, .. } => Some(*line),
            Self::IncompleteBom
            | Self::MissingSignature
            | Self::NotInitialized
            | Self::AlreadyInitialized
            | Self::HeaderRejected => None,
        }
    }
}

/// Reason a timings line, timestamp or cue setting was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimingsError {
    /// Line has no `-->` token
    #[error("missing '-->' arrow")]
    MissingArrow,

    /// A number was expected but the next character is not a digit
    #[error("expected a digit")]
    ExpectedDigit,

    /// Number does not fit in a signed 32-bit integer
    #[error("number is too large")]
    NumberOverflow,

    /// A minutes or seconds group is 60 or more
    #[error("{component} value {value} is out of range")]
    OutOfRange { component: TimeComponent, value: u32 },

    /// Fraction after `.` has more than three digits
    #[error("fractional seconds have more than three digits")]
    FractionTooLong,

    /// Timestamp is followed by a character other than a space or tab
    #[error("unexpected character {0:?} after timestamp")]
    TrailingCharacter(char),

    /// Start time is followed by text other than blanks before the arrow
    #[error("unexpected text between start time and arrow")]
    JunkBeforeArrow,

    /// Setting name ends without a `:`
    #[error("cue setting name is not followed by ':'")]
    UnterminatedSettingName,

    /// Setting has nothing before its `:`
    #[error("cue setting name is empty")]
    EmptySettingName,

    /// Setting has nothing after its `:`
    #[error("cue setting value is empty")]
    EmptySettingValue,

    /// Setting value contains a second `:`
    #[error("cue setting value contains ':'")]
    ColonInSettingValue,
}

/// Timestamp group that failed a range check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeComponent {
    /// Minutes group of `MM:SS` or `HH:MM:SS`
    Minutes,
    /// Seconds group of `MM:SS` or `HH:MM:SS`
    Seconds,
}

impl fmt::Display for TimeComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        })
    }
}
