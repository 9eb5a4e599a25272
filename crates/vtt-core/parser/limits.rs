//! Resource limits for parsing untrusted streams
//!
//! A stream with no line terminators, or a cue with an endless payload, would
//! otherwise make the parser buffer without bound.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default maximum bytes in one line (64 KiB)
pub const DEFAULT_MAX_LINE_LENGTH: usize = 64 * 1024;

/// Default maximum payload lines in one cue
pub const DEFAULT_MAX_PAYLOAD_LINES: usize = 4096;

/// Bounds enforced while parsing
///
/// # Example
///
/// ```rust
/// use vtt_core::parser::{Parser, ParserLimits};
/// use vtt_core::source::SliceSource;
///
/// let limits = ParserLimits {
///     max_line_length: 256,
///     ..ParserLimits::default()
/// };
/// let parser = Parser::with_limits(SliceSource::from("WEBVTT\n"), limits);
/// assert_eq!(parser.limits().max_line_length, 256);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParserLimits {
    /// Maximum bytes in one line, terminator excluded
    pub max_line_length: usize,
    /// Maximum payload lines in one cue
    pub max_payload_lines: usize,
}

impl ParserLimits {
    /// Limits that never trigger
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_line_length: usize::MAX,
            max_payload_lines: usize::MAX,
        }
    }
}

impl Default for ParserLimits {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            max_payload_lines: DEFAULT_MAX_PAYLOAD_LINES,
        }
    }
}
