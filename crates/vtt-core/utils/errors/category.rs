//! Error categorization for vtt-core
//!
//! Groups errors for filtering and reporting. A caller that wants to skip a
//! broken cue and carry on usually only does so for user-fixable categories.

use super::CoreError;
use crate::parser::ParseError;
use core::fmt;

/// Error category for filtering and user interface organization
///
/// # Examples
///
/// ```rust
/// use vtt_core::utils::errors::{CoreError, ErrorCategory};
/// use vtt_core::parser::ParseError;
///
/// let error = CoreError::from(ParseError::InvalidUtf8 { line: 4 });
/// assert_eq!(error.category(), ErrorCategory::Encoding);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The character source failed
    Io,

    /// Structural problems: signature, header, missing timings or payload
    Parsing,

    /// Malformed timestamps or cue settings on a timings line
    Format,

    /// A line that is not valid UTF-8
    Encoding,

    /// A configured parser limit was exceeded
    Resource,

    /// The parser API was called out of order
    Usage,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Io => "io",
            Self::Parsing => "parsing",
            Self::Format => "format",
            Self::Encoding => "encoding",
            Self::Resource => "resource",
            Self::Usage => "usage",
        })
    }
}

impl ErrorCategory {
    /// Get human-readable category name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Io => "I/O",
            Self::Parsing => "Parsing",
            Self::Format => "Format",
            Self::Encoding => "Encoding",
            Self::Resource => "Resource",
            Self::Usage => "Usage",
        }
    }

    /// Check if errors in this category are typically fixable by editing the input
    #[must_use]
    pub const fn is_user_fixable(self) -> bool {
        match self {
            Self::Parsing | Self::Format | Self::Encoding => true,
            Self::Io | Self::Resource | Self::Usage => false,
        }
    }
}

impl ParseError {
    /// Get error category for filtering/grouping
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidTimings { .. } => ErrorCategory::Format,
            Self::InvalidUtf8 { .. } => ErrorCategory::Encoding,
            Self::LineTooLong { .. } | Self::TooManyPayloadLines { .. } => {
                ErrorCategory::Resource
            }
            Self::NotInitialized | Self::AlreadyInitialized | Self::HeaderRejected => {
                ErrorCategory::Usage
            }
            Self::UnexpectedEnd { .. }
            | Self::IncompleteBom
            | Self::MissingSignature
            | Self::InvalidSignatureLine { .. }
            | Self::MissingHeaderSeparator { .. }
            | Self::MissingTimings { .. }
            | Self::EmptyPayload { .. } => ErrorCategory::Parsing,
        }
    }
}

impl CoreError {
    /// Get error category for filtering/grouping
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Source(_) => ErrorCategory::Io,
            Self::Parse(err) => err.category(),
        }
    }

    /// Check if the input could be corrected to avoid this error
    #[must_use]
    pub const fn is_user_fixable(&self) -> bool {
        self.category().is_user_fixable()
    }
}
