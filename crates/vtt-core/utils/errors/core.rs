//! Core error type for vtt-core operations
//!
//! `CoreError` wraps the two ways a parse can fail: the character source
//! reports an I/O failure, or the input breaks the WebVTT grammar.

use std::io;

use thiserror::Error;

use crate::parser::ParseError;

/// Main error type for vtt-core operations
///
/// Source failures keep the original `io::Error` so callers can inspect its
/// kind; grammar violations keep the detailed [`ParseError`].
#[derive(Debug, Error)]
pub enum CoreError {
    /// Failure reported by the character source
    #[error("character source failed: {0}")]
    Source(#[from] io::Error),

    /// Input does not follow the WebVTT grammar
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CoreError {
    /// Get the grammar violation, if this is one
    #[must_use]
    pub const fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Source(_) => None,
        }
    }

    /// Line number the error was detected on, when known
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Parse(err) => err.line(),
            Self::Source(_) => None,
        }
    }

    /// Check if the error was raised by the character source
    #[must_use]
    pub const fn is_source_error(&self) -> bool {
        matches!(self, Self::Source(_))
    }
}

/// Result type for core operations, using the crate's unified `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;
