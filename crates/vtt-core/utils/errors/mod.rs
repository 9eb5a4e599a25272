//! Core error types for vtt-core
//!
//! Provides the main `CoreError` enum that every fallible public operation
//! returns. A failure is either raised by the character source, in which
//! case it is handed back untouched, or it is a grammar violation detected
//! by the parser.
//!
//! # Error Philosophy
//!
//! - Use `thiserror` for structured error handling (no `anyhow` bloat)
//! - End-of-stream is never an error; it is reported through return values
//! - Grammar violations carry the line they were detected on
//! - Nothing is retried or resynchronised internally
//!
//! # Examples
//!
//! ```rust
//! use vtt_core::utils::errors::{CoreError, ErrorCategory};
//! use vtt_core::parser::ParseError;
//!
//! let error = CoreError::from(ParseError::MissingSignature);
//! assert_eq!(error.category(), ErrorCategory::Parsing);
//! assert!(error.is_user_fixable());
//! ```

mod category;
mod core;

pub use category::ErrorCategory;
pub use self::core::{CoreError, Result};
