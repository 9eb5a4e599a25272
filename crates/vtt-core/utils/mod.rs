//! Shared utilities for vtt-core
//!
//! Currently the error types used across the parser and its sources.

pub mod errors;

pub use errors::{CoreError, ErrorCategory};
