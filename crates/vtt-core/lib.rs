//! # vtt-core
//!
//! Streaming parser for WebVTT subtitle files. Bytes are pulled one at a time
//! from a [`CharSource`] and turned into [`Cue`] records: identifier, start
//! and stop [`Time`], `NAME:VALUE` settings, and payload lines.
//!
//! ## Features
//!
//! - **Streaming**: one cue per call, memory bounded by [`ParserLimits`]
//! - **Strict**: malformed input is rejected with a line-numbered
//!   [`ParseError`] instead of being guessed at
//! - **Tolerant where the format is**: optional UTF-8 BOM, LF / CR / CRLF
//!   line endings, and `SS`, `MM:SS` and `HH:MM:SS` timestamps
//!
//! Cue text markup is not interpreted, and there is no recovery after a
//! malformed cue: the caller decides whether to keep reading.
//!
//! ## Quick Start
//!
//! ```rust
//! use vtt_core::{Parser, SliceSource, Setting, Time};
//!
//! let input = "WEBVTT\n\n00:00:01.000 --> 00:00:02.500 align:middle line:90%\nHello world\n";
//!
//! let mut parser = Parser::new(SliceSource::from(input));
//! parser.init()?;
//!
//! for cue in parser.cues() {
//!     let cue = cue?;
//!     assert_eq!(cue.start_time, Time::new(0, 0, 1, 0));
//!     assert_eq!(cue.stop_time, Time::new(0, 0, 2, 500));
//!     assert_eq!(cue.settings[0], Setting::new("align", "middle"));
//!     assert_eq!(cue.payload, ["Hello world"]);
//! }
//! # Ok::<(), vtt_core::CoreError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod parser;
pub mod source;
pub mod utils;

pub use parser::{
    Cue, Document, Header, ParseError, ParseStatus, Parser, ParserLimits, Setting, Time,
    TimingsError,
};
pub use source::{CharSource, ReaderSource, SliceSource};
pub use utils::errors::Result;
pub use utils::{CoreError, ErrorCategory};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
