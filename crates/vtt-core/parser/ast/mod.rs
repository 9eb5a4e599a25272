//! Data produced by the WebVTT parser
//!
//! Plain records with public fields. They enforce no invariants of their own;
//! the parser validates everything before a value is handed out.

mod cue;
mod time;

pub use cue::{Cue, Header, Setting};
pub use time::{Presentation, Time};
