//! Cue, setting and header records

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Presentation, Time};

/// One `NAME:VALUE` rendering hint from a timings line
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Setting {
    /// Text before the `:`
    pub name: String,
    /// Text after the `:`
    pub value: String,
}

impl Setting {
    /// Create a setting from its name and value
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One subtitle entry
///
/// A `Cue` can be reused across calls to
/// [`Parser::parse`](crate::parser::Parser::parse); its fields are only
/// meaningful after a call that reported a parsed cue.
///
/// # Example
///
/// ```rust
/// use vtt_core::{Cue, Setting, Time};
///
/// let cue = Cue {
///     identifier: "intro".into(),
///     start_time: Time::new(0, 0, 1, 0),
///     stop_time: Time::new(0, 0, 3, 500),
///     settings: vec![Setting::new("align", "start")],
///     payload: vec!["Hello".into(), "world".into()],
/// };
///
/// assert_eq!(cue.duration(), 2_500);
/// assert_eq!(cue.setting("align"), Some("start"));
/// assert_eq!(cue.text(), "Hello\nworld");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Cue {
    /// Identifier line, empty when the cue has none
    pub identifier: String,
    /// When the cue becomes active
    pub start_time: Time,
    /// When the cue stops being active
    pub stop_time: Time,
    /// Settings in the order they appear; duplicates are kept
    pub settings: Vec<Setting>,
    /// Payload text lines, never empty for a parsed cue
    pub payload: Vec<String>,
}

impl Cue {
    /// Check if the cue supplied an identifier line
    #[must_use]
    pub fn has_identifier(&self) -> bool {
        !self.identifier.is_empty()
    }

    /// Stop time minus start time in milliseconds
    ///
    /// Negative when the stop time precedes the start time; the parser does
    /// not reject such cues.
    #[must_use]
    pub fn duration(&self) -> Presentation {
        self.stop_time - self.start_time
    }

    /// Value of the first setting called `name`
    #[must_use]
    pub fn setting(&self, name: &str) -> Option<&str> {
        self.settings
            .iter()
            .find(|setting| setting.name == name)
            .map(|setting| setting.value.as_str())
    }

    /// Payload lines joined with `\n`
    #[must_use]
    pub fn text(&self) -> String {
        self.payload.join("\n")
    }
}

/// What the header of a WebVTT stream declared
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Header {
    /// Stream started with a UTF-8 byte order mark
    pub has_bom: bool,
    /// Text following `WEBVTT` and its separating blanks
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_presence() {
        let mut cue = Cue::default();
        assert!(!cue.has_identifier());
        cue.identifier.push('1');
        assert!(cue.has_identifier());
    }

    #[test]
    fn first_setting_wins() {
        let cue = Cue {
            settings: vec![Setting::new("line", "0"), Setting::new("line", "90%")],
            ..Cue::default()
        };
        assert_eq!(cue.setting("line"), Some("0"));
        assert_eq!(cue.setting("size"), None);
    }

    #[test]
    fn negative_duration() {
        let cue = Cue {
            start_time: Time::new(0, 0, 2, 0),
            stop_time: Time::new(0, 0, 1, 0),
            ..Cue::default()
        };
        assert_eq!(cue.duration(), -1000);
    }
}
