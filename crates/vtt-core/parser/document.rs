//! Whole-document parsing
//!
//! [`Document`] runs the header check and every cue parse in one call, for
//! callers that want all cues at once and treat any failure as fatal.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    ast::{Cue, Header},
    limits::ParserLimits,
    Parser,
};
use crate::{
    source::{CharSource, SliceSource},
    Result,
};

/// Parsed WebVTT document
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// What the header declared
    pub header: Header,
    /// Cues in stream order
    pub cues: Vec<Cue>,
}

impl Document {
    /// Parse a complete document held in memory
    ///
    /// # Example
    ///
    /// ```rust
    /// # use vtt_core::parser::Document;
    /// let doc = Document::parse("WEBVTT\n\n1\n00:01.000 --> 00:02.000\nHi\n")?;
    /// assert_eq!(doc.cues.len(), 1);
    /// assert_eq!(doc.cues[0].identifier, "1");
    /// # Ok::<(), vtt_core::CoreError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the first header or cue violation found.
    pub fn parse(input: &str) -> Result<Self> {
        Self::from_source(SliceSource::from(input))
    }

    /// Parse a complete document from a character source
    ///
    /// # Errors
    ///
    /// Returns the first source error or violation found.
    pub fn from_source<S: CharSource>(source: S) -> Result<Self> {
        Self::from_source_with_limits(source, ParserLimits::default())
    }

    /// Parse a complete document with explicit limits
    ///
    /// # Errors
    ///
    /// Returns the first source error or violation found.
    pub fn from_source_with_limits<S: CharSource>(
        source: S,
        limits: ParserLimits,
    ) -> Result<Self> {
        let mut parser = Parser::with_limits(source, limits);
        let header = parser.init()?;
        let cues = parser.cues().collect::<Result<Vec<_>>>()?;
        Ok(Self { header, cues })
    }

    /// Number of cues
    #[must_use]
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// Check if the document has no cues
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parser::ParseError, CoreError};

    #[test]
    fn header_only() {
        let doc = Document::parse("WEBVTT - empty\n").unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.header.description, "- empty");
    }

    #[test]
    fn first_error_wins() {
        let err = Document::parse("WEBVTT\n\n1 --> 2\n\n").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Parse(ParseError::EmptyPayload { line: 3 })
        ));
    }

    #[test]
    fn several_cues() {
        let doc = Document::parse("WEBVTT\n\n1 --> 2\na\n\n2 --> 3\nb\nc\n").unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.cues[1].payload, ["b", "c"]);
    }
}
