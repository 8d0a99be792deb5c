//! The narrative attached to a completed spread.

use serde::Serialize;

/// Text shown whenever the oracle cannot produce a reading.
pub const FALLBACK_TEXT: &str = "The cosmos is currently clouded. Please try again later.";

/// Where a reading's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingSource {
    /// Generated by the narrative oracle.
    Oracle,
    /// The oracle failed and the fallback text was used.
    Fallback,
}

/// A narrative for one spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    /// Markdown-flavoured prose.
    pub text: String,
    /// Origin of `text`.
    pub source: ReadingSource,
}

impl Reading {
    /// A reading produced by the oracle.
    #[must_use]
    pub fn from_oracle(text: String) -> Self {
        Self {
            text,
            source: ReadingSource::Oracle,
        }
    }

    /// The fallback reading.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_TEXT.to_owned(),
            source: ReadingSource::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_reading_is_tagged_as_fallback() {
        let reading = Reading::fallback();

        assert_eq!(reading.text, FALLBACK_TEXT);
        assert_eq!(reading.source, ReadingSource::Fallback);
    }

    #[test]
    fn test_reading_serializes_source_snake_case() {
        let json = serde_json::to_value(Reading::from_oracle("## Present".to_owned())).unwrap();

        assert_eq!(json["text"], "## Present");
        assert_eq!(json["source"], "oracle");
    }
}
