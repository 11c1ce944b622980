//! Input model
//!
//! A `Turn` is everything the front-end collected for one user utterance.

use serde::{Deserialize, Serialize};

/// Where a piece of text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    /// Typed or transcribed user input
    Input,
    /// Text pasted from the clipboard alongside the utterance
    Clipboard,
}

/// Provenance-tagged piece of a turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSegment {
    pub content: String,
    pub source: TextSource,
}

impl TextSegment {
    pub fn input(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source: TextSource::Input,
        }
    }

    pub fn clipboard(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source: TextSource::Clipboard,
        }
    }
}

/// One conversational turn
///
/// Segment order is preserved as received; the first `Input` segment is the
/// canonical query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub texts: Vec<TextSegment>,
    /// Speaker name reported by the front-end, if any
    #[serde(default)]
    pub from_name: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl Turn {
    pub fn new(texts: Vec<TextSegment>) -> Self {
        Self {
            texts,
            ..Self::default()
        }
    }

    /// Turn holding a single `Input` segment
    pub fn from_text(content: impl Into<String>) -> Self {
        Self::new(vec![TextSegment::input(content)])
    }

    pub fn with_from_name(mut self, name: impl Into<String>) -> Self {
        self.from_name = Some(name.into());
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Content of the first `Input`-sourced segment, if there is one
    pub fn first_input(&self) -> Option<&str> {
        self.texts
            .iter()
            .find(|t| t.source == TextSource::Input)
            .map(|t| t.content.as_str())
    }

    /// Query text for this turn; empty when no `Input` segment exists
    pub fn query_text(&self) -> String {
        self.first_input().unwrap_or_default().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_input_skips_clipboard() {
        let turn = Turn::new(vec![
            TextSegment::clipboard("pasted table"),
            TextSegment::input("sales by region"),
            TextSegment::input("ignored second input"),
        ]);
        assert_eq!(turn.query_text(), "sales by region");
    }

    #[test]
    fn test_query_text_empty_without_input() {
        let turn = Turn::new(vec![TextSegment::clipboard("only clipboard")]);
        assert_eq!(turn.first_input(), None);
        assert_eq!(turn.query_text(), "");

        assert_eq!(Turn::default().query_text(), "");
    }

    #[test]
    fn test_empty_input_segment_is_still_canonical() {
        let turn = Turn::new(vec![TextSegment::input(""), TextSegment::input("later")]);
        assert_eq!(turn.first_input(), Some(""));
    }

    #[test]
    fn test_turn_deserializes_from_frontend_json() {
        let json = r#"{
            "texts": [
                {"content": "show me", "source": "input"},
                {"content": "x", "source": "clipboard"}
            ],
            "from_name": "Human"
        }"#;
        let turn: Turn = serde_json::from_str(json).unwrap();
        assert_eq!(turn.texts.len(), 2);
        assert_eq!(turn.texts[1].source, TextSource::Clipboard);
        assert_eq!(turn.from_name.as_deref(), Some("Human"));
        assert!(turn.metadata.is_none());
    }

    #[test]
    fn test_builder_keeps_segments() {
        let turn = Turn::from_text("revenue this week")
            .with_from_name("Human")
            .with_metadata(serde_json::json!({"proactive_speak": false}));
        assert_eq!(turn.texts, vec![TextSegment::input("revenue this week")]);
        assert_eq!(turn.from_name.as_deref(), Some("Human"));
        assert_eq!(turn.metadata.unwrap()["proactive_speak"], false);
    }
}
