//! Output model
//!
//! What an agent hands back to the rendering/TTS layer for one turn.

use futures::Stream;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// How a visualization result should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayType {
    Chart,
    Table,
    /// Any display type the query service sends that we do not render specially
    #[serde(other)]
    Other,
}

impl std::fmt::Display for DisplayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayType::Chart => write!(f, "chart"),
            DisplayType::Table => write!(f, "table"),
            DisplayType::Other => write!(f, "other"),
        }
    }
}

/// Speaker metadata shown next to the reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayText {
    pub text: String,
    pub name: String,
    pub avatar: Option<String>,
}

/// One reply emitted for a turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyUnit {
    text: String,
    display: DisplayText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    display_type: Option<DisplayType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<serde_json::Value>,
}

impl ReplyUnit {
    pub fn new(
        text: impl Into<String>,
        name: impl Into<String>,
        avatar: Option<String>,
        display_type: Option<DisplayType>,
        payload: Option<serde_json::Value>,
    ) -> Self {
        let text = text.into();
        Self {
            display: DisplayText {
                text: text.clone(),
                name: name.into(),
                avatar,
            },
            text,
            display_type,
            payload,
        }
    }

    /// Text to speak and show
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn display(&self) -> &DisplayText {
        &self.display
    }

    pub fn display_type(&self) -> Option<DisplayType> {
        self.display_type
    }

    /// Structured data for the renderer (chart spec or table rows)
    pub fn payload(&self) -> Option<&serde_json::Value> {
        self.payload.as_ref()
    }
}

/// Sequence view over an agent's reply
pub type ReplyStream<'a> = Pin<Box<dyn Stream<Item = ReplyUnit> + Send + 'a>>;
