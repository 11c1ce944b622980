//! Query service wire types

use crate::agent::types::DisplayType;
use serde::{Deserialize, Serialize};

/// What kind of answer the planner produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    Answer,
    Visualization,
    #[serde(other)]
    Other,
}

/// Body returned by the query-planning service
///
/// Every field is optional on the wire. Extra fields (`sql`, `intent`,
/// `ai_analysis`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryPlanResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_type: Option<QueryType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_type: Option<DisplayType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl QueryPlanResult {
    /// Synthetic failure carrying a user-facing message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Failure for a non-200 answer
    pub fn http_status(status: u16) -> Self {
        Self::failure(format!("HTTP {}", status))
    }

    pub fn answer(text: impl Into<String>) -> Self {
        Self {
            success: true,
            query_type: Some(QueryType::Answer),
            answer_text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn table(rows: serde_json::Value) -> Self {
        Self {
            success: true,
            query_type: Some(QueryType::Visualization),
            display_type: Some(DisplayType::Table),
            table_data: Some(rows),
            ..Self::default()
        }
    }

    pub fn chart(chart_type: impl Into<String>, chart: serde_json::Value) -> Self {
        Self {
            success: true,
            query_type: Some(QueryType::Visualization),
            display_type: Some(DisplayType::Chart),
            chart_type: Some(chart_type.into()),
            chart: Some(chart),
            ..Self::default()
        }
    }
}
