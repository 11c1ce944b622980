//! Basic agent
//!
//! Forwards the user's query to the query-planning service and turns the plan
//! result into a single reply: a plain answer, a chart, a table, a generic
//! visualization, or a failure message.

use crate::agent::factory::AgentKind;
use crate::agent::history::ConversationMemory;
use crate::agent::traits::Agent;
use crate::agent::types::{DisplayType, ReplyUnit, Turn};
use crate::config::{ReplyTexts, DEFAULT_AGENT_NAME};
use crate::query::{QueryPlanResult, QueryService, QueryType};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Reply text and render hints derived from one plan result
#[derive(Debug, Clone, PartialEq)]
pub struct Classified {
    pub text: String,
    pub display_type: Option<DisplayType>,
    pub payload: Option<Value>,
}

impl Classified {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            display_type: None,
            payload: None,
        }
    }
}

/// Map a plan result onto a reply shape.
///
/// Chart and table payloads are moved out of the result untouched.
pub fn classify(result: QueryPlanResult, replies: &ReplyTexts) -> Classified {
    if !result.success {
        return Classified::text(result.message.unwrap_or_else(|| replies.api_failure.clone()));
    }

    match result.query_type {
        Some(QueryType::Answer) => {
            Classified::text(result.answer_text.unwrap_or_else(|| replies.no_answer.clone()))
        }
        Some(QueryType::Visualization) => match result.display_type {
            Some(DisplayType::Chart) => {
                let text = match result.chart_type.as_deref() {
                    Some(chart_type) if !chart_type.is_empty() => {
                        format!("generated a {} chart.", chart_type)
                    }
                    _ => "generated a chart.".to_string(),
                };
                Classified {
                    text,
                    display_type: Some(DisplayType::Chart),
                    payload: Some(result.chart.unwrap_or_else(|| json!({}))),
                }
            }
            Some(DisplayType::Table) => Classified {
                text: "generated a table.".to_string(),
                display_type: Some(DisplayType::Table),
                payload: Some(result.table_data.unwrap_or_else(|| json!([]))),
            },
            Some(DisplayType::Other) | None => Classified {
                text: "generated a visualization result.".to_string(),
                display_type: Some(DisplayType::Other),
                payload: None,
            },
        },
        Some(QueryType::Other) | None => {
            Classified::text(result.message.unwrap_or_else(|| replies.unknown_response.clone()))
        }
    }
}

/// Agent that answers by calling the query-planning service
pub struct BasicAgent {
    query_service: Arc<dyn QueryService>,
    memory: ConversationMemory,
    display_name: String,
    avatar: Option<String>,
    replies: ReplyTexts,
}

impl BasicAgent {
    pub fn new(query_service: Arc<dyn QueryService>) -> Self {
        info!(service = query_service.name(), "BasicAgent initialized");
        Self {
            query_service,
            memory: ConversationMemory::new(),
            display_name: DEFAULT_AGENT_NAME.to_string(),
            avatar: None,
            replies: ReplyTexts::default(),
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn with_avatar(mut self, avatar: Option<String>) -> Self {
        self.avatar = avatar;
        self
    }

    pub fn with_replies(mut self, replies: ReplyTexts) -> Self {
        self.replies = replies;
        self
    }
}

#[async_trait::async_trait]
impl Agent for BasicAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Basic
    }

    fn memory(&self) -> &ConversationMemory {
        &self.memory
    }

    async fn process_turn(&mut self, turn: Turn) -> ReplyUnit {
        let turn_id = Uuid::new_v4();
        let query = match turn.first_input() {
            Some(text) => text.to_string(),
            None => {
                debug!(%turn_id, "turn has no input segment, sending empty query");
                String::new()
            }
        };
        self.memory.push_user(query.as_str());

        let result = self.query_service.plan(&query).await;
        if !result.success {
            warn!(%turn_id, message = ?result.message, "query service reported failure");
        }

        let classified = classify(result, &self.replies);
        info!(
            %turn_id,
            query = %query,
            display_type = ?classified.display_type,
            "turn processed"
        );

        self.memory.push_assistant(classified.text.as_str());

        ReplyUnit::new(
            classified.text,
            self.display_name.clone(),
            self.avatar.clone(),
            classified.display_type,
            classified.payload,
        )
    }

    fn handle_interrupt(&mut self, heard_response: &str) {
        debug!(heard = heard_response.len(), "interrupt ignored by BasicAgent");
    }

    fn hydrate_memory_from_history(&mut self, session_id: &str, history_id: &str) {
        debug!(session_id, history_id, "history hydration not supported by BasicAgent");
    }
}
