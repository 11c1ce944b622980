//! Agent Factory
//!
//! Selects the concrete agent implementation by kind and wires its query
//! service and display settings.

use crate::agent::basic::BasicAgent;
use crate::agent::traits::Agent;
use crate::config::{Config, ReplyTexts, DEFAULT_AGENT_NAME};
use crate::error::AgentError;
use crate::query::{HttpQueryClient, QueryService};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Registered agent implementations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    /// Query-service backed agent
    #[default]
    Basic,
}

impl AgentKind {
    pub const ALL: &'static [AgentKind] = &[AgentKind::Basic];
}

impl std::str::FromStr for AgentKind {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" | "basic_agent" => Ok(AgentKind::Basic),
            _ => Err(AgentError::UnknownAgentKind { kind: s.to_string() }),
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentKind::Basic => write!(f, "basic"),
        }
    }
}

/// Builder for agents of any registered kind
pub struct AgentBuilder {
    kind: AgentKind,
    query_service: Option<Arc<dyn QueryService>>,
    display_name: String,
    avatar: Option<String>,
    replies: ReplyTexts,
}

impl AgentBuilder {
    pub fn new(kind: AgentKind) -> Self {
        Self {
            kind,
            query_service: None,
            display_name: DEFAULT_AGENT_NAME.to_string(),
            avatar: None,
            replies: ReplyTexts::default(),
        }
    }

    /// Builder preloaded from configuration; the query service defaults to
    /// an HTTP client for `query_service.url`
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.agent.kind)
            .with_query_service(Arc::new(HttpQueryClient::from_config(&config.query_service)))
            .with_display_name(config.agent.name.clone())
            .with_avatar(config.agent.avatar.clone())
            .with_replies(config.replies.clone())
    }

    pub fn with_query_service(mut self, service: Arc<dyn QueryService>) -> Self {
        self.query_service = Some(service);
        self
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

    /// Build the agent with the current configuration
    pub fn build(self) -> Box<dyn Agent> {
        let query_service = self
            .query_service
            .unwrap_or_else(|| Arc::new(HttpQueryClient::default()));

        match self.kind {
            AgentKind::Basic => Box::new(
                BasicAgent::new(query_service)
                    .with_display_name(self.display_name)
                    .with_avatar(self.avatar)
                    .with_replies(self.replies),
            ),
        }
    }
}
