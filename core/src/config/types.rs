use crate::agent::factory::AgentKind;
use crate::query::DEFAULT_QUERY_URL;
use serde::{Deserialize, Serialize};

/// Default speaker name attached to replies
pub const DEFAULT_AGENT_NAME: &str = "Agent";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error occurred while reading/writing config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    /// TOML serialization error
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    /// Value parsed but is not usable
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// `[agent]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSection {
    /// Which agent implementation to build
    pub kind: AgentKind,
    /// Speaker name shown with every reply
    pub name: String,
    /// Avatar shown with every reply
    pub avatar: Option<String>,
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            kind: AgentKind::default(),
            name: DEFAULT_AGENT_NAME.to_string(),
            avatar: None,
        }
    }
}

/// `[query_service]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryServiceConfig {
    pub url: String,
    /// Unset means no timeout
    pub timeout_secs: Option<u64>,
}

impl Default for QueryServiceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_QUERY_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// `[replies]` section: fallback texts used when the service omits a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplyTexts {
    /// `success == false` without a message
    pub api_failure: String,
    /// Answer result without `answer_text`
    pub no_answer: String,
    /// Unknown `query_type` without a message
    pub unknown_response: String,
}

impl Default for ReplyTexts {
    fn default() -> Self {
        Self {
            api_failure: "API call failed.".to_string(),
            no_answer: "No answer returned.".to_string(),
            unknown_response: "Unrecognized response type.".to_string(),
        }
    }
}
