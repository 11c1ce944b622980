//! Structured error types for vizagent
//!
//! Errors raised below the agent boundary. The agent itself never surfaces
//! these to callers: they are folded into failure replies.

use std::time::Duration;
use thiserror::Error;

/// Primary error type for vizagent operations
#[derive(Error, Debug)]
pub enum AgentError {
    // =========================================================================
    // Query Service Errors
    // =========================================================================
    /// Network/connection error
    #[error("connection failed: {message}")]
    ConnectionFailed { message: String },

    /// Request did not complete in time
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: Duration },

    /// Query service answered with a non-success status
    #[error("HTTP {status}")]
    ProviderError { status: u16, message: String },

    /// Query service answered 200 with a body we could not decode
    #[error("invalid response from query service: {reason}")]
    InvalidResponse { reason: String },

    // =========================================================================
    // Agent Registry Errors
    // =========================================================================
    /// Agent kind not present in the registry
    #[error("unknown agent kind: {kind}")]
    UnknownAgentKind { kind: String },

    // =========================================================================
    // External Error Wrappers
    // =========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("HTTP error: {0}")]
    Http(String),
}

impl AgentError {
    /// Check if error is retryable (transient)
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionFailed { .. } => true,
            Self::Timeout { .. } => true,
            Self::ProviderError { status, .. } => matches!(status, 429 | 500 | 502 | 503 | 504),
            Self::Io(io_err) => matches!(
                io_err.kind(),
                std::io::ErrorKind::Interrupted
                    | std::io::ErrorKind::WouldBlock
                    | std::io::ErrorKind::TimedOut
            ),

            Self::InvalidResponse { .. }
            | Self::UnknownAgentKind { .. }
            | Self::Json(_)
            | Self::Http(_) => false,
        }
    }

    /// Text suitable for a failure reply shown to the user
    pub fn user_message(&self) -> String {
        match self {
            Self::ConnectionFailed { .. } => {
                "The query service could not be reached.".to_string()
            }
            Self::Timeout { .. } => "The query service took too long to answer.".to_string(),
            // Keeps the "HTTP <status>" contract for non-200 answers
            Self::ProviderError { status, .. } => format!("HTTP {}", status),
            _ => self.to_string(),
        }
    }
}

impl From<serde_json::Error> for AgentError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for AgentError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            // reqwest does not report the configured duration back
            return Self::Timeout {
                duration: Duration::ZERO,
            };
        }
        if err.is_connect() {
            return Self::ConnectionFailed {
                message: err.to_string(),
            };
        }
        if err.is_decode() {
            return Self::InvalidResponse {
                reason: err.to_string(),
            };
        }
        if let Some(status) = err.status() {
            return Self::ProviderError {
                status: status.as_u16(),
                message: err.to_string(),
            };
        }
        Self::Http(err.to_string())
    }
}

/// Result type alias using AgentError
pub type Result<T> = std::result::Result<T, AgentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(AgentError::ConnectionFailed {
            message: "refused".to_string()
        }
        .is_retryable());

        assert!(AgentError::ProviderError {
            status: 503,
            message: "unavailable".to_string()
        }
        .is_retryable());

        assert!(!AgentError::ProviderError {
            status: 404,
            message: "not found".to_string()
        }
        .is_retryable());

        assert!(!AgentError::UnknownAgentKind {
            kind: "llm".to_string()
        }
        .is_retryable());
    }

    #[test]
    fn test_provider_error_renders_status() {
        let err = AgentError::ProviderError {
            status: 502,
            message: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 502");
        assert_eq!(err.user_message(), "HTTP 502");
    }

    #[test]
    fn test_user_messages() {
        let err = AgentError::ConnectionFailed {
            message: "tcp connect error".to_string(),
        };
        assert!(err.user_message().contains("could not be reached"));

        let err = AgentError::UnknownAgentKind {
            kind: "hume_ai".to_string(),
        };
        assert_eq!(err.user_message(), "unknown agent kind: hume_ai");
    }
}
