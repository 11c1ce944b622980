pub mod agent;
pub mod config;
pub mod error;
pub mod output;
pub mod query;

// Re-exports for convenience
pub use agent::{Agent, AgentBuilder, AgentKind, BasicAgent, ReplyUnit, Turn};
pub use config::Config;
pub use error::{AgentError, Result};
