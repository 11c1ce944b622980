//! Conversational agents
//!
//! ```text
//! Turn ──▶ Agent::process_turn ──▶ QueryService::plan ──▶ classify ──▶ ReplyUnit
//!                 │                                                     │
//!                 └──────────── ConversationMemory (user, assistant) ◀──┘
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vizagent_core::agent::{AgentBuilder, AgentKind, Turn};
//!
//! let mut agent = AgentBuilder::new(AgentKind::Basic).build();
//! let reply = agent.process_turn(Turn::from_text("sales by region")).await;
//! println!("{}", reply.text());
//! ```

#![forbid(unsafe_code)]

pub mod basic;
pub mod factory;
pub mod history;
pub mod traits;
pub mod types;

pub use basic::{classify, BasicAgent, Classified};
pub use factory::{AgentBuilder, AgentKind};
pub use history::{ConversationMemory, Message, MessageRole};
pub use traits::Agent;
pub use types::{DisplayText, DisplayType, ReplyStream, ReplyUnit, TextSegment, TextSource, Turn};
