//! Primitive types shared across agents
//!
//! - `input`: what the front-end sends for one turn
//! - `output`: what an agent sends back

pub mod input;
pub mod output;

pub use input::{TextSegment, TextSource, Turn};
pub use output::{DisplayText, DisplayType, ReplyStream, ReplyUnit};
