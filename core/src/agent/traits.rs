//! Agent traits - the surface every agent variant implements
//!
//! Callers hold a `Box<dyn Agent>` and never depend on a concrete variant.

use crate::agent::factory::AgentKind;
use crate::agent::history::ConversationMemory;
use crate::agent::types::{ReplyStream, ReplyUnit, Turn};

/// Conversational agent capability contract
///
/// `process_turn` takes `&mut self`, so one agent can only ever work on one
/// turn at a time. Callers that share an agent across tasks must put it behind
/// their own lock.
#[async_trait::async_trait]
pub trait Agent: Send {
    fn kind(&self) -> AgentKind;

    /// Conversation so far, oldest first
    fn memory(&self) -> &ConversationMemory;

    /// Consume one turn and produce exactly one reply.
    ///
    /// Never fails: every service or classification problem is rendered as
    /// reply text.
    async fn process_turn(&mut self, turn: Turn) -> ReplyUnit;

    /// Sequence view of `process_turn` for consumers that read replies as a
    /// stream. Yields exactly one item, then completes.
    fn chat(&mut self, turn: Turn) -> ReplyStream<'_> {
        Box::pin(async_stream::stream! {
            yield self.process_turn(turn).await;
        })
    }

    /// The user started speaking over an in-flight reply.
    ///
    /// # Arguments
    /// * `heard_response` - Portion of the reply the user heard before interrupting
    fn handle_interrupt(&mut self, heard_response: &str);

    /// Seed memory from persisted chat history.
    ///
    /// # Arguments
    /// * `session_id` - Conversation/config identifier of the session
    /// * `history_id` - Identifier of the stored history within that session
    fn hydrate_memory_from_history(&mut self, session_id: &str, history_id: &str);
}
