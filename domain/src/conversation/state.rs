//! Conversation state machine states

use serde::{Deserialize, Serialize};

/// Whether a conversation thread has a request in flight.
///
/// ```text
/// Idle --submit(non-empty)--> AwaitingResponse
/// AwaitingResponse --response arrived | transport failed--> Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitingResponse,
}

impl ConversationState {
    pub fn is_idle(&self) -> bool {
        matches!(self, ConversationState::Idle)
    }
}
