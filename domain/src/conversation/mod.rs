//! Conversation domain.
//!
//! - [`mode::ConversationMode`]: recipe form vs free-text chat
//! - [`state::ConversationState`]: `Idle` / `AwaitingResponse`
//! - [`input::classify_input`]: turns raw user text into an [`input::InputIntent`]

pub mod input;
pub mod mode;
pub mod state;
