//! Application layer for nutri-chat
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ConversationConfig;
pub use ports::{
    api_transport::{ApiTransport, TransportError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    renderer::{LoadingHandle, NoRenderer, RendererPort},
    session_storage::{InMemorySessionStorage, SessionStoragePort, StorageError},
};
pub use use_cases::conversation_controller::{
    ConversationController, EMPTY_REPLY_MESSAGE, FailureKind, MALFORMED_RESPONSE_MESSAGE,
    NewConversation, SubmitOutcome,
};
pub use use_cases::dispatch_request::{DispatchError, RequestDispatcher};
pub use use_cases::session_store::{DEFAULT_SESSION_KEY, Rotation, SessionStore};
