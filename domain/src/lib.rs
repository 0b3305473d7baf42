//! Domain layer for nutri-chat
//!
//! This crate contains the value objects and pure logic of the client:
//! session identifiers, the request shapes sent to the recipe API, and the
//! normalization of its inconsistent replies. It has no dependencies on
//! infrastructure or presentation concerns.

pub mod conversation;
pub mod core;
pub mod request;
pub mod response;
pub mod session;

// Re-export commonly used types
pub use conversation::{
    input::{InputIntent, SEARCH_PREFIX, classify_input},
    mode::ConversationMode,
    state::ConversationState,
};
pub use crate::core::{
    error::DomainError,
    string::truncate_chars,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use request::{
    endpoint::Endpoint,
    entities::{
        ChatRequest, ClearSessionRequest, OutgoingRequest, RecipeProfile, RecipeRequest,
        SearchRequest,
    },
};
pub use response::{
    entities::{
        InboundResponse, NO_PREVIEW_PLACEHOLDER, SNIPPET_PREVIEW_CHARS, Source, SourceKind,
        UNKNOWN_SOURCE_TITLE,
    },
    normalize::{NormalizeError, normalize_response, normalize_source},
};
pub use session::entities::{ChatMessage, Role, SessionId};
