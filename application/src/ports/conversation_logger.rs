//! Port for the conversation transcript.
//!
//! Diagnostics go through `tracing`. This port records what was said and
//! which session it belonged to, one [`ConversationEvent`] per exchange step.

use crate::use_cases::conversation_controller::FailureKind;
use nutri_domain::{ConversationMode, Endpoint, SessionId};
use serde::Serialize;

/// One transcript entry.
///
/// Serializes with a `type` tag (`user_message`, `assistant_message`,
/// `session_rotated`, `session_adopted`) next to the event's fields.
/// Writers add the timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversationEvent {
    /// The user's input as echoed on screen, with the request it produced.
    UserMessage {
        mode: ConversationMode,
        endpoint: Endpoint,
        session_id: Option<SessionId>,
        text: String,
    },
    /// The assistant reply or the rendered failure.
    AssistantMessage {
        endpoint: Endpoint,
        failure: Option<FailureKind>,
        sources: usize,
        text: String,
    },
    /// `start_new_conversation` retired `previous` in favour of `current`.
    SessionRotated {
        previous: Option<SessionId>,
        current: SessionId,
    },
    /// The server issued an id that is now in effect.
    SessionAdopted { session_id: SessionId },
}

impl ConversationEvent {
    /// The serialized `type` tag.
    pub fn event_type(&self) -> &'static str {
        match self {
            ConversationEvent::UserMessage { .. } => "user_message",
            ConversationEvent::AssistantMessage { .. } => "assistant_message",
            ConversationEvent::SessionRotated { .. } => "session_rotated",
            ConversationEvent::SessionAdopted { .. } => "session_adopted",
        }
    }
}

/// Sink for transcript events.
///
/// `log` is synchronous and infallible; a writer that fails drops the event
/// rather than interrupting the conversation.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Discards every event.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_events_serialize_with_type_tag() {
        let event = ConversationEvent::UserMessage {
            mode: ConversationMode::Recipe,
            endpoint: Endpoint::Recipe,
            session_id: Some(SessionId::new("abc").unwrap()),
            text: "chicken".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "type": "user_message",
                "mode": "recipe",
                "endpoint": "recipe",
                "session_id": "abc",
                "text": "chicken",
            })
        );
    }

    #[test]
    fn test_failure_kind_serializes_snake_case() {
        let event = ConversationEvent::AssistantMessage {
            endpoint: Endpoint::HybridSearch,
            failure: Some(FailureKind::MalformedResponse),
            sources: 0,
            text: "oops".to_string(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], event.event_type());
        assert_eq!(value["endpoint"], "hybrid_search");
        assert_eq!(value["failure"], "malformed_response");
    }

    #[test]
    fn test_rotation_without_previous() {
        let event = ConversationEvent::SessionRotated {
            previous: None,
            current: SessionId::new("new").unwrap(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "session_rotated");
        assert!(value["previous"].is_null());
        assert_eq!(value["current"], "new");
    }
}
