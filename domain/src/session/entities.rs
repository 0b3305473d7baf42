//! Session domain entities

use crate::core::error::DomainError;
use crate::response::entities::Source;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque session identifier correlating client and server conversation state (Value Object)
///
/// Client-generated ids are UUID v4 strings. Ids issued by the server are
/// accepted as-is, as long as they are not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an existing identifier, rejecting blank strings.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptySessionId);
        }
        if trimmed.len() == id.len() {
            Ok(Self(id))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Generate a fresh random identifier (hyphenated lowercase UUID v4).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SessionId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SessionId::new(value)
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

impl TryFrom<&str> for SessionId {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        SessionId::new(value)
    }
}

/// Role of a displayed message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A message shown in the conversation (Entity)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            sources: Vec::new(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            sources: Vec::new(),
        }
    }

    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = sources;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_v4_pattern(s: &str) -> bool {
        let parts: Vec<&str> = s.split('-').collect();
        parts.len() == 5
            && [8, 4, 4, 4, 12]
                .iter()
                .zip(&parts)
                .all(|(len, part)| part.len() == *len && part.chars().all(|c| c.is_ascii_hexdigit()))
            && parts[2].starts_with('4')
            && matches!(parts[3].chars().next(), Some('8' | '9' | 'a' | 'b'))
    }

    #[test]
    fn test_generate_matches_v4_pattern() {
        let id = SessionId::generate();
        assert!(is_v4_pattern(id.as_str()), "not a v4 id: {}", id);
        assert_eq!(id.as_str(), id.as_str().to_lowercase());
    }

    #[test]
    fn test_generate_is_unique() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }

    #[test]
    fn test_new_accepts_opaque_server_ids() {
        let id = SessionId::new("abc").unwrap();
        assert_eq!(id.as_str(), "abc");
    }

    #[test]
    fn test_new_trims_and_rejects_blank() {
        assert_eq!(SessionId::new("  abc \n").unwrap().as_str(), "abc");
        assert_eq!(SessionId::new(""), Err(DomainError::EmptySessionId));
        assert_eq!(SessionId::new("   "), Err(DomainError::EmptySessionId));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = SessionId::new("abc").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }

    #[test]
    fn test_deserialize_applies_new_rules() {
        let id: SessionId = serde_json::from_str("\" abc \"").unwrap();
        assert_eq!(id.as_str(), "abc");

        assert!(serde_json::from_str::<SessionId>("\"\"").is_err());
        assert!(serde_json::from_str::<SessionId>("\"   \"").is_err());
    }

    #[test]
    fn test_assistant_message_with_sources() {
        let message = ChatMessage::assistant("Try stir-fry")
            .with_sources(vec![Source::new("Wok stir-fry", "Heat the wok", 0.8)]);
        assert_eq!(message.role, Role::Assistant);
        assert_eq!(message.sources.len(), 1);
    }
}
