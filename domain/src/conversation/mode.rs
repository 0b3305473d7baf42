//! Conversation mode value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which form the user is typing into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationMode {
    /// Input is a list of ingredients; sent as a recipe request
    #[default]
    Recipe,
    /// Input is a free-text message
    Chat,
}

impl ConversationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationMode::Recipe => "recipe",
            ConversationMode::Chat => "chat",
        }
    }
}

impl std::fmt::Display for ConversationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversationMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recipe" | "recipes" => Ok(ConversationMode::Recipe),
            "chat" => Ok(ConversationMode::Chat),
            _ => Err(DomainError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_recipe() {
        assert_eq!(ConversationMode::default(), ConversationMode::Recipe);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Chat".parse::<ConversationMode>().unwrap(), ConversationMode::Chat);
        assert_eq!(" recipe ".parse::<ConversationMode>().unwrap(), ConversationMode::Recipe);
        assert!("dessert".parse::<ConversationMode>().is_err());
    }

    #[test]
    fn test_deserialize_lowercase() {
        let mode: ConversationMode = serde_json::from_str("\"chat\"").unwrap();
        assert_eq!(mode, ConversationMode::Chat);
    }
}
