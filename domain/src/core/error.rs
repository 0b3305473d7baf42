//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Session id cannot be empty")]
    EmptySessionId,

    #[error("Unknown conversation mode: {0} (expected 'recipe' or 'chat')")]
    UnknownMode(String),

    #[error("Invalid innovation level: {0}")]
    InvalidInnovationLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_mode_display() {
        let error = DomainError::UnknownMode("dessert".to_string());
        assert_eq!(
            error.to_string(),
            "Unknown conversation mode: dessert (expected 'recipe' or 'chat')"
        );
    }
}
