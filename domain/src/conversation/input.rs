//! User input classification

use super::mode::ConversationMode;

/// Prefix that turns any input into a search query (matched case-insensitively).
pub const SEARCH_PREFIX: &str = "search:";

/// What a line of user input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputIntent {
    /// Blank input, or a search prefix with nothing after it
    Empty,
    Search { query: String },
    Recipe { ingredients: String },
    Chat { message: String },
}

/// Classify raw user text in the given mode.
///
/// The text is trimmed first. A `search:` prefix wins in either mode;
/// otherwise the mode decides between a recipe and a chat request.
pub fn classify_input(text: &str, mode: ConversationMode) -> InputIntent {
    let text = text.trim();
    if text.is_empty() {
        return InputIntent::Empty;
    }

    if let Some(prefix) = text.get(..SEARCH_PREFIX.len())
        && prefix.eq_ignore_ascii_case(SEARCH_PREFIX)
    {
        let query = text[SEARCH_PREFIX.len()..].trim();
        if query.is_empty() {
            return InputIntent::Empty;
        }
        return InputIntent::Search {
            query: query.to_string(),
        };
    }

    match mode {
        ConversationMode::Recipe => InputIntent::Recipe {
            ingredients: text.to_string(),
        },
        ConversationMode::Chat => InputIntent::Chat {
            message: text.to_string(),
        },
    }
}
