//! REPL configuration from TOML (`[repl]` section)

use super::expand_home;
use nutri_domain::{ConfigIssue, ConfigIssueCode, ConversationMode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show progress indicators
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
    /// Starting conversation mode ("recipe" or "chat")
    pub mode: String,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
            mode: ConversationMode::default().as_str().to_string(),
        }
    }
}

impl FileReplConfig {
    /// Configured history file, with `~/` expanded.
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file.as_deref().map(expand_home)
    }

    /// Parse the starting mode, falling back to recipe mode.
    pub fn parse_mode(&self) -> (ConversationMode, Option<ConfigIssue>) {
        match self.mode.parse::<ConversationMode>() {
            Ok(mode) => (mode, None),
            Err(_) => (
                ConversationMode::default(),
                Some(ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "repl.mode".to_string(),
                        value: self.mode.clone(),
                        valid_values: vec!["recipe".to_string(), "chat".to_string()],
                    },
                    format!(
                        "repl.mode: unknown value '{}', falling back to 'recipe'",
                        self.mode
                    ),
                )),
            ),
        }
    }
}
