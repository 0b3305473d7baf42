//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application settings
//! with [`FileConfig::to_conversation_config`].

mod api;
mod conversation;
mod logging;
mod output;
mod repl;
mod session;

pub use api::FileApiConfig;
pub use conversation::{FileChatConfig, FileRecipeConfig, FileSearchConfig};
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use session::FileSessionConfig;

use nutri_application::ConversationConfig;
use nutri_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend location
    pub api: FileApiConfig,
    /// Recipe form defaults
    pub recipe: FileRecipeConfig,
    /// Search parameters
    pub search: FileSearchConfig,
    /// Chat settings
    pub chat: FileChatConfig,
    /// Session id persistence
    pub session: FileSessionConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Transcript logging
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors mean the client cannot start; warnings mean a fallback value
    /// will be used.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.api.validate_base_url());
        issues.extend(self.search.validate());
        issues.extend(self.repl.parse_mode().1);
        issues.extend(self.recipe.to_profile().1);
        issues
    }

    /// Build the controller settings, applying fallbacks for invalid values.
    pub fn to_conversation_config(&self) -> ConversationConfig {
        let (mode, _) = self.repl.parse_mode();
        let (profile, _) = self.recipe.to_profile();
        ConversationConfig::default()
            .with_mode(mode)
            .with_profile(profile)
            .with_search_results(self.search.k)
            .with_use_hybrid(self.search.use_hybrid)
            .with_chat_sends_profile(self.chat.send_profile)
    }
}

/// Expand a leading `~/` to the home directory.
pub(crate) fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutri_domain::ConversationMode;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[api]
base_url = "http://10.0.0.5:8000"
timeout_secs = 45

[recipe]
goal = "dinner"
dislikes = "cilantro"
dietary_constraints = "vegetarian"
innovation_level = 2

[search]
k = 3
use_hybrid = false

[chat]
send_profile = true

[session]
key = "custom_key"

[output]
color = false

[repl]
show_progress = false
mode = "chat"

[logging]
conversation_log = "/tmp/nutri.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.5:8000");
        assert_eq!(config.api.timeout_secs, Some(45));
        assert_eq!(config.session.key, "custom_key");
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert!(config.validate().is_empty());

        let conversation = config.to_conversation_config();
        assert_eq!(conversation.mode, ConversationMode::Chat);
        assert_eq!(conversation.profile.goal, "dinner");
        assert_eq!(conversation.profile.dislikes, "cilantro");
        assert_eq!(conversation.profile.innovation_level, 2);
        assert_eq!(conversation.search_results, 3);
        assert!(!conversation.use_hybrid);
        assert!(conversation.chat_sends_profile);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: FileConfig = toml::from_str("[recipe]\ngoal = \"snack\"\n").unwrap();
        assert_eq!(config.recipe.goal, "snack");
        assert_eq!(config.recipe.dislikes, "none");
        assert_eq!(config.api, FileApiConfig::default());
        assert_eq!(config.search.k, 5);
    }

    #[test]
    fn test_validate_collects_every_issue() {
        let config: FileConfig = toml::from_str(
            r#"
[api]
base_url = ""

[search]
k = 0

[repl]
mode = "shouting"

[recipe]
innovation_level = 7
"#,
        )
        .unwrap();

        let issues = config.validate();
        assert_eq!(issues.len(), 4);
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 2);
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/x.json"), home.join("x.json"));
        }
    }
}
