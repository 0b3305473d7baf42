//! CLI command definitions

use clap::{Parser, ValueEnum};
use nutri_domain::ConversationMode;
use std::path::PathBuf;

/// How plain input is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Generate a recipe from the listed ingredients
    Recipe,
    /// Free-form conversation
    Chat,
}

impl From<ModeArg> for ConversationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Recipe => ConversationMode::Recipe,
            ModeArg::Chat => ConversationMode::Chat,
        }
    }
}

/// CLI arguments for nutri-chat
#[derive(Parser, Debug)]
#[command(name = "nutri-chat")]
#[command(author, version, about = "Terminal client for the Nutri recipe assistant")]
#[command(long_about = r#"
nutri-chat talks to a Nutri recipe server: list your ingredients to get a
recipe, chat about cooking, or prefix a line with "search:" to look up
recipes from the index.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. NUTRI_<SECTION>__<KEY> environment variables
3. ./nutri.toml        Project-level config
4. ~/.config/nutri-chat/config.toml   Global config

Example:
  nutri-chat "chicken, rice, broccoli"
  nutri-chat --mode chat "How long should I rest a steak?"
  nutri-chat "search: vegan pasta"
  nutri-chat --base-url http://10.0.0.5:8000
"#)]
pub struct Cli {
    /// Send a single message and exit (starts the REPL when omitted)
    pub message: Option<String>,

    /// Recipe server base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// How plain input is sent
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// What you want to make (e.g. "dinner", "snack")
    #[arg(long, value_name = "TEXT")]
    pub goal: Option<String>,

    /// Ingredients to avoid because you dislike them
    #[arg(long, value_name = "TEXT")]
    pub dislikes: Option<String>,

    /// Dietary constraints (e.g. "vegetarian")
    #[arg(long, value_name = "TEXT")]
    pub diet: Option<String>,

    /// How adventurous the recipe should be (1-3)
    #[arg(long, value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(1..=3))]
    pub innovation: Option<u8>,

    /// Disable hybrid retrieval for searches
    #[arg(long)]
    pub no_hybrid: bool,

    /// Start with a fresh session id
    #[arg(long)]
    pub new_session: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_shot_with_overrides() {
        let cli = Cli::try_parse_from([
            "nutri-chat",
            "--mode",
            "chat",
            "--goal",
            "dinner",
            "--innovation",
            "2",
            "--no-hybrid",
            "-vv",
            "what can I cook?",
        ])
        .unwrap();

        assert_eq!(cli.message.as_deref(), Some("what can I cook?"));
        assert_eq!(cli.mode.map(ConversationMode::from), Some(ConversationMode::Chat));
        assert_eq!(cli.goal.as_deref(), Some("dinner"));
        assert_eq!(cli.innovation, Some(2));
        assert!(cli.no_hybrid);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_no_message_means_repl() {
        let cli = Cli::try_parse_from(["nutri-chat"]).unwrap();
        assert!(cli.message.is_none());
        assert!(cli.mode.is_none());
        assert!(!cli.new_session);
    }

    #[test]
    fn test_innovation_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["nutri-chat", "--innovation", "4"]).is_err());
    }
}
