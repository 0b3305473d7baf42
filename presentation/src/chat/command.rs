//! Slash commands accepted by the REPL

use nutri_domain::{ConversationMode, RecipeProfile};

/// A parsed slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Quit,
    /// Start a new conversation with a fresh session id
    New,
    /// Show the current mode (`None`) or switch to another
    Mode(Option<ConversationMode>),
    Goal(String),
    Dislikes(String),
    Diet(String),
    Innovation(u8),
    Hybrid(bool),
    Session,
    Profile,
}

/// Parse a line starting with `/`.
///
/// Returns a user-facing message for unknown commands or bad arguments.
pub fn parse_command(line: &str) -> Result<ReplCommand, String> {
    let line = line.trim();
    let (name, arg) = match line.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (line, ""),
    };

    match name.to_lowercase().as_str() {
        "/help" | "/h" | "/?" => Ok(ReplCommand::Help),
        "/quit" | "/exit" | "/q" => Ok(ReplCommand::Quit),
        "/new" | "/clear" => Ok(ReplCommand::New),
        "/mode" if arg.is_empty() => Ok(ReplCommand::Mode(None)),
        "/mode" => arg
            .parse::<ConversationMode>()
            .map(|mode| ReplCommand::Mode(Some(mode)))
            .map_err(|_| format!("Unknown mode '{}'. Use 'recipe' or 'chat'.", arg)),
        "/goal" => required(arg, "/goal <text>").map(ReplCommand::Goal),
        "/dislikes" => required(arg, "/dislikes <text>").map(ReplCommand::Dislikes),
        "/diet" => required(arg, "/diet <text>").map(ReplCommand::Diet),
        "/innovation" => {
            let level = RecipeProfile::parse_innovation_level(arg)
                .map_err(|_| "Usage: /innovation <1-3>".to_string())?;
            if (1..=3).contains(&level) {
                Ok(ReplCommand::Innovation(level))
            } else {
                Err(format!("Innovation level must be 1-3, got {}", level))
            }
        }
        "/hybrid" => match arg.to_lowercase().as_str() {
            "on" | "true" | "yes" => Ok(ReplCommand::Hybrid(true)),
            "off" | "false" | "no" => Ok(ReplCommand::Hybrid(false)),
            _ => Err("Usage: /hybrid on|off".to_string()),
        },
        "/session" => Ok(ReplCommand::Session),
        "/profile" => Ok(ReplCommand::Profile),
        _ => Err(format!(
            "Unknown command: {}\nType /help for available commands",
            name
        )),
    }
}

fn required(arg: &str, usage: &str) -> Result<String, String> {
    if arg.is_empty() {
        Err(format!("Usage: {}", usage))
    } else {
        Ok(arg.to_string())
    }
}
