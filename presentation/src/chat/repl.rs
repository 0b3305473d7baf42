//! REPL (Read-Eval-Print Loop) for interactive chat

use super::command::{ReplCommand, parse_command};
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use nutri_application::{ConversationController, SubmitOutcome};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use tracing::debug;

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandFlow {
    Continue,
    Exit,
}

/// Interactive chat REPL
pub struct ChatRepl {
    controller: Arc<ConversationController>,
    config: ReplConfig,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(controller: Arc<ConversationController>) -> Self {
        Self {
            controller,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let prompt = format!("{}> ", self.controller.config().mode);
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    if line.starts_with('/') {
                        let (flow, text) = match parse_command(line) {
                            Ok(command) => self.execute(command),
                            Err(message) => (CommandFlow::Continue, message),
                        };
                        if !text.is_empty() {
                            println!("{}", text);
                        }
                        if flow == CommandFlow::Exit {
                            break;
                        }
                        continue;
                    }

                    println!();
                    let outcome = self.controller.submit(line).await;
                    debug!("Submission outcome: {:?}", outcome);
                    if outcome == SubmitOutcome::Busy {
                        println!("{}", "Still waiting for the previous reply...".yellow());
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        let config = self.controller.config();
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Nutri - Recipe Assistant           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Mode: {}", config.mode.to_string().bold());
        println!("{}", ConsoleFormatter::format_profile(&config.profile));
        println!();
        println!("Type /help for commands.");
        println!();
        println!("{}", ConsoleFormatter::greeting());
    }

    fn help_text() -> String {
        [
            "",
            "Commands:",
            "  /help, /h, /?        - Show this help",
            "  /new                 - Start a new conversation",
            "  /mode [recipe|chat]  - Show or switch the input mode",
            "  /goal <text>         - Set what you want to make",
            "  /dislikes <text>     - Set ingredients to avoid",
            "  /diet <text>         - Set dietary constraints",
            "  /innovation <1-3>    - Set how adventurous recipes are",
            "  /hybrid on|off       - Toggle hybrid search",
            "  /session             - Show the current session id",
            "  /profile             - Show the recipe form fields",
            "  /quit, /exit, /q     - Exit chat",
            "",
            "Start a line with \"search:\" to search recipes in any mode.",
            "",
        ]
        .join("\n")
    }

    fn execute(&self, command: ReplCommand) -> (CommandFlow, String) {
        let controller = &self.controller;
        let text = match command {
            ReplCommand::Quit => return (CommandFlow::Exit, "Bye!".to_string()),
            ReplCommand::Help => Self::help_text(),
            ReplCommand::New => {
                let new_conversation = controller.start_new_conversation();
                format!("Started a new conversation ({})", new_conversation.session_id)
            }
            ReplCommand::Mode(None) => format!("Mode: {}", controller.config().mode),
            ReplCommand::Mode(Some(mode)) => {
                controller.set_mode(mode);
                format!("Mode set to {}", mode)
            }
            ReplCommand::Goal(goal) => {
                let text = format!("Goal set to '{}'", goal);
                controller.update_config(|c| c.profile.goal = goal);
                text
            }
            ReplCommand::Dislikes(dislikes) => {
                let text = format!("Dislikes set to '{}'", dislikes);
                controller.update_config(|c| c.profile.dislikes = dislikes);
                text
            }
            ReplCommand::Diet(diet) => {
                let text = format!("Dietary constraints set to '{}'", diet);
                controller.update_config(|c| c.profile.dietary_constraints = diet);
                text
            }
            ReplCommand::Innovation(level) => {
                controller.update_config(|c| c.profile.innovation_level = level);
                format!("Innovation level set to {}", level)
            }
            ReplCommand::Hybrid(enabled) => {
                controller.set_use_hybrid(enabled);
                format!("Hybrid search {}", if enabled { "on" } else { "off" })
            }
            ReplCommand::Session => {
                format!("Session: {}", controller.sessions().get_or_create_session_id())
            }
            ReplCommand::Profile => ConsoleFormatter::format_profile(&controller.config().profile),
        };
        (CommandFlow::Continue, text)
    }
}
