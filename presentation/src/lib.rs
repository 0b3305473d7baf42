//! Presentation layer for nutri-chat
//!
//! This crate contains CLI definitions, the console renderer and
//! message formatting, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, ModeArg};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use output::renderer::ConsoleRenderer;
