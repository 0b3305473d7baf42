//! Application-level configuration.
//!
//! - [`ConversationConfig`]: how user input is turned into requests (mode,
//!   recipe form defaults, search parameters)

pub mod conversation_config;

pub use conversation_config::ConversationConfig;
