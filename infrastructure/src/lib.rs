//! Infrastructure layer for nutri-chat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileApiConfig, FileChatConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileRecipeConfig, FileReplConfig, FileSearchConfig, FileSessionConfig,
};
pub use http::ReqwestApiTransport;
pub use logging::JsonlConversationLogger;
pub use storage::FileSessionStorage;
