//! Configuration file loading for nutri-chat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Environment variables `NUTRI_<SECTION>__<KEY>`
//! 3. Project root: `./nutri.toml` or `./.nutri.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/nutri-chat/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileApiConfig, FileChatConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileRecipeConfig, FileReplConfig, FileSearchConfig, FileSessionConfig,
};
pub use loader::ConfigLoader;
