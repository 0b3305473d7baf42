//! Session persistence configuration from TOML (`[session]` section)

use super::expand_home;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw session configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Storage key the session id is kept under
    pub key: String,
    /// Path to the session file (defaults to the platform data dir)
    pub file: Option<String>,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            key: nutri_application::DEFAULT_SESSION_KEY.to_string(),
            file: None,
        }
    }
}

impl FileSessionConfig {
    /// Resolved session file path.
    ///
    /// `None` when no file is configured and the platform has no data dir;
    /// the session then lives in memory only.
    pub fn file_path(&self) -> Option<PathBuf> {
        match &self.file {
            Some(file) => Some(expand_home(file)),
            None => dirs::data_dir().map(|d| d.join("nutri-chat").join("session.json")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key() {
        assert_eq!(FileSessionConfig::default().key, "nutri_session_id");
    }

    #[test]
    fn test_explicit_file_wins() {
        let config = FileSessionConfig {
            key: "k".to_string(),
            file: Some("/tmp/nutri/session.json".to_string()),
        };
        assert_eq!(
            config.file_path(),
            Some(PathBuf::from("/tmp/nutri/session.json"))
        );
    }
}
