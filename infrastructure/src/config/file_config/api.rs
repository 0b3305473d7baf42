//! Backend API configuration from TOML (`[api]` section)

use nutri_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw API configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Per-request timeout in seconds (no timeout when unset)
    pub timeout_secs: Option<u64>,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: None,
        }
    }
}

impl FileApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Check the base URL, returning an issue when it cannot be used.
    pub fn validate_base_url(&self) -> Option<ConfigIssue> {
        let url = self.base_url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            return None;
        }
        let message = if url.is_empty() {
            "api.base_url is empty".to_string()
        } else {
            format!("api.base_url '{}' must start with http:// or https://", url)
        };
        Some(ConfigIssue::error(
            ConfigIssueCode::InvalidBaseUrl {
                value: self.base_url.clone(),
            },
            message,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_server() {
        let config = FileApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.timeout().is_none());
        assert!(config.validate_base_url().is_none());
    }

    #[test]
    fn test_rejects_empty_and_non_http_urls() {
        for url in ["", "   ", "localhost:8000", "ftp://example.com"] {
            let config = FileApiConfig {
                base_url: url.to_string(),
                timeout_secs: None,
            };
            let issue = config.validate_base_url().unwrap();
            assert!(issue.is_error(), "{url:?} should be rejected");
        }
    }

    #[test]
    fn test_accepts_https() {
        let config = FileApiConfig {
            base_url: "https://nutri.example.com/".to_string(),
            timeout_secs: Some(30),
        };
        assert!(config.validate_base_url().is_none());
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    }
}
