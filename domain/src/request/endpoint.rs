//! Remote API endpoints

use serde::{Deserialize, Serialize};

/// A route on the remote recipe API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// `POST /api/recipe`: recipe generation from ingredients
    Recipe,
    /// `POST /api/chat`: free-text conversation
    Chat,
    /// `POST /api/hybrid_search`: recipe retrieval
    HybridSearch,
    /// `POST /api/session/clear`: drop server-side memory for a session
    ClearSession,
}

impl Endpoint {
    /// Path relative to the configured base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Recipe => "/api/recipe",
            Endpoint::Chat => "/api/chat",
            Endpoint::HybridSearch => "/api/hybrid_search",
            Endpoint::ClearSession => "/api/session/clear",
        }
    }

    /// Join this endpoint onto a base URL, tolerating trailing slashes.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
