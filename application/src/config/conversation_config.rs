//! Conversation settings: how the controller builds requests.
//!
//! These are application-layer concerns: they come from the config file and
//! CLI flags at startup and can be changed from the REPL afterwards.

use nutri_domain::{ConversationMode, RecipeProfile};
use serde::{Deserialize, Serialize};

/// Settings the conversation controller reads on every submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationConfig {
    /// Which form plain input is sent as.
    pub mode: ConversationMode,
    /// Recipe form fields attached to recipe requests.
    pub profile: RecipeProfile,
    /// Number of results requested from `/api/hybrid_search`.
    pub search_results: u32,
    /// Hybrid retrieval flag passed to the search endpoint.
    pub use_hybrid: bool,
    /// Attach the recipe form fields to chat requests too.
    pub chat_sends_profile: bool,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            mode: ConversationMode::Recipe,
            profile: RecipeProfile::default(),
            search_results: 5,
            use_hybrid: true,
            chat_sends_profile: false,
        }
    }
}

impl ConversationConfig {
    // ==================== Builder Methods ====================

    pub fn with_mode(mut self, mode: ConversationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_profile(mut self, profile: RecipeProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_search_results(mut self, k: u32) -> Self {
        self.search_results = k;
        self
    }

    pub fn with_use_hybrid(mut self, use_hybrid: bool) -> Self {
        self.use_hybrid = use_hybrid;
        self
    }

    pub fn with_chat_sends_profile(mut self, enabled: bool) -> Self {
        self.chat_sends_profile = enabled;
        self
    }
}
