//! Outgoing request entities
//!
//! Field names match the JSON bodies the remote API expects, so these types
//! serialize directly into request bodies.

use super::endpoint::Endpoint;
use crate::core::error::DomainError;
use crate::session::entities::SessionId;
use serde::{Deserialize, Serialize};

/// Recipe form fields: what the user dislikes, must avoid, and wants to make.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeProfile {
    pub dislikes: String,
    pub dietary_constraints: String,
    pub goal: String,
    pub innovation_level: u8,
}

impl Default for RecipeProfile {
    fn default() -> Self {
        Self {
            dislikes: "none".to_string(),
            dietary_constraints: "none".to_string(),
            goal: "meal".to_string(),
            innovation_level: 1,
        }
    }
}

impl RecipeProfile {
    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = goal.into();
        self
    }

    pub fn with_dislikes(mut self, dislikes: impl Into<String>) -> Self {
        self.dislikes = dislikes.into();
        self
    }

    pub fn with_dietary_constraints(mut self, constraints: impl Into<String>) -> Self {
        self.dietary_constraints = constraints.into();
        self
    }

    pub fn with_innovation_level(mut self, level: u8) -> Self {
        self.innovation_level = level;
        self
    }

    /// Parse an innovation level typed by the user.
    pub fn parse_innovation_level(s: &str) -> Result<u8, DomainError> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| DomainError::InvalidInnovationLevel(s.to_string()))
    }
}

/// Body of `POST /api/recipe`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRequest {
    pub ingredients: String,
    #[serde(flatten)]
    pub profile: RecipeProfile,
    pub session_id: SessionId,
}

/// Body of `POST /api/chat`
///
/// Some backends expect the recipe form fields even for plain chat; those
/// are sent only when `profile` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: SessionId,
    #[serde(flatten)]
    pub profile: Option<RecipeProfile>,
}

/// Body of `POST /api/hybrid_search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub k: u32,
    pub use_hybrid: bool,
}

/// Body of `POST /api/session/clear`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearSessionRequest {
    pub session_id: SessionId,
}

/// Every request shape this client sends. Each case maps to one [`Endpoint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutgoingRequest {
    Recipe(RecipeRequest),
    Chat(ChatRequest),
    Search(SearchRequest),
    ClearSession(ClearSessionRequest),
}

impl OutgoingRequest {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            OutgoingRequest::Recipe(_) => Endpoint::Recipe,
            OutgoingRequest::Chat(_) => Endpoint::Chat,
            OutgoingRequest::Search(_) => Endpoint::HybridSearch,
            OutgoingRequest::ClearSession(_) => Endpoint::ClearSession,
        }
    }

    /// Session id carried by the request, if the shape has one.
    pub fn session_id(&self) -> Option<&SessionId> {
        match self {
            OutgoingRequest::Recipe(r) => Some(&r.session_id),
            OutgoingRequest::Chat(r) => Some(&r.session_id),
            OutgoingRequest::Search(_) => None,
            OutgoingRequest::ClearSession(r) => Some(&r.session_id),
        }
    }

    /// Serialize into the JSON body sent to [`Self::endpoint`].
    pub fn to_body(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            OutgoingRequest::Recipe(r) => serde_json::to_value(r),
            OutgoingRequest::Chat(r) => serde_json::to_value(r),
            OutgoingRequest::Search(r) => serde_json::to_value(r),
            OutgoingRequest::ClearSession(r) => serde_json::to_value(r),
        }
    }
}
