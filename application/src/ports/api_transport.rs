//! API transport port
//!
//! Defines how the application layer reaches the remote recipe API.

use async_trait::async_trait;
use nutri_domain::Endpoint;
use thiserror::Error;

/// Errors that can occur while talking to the remote API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Server error ({status}): {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    #[error("Request timed out")]
    Timeout,
}

impl TransportError {
    /// The request reached the server but the body could not be decoded.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, TransportError::InvalidBody(_))
    }
}

/// Transport for the remote recipe API
///
/// Implementations own the base URL and HTTP client; callers only name the
/// [`Endpoint`]. A non-2xx status must surface as [`TransportError::HttpStatus`].
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// POST a JSON body and return the decoded JSON reply.
    async fn post_json(
        &self,
        endpoint: Endpoint,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, TransportError>;
}
