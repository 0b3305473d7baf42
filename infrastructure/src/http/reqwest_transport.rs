//! `reqwest`-backed [`ApiTransport`].

use async_trait::async_trait;
use nutri_application::{ApiTransport, TransportError};
use nutri_domain::Endpoint;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Longest error body kept in [`TransportError::HttpStatus`].
const MAX_ERROR_BODY_CHARS: usize = 500;

/// POSTs JSON to `{base_url}{endpoint path}`.
pub struct ReqwestApiTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestApiTransport {
    /// Create a transport for `base_url`, with an optional per-request timeout.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("nutri-chat/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ApiTransport for ReqwestApiTransport {
    async fn post_json(&self, endpoint: Endpoint, body: Value) -> Result<Value, TransportError> {
        let url = endpoint.url(&self.base_url);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let text = response.text().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            warn!("{} answered HTTP {}", url, status.as_u16());
            return Err(TransportError::HttpStatus {
                status: status.as_u16(),
                body: nutri_domain::truncate_chars(text.trim(), MAX_ERROR_BODY_CHARS),
            });
        }

        // Some endpoints (session clear) answer with an empty body.
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| TransportError::InvalidBody(e.to_string()))
    }
}

fn map_reqwest_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_decode() {
        TransportError::InvalidBody(error.to_string())
    } else {
        TransportError::ConnectionError(error.to_string())
    }
}
