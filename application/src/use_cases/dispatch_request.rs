//! Request dispatch use case.
//!
//! Sends an [`OutgoingRequest`] through the [`ApiTransport`] port and folds
//! the reply into an [`InboundResponse`].

use crate::ports::api_transport::{ApiTransport, TransportError};
use nutri_domain::{
    ClearSessionRequest, InboundResponse, NormalizeError, OutgoingRequest, SessionId,
    normalize_response,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while dispatching a request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Transport failure or non-success HTTP status
    #[error("{0}")]
    Network(String),

    /// The reply could not be read as any known response shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The request could not be encoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<TransportError> for DispatchError {
    fn from(error: TransportError) -> Self {
        if error.is_decode_error() {
            DispatchError::MalformedResponse(error.to_string())
        } else {
            DispatchError::Network(error.to_string())
        }
    }
}

impl From<NormalizeError> for DispatchError {
    fn from(error: NormalizeError) -> Self {
        DispatchError::MalformedResponse(error.to_string())
    }
}

/// Builds request bodies, sends them, and normalizes the replies.
pub struct RequestDispatcher {
    transport: Arc<dyn ApiTransport>,
}

impl Clone for RequestDispatcher {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
        }
    }
}

impl RequestDispatcher {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Send a request and normalize its reply.
    pub async fn send(&self, request: &OutgoingRequest) -> Result<InboundResponse, DispatchError> {
        let endpoint = request.endpoint();
        let body = request
            .to_body()
            .map_err(|e| DispatchError::InvalidRequest(e.to_string()))?;

        info!("Sending request to {}", endpoint);
        let raw = self.transport.post_json(endpoint, body).await?;

        let response = normalize_response(&raw)?;
        debug!(
            "Response from {}: success={}, reply={} bytes, {} sources, new session id: {}",
            endpoint,
            response.success,
            response.reply.as_ref().map_or(0, |r| r.len()),
            response.sources.len(),
            response.new_session_id.is_some()
        );

        Ok(response)
    }

    /// Ask the backend to drop its memory of `session_id`. The reply body is ignored.
    pub async fn clear_session(&self, session_id: SessionId) -> Result<(), DispatchError> {
        let request = OutgoingRequest::ClearSession(ClearSessionRequest { session_id });
        let endpoint = request.endpoint();
        let body = request
            .to_body()
            .map_err(|e| DispatchError::InvalidRequest(e.to_string()))?;

        self.transport.post_json(endpoint, body).await?;
        debug!("Cleared server-side session memory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use nutri_domain::{Endpoint, RecipeProfile, RecipeRequest, SearchRequest};
    use serde_json::{Value, json};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockTransport {
        responses: Mutex<VecDeque<Result<Value, TransportError>>>,
        requests: Mutex<Vec<(Endpoint, Value)>>,
    }

    impl MockTransport {
        fn new(responses: Vec<Result<Value, TransportError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ApiTransport for MockTransport {
        async fn post_json(&self, endpoint: Endpoint, body: Value) -> Result<Value, TransportError> {
            self.requests.lock().unwrap().push((endpoint, body));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::ConnectionError("no response".to_string())))
        }
    }

    fn recipe_request() -> OutgoingRequest {
        OutgoingRequest::Recipe(RecipeRequest {
            ingredients: "chicken, rice".to_string(),
            profile: RecipeProfile::default().with_goal("dinner"),
            session_id: SessionId::new("sess-1").unwrap(),
        })
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_send_recipe_request() {
        let transport = Arc::new(MockTransport::new(vec![Ok(json!({
            "success": true,
            "reply": "Try stir-fry",
            "session_id": "abc"
        }))]));
        let dispatcher = RequestDispatcher::new(transport.clone());

        let response = dispatcher.send(&recipe_request()).await.unwrap();

        assert!(response.success);
        assert_eq!(response.reply.as_deref(), Some("Try stir-fry"));
        assert_eq!(response.new_session_id.unwrap().as_str(), "abc");

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, Endpoint::Recipe);
        assert_eq!(requests[0].1["goal"], "dinner");
        assert_eq!(requests[0].1["session_id"], "sess-1");
    }

    #[tokio::test]
    async fn test_search_request_goes_to_hybrid_search() {
        let transport = Arc::new(MockTransport::new(vec![Ok(json!({
            "success": false,
            "error": "no index"
        }))]));
        let dispatcher = RequestDispatcher::new(transport.clone());

        let request = OutgoingRequest::Search(SearchRequest {
            query: "pasta".to_string(),
            k: 5,
            use_hybrid: false,
        });
        let response = dispatcher.send(&request).await.unwrap();

        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("no index"));
        assert_eq!(transport.requests.lock().unwrap()[0].0, Endpoint::HybridSearch);
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        let transport = Arc::new(MockTransport::new(vec![Err(TransportError::ConnectionError(
            "connection refused".to_string(),
        ))]));
        let dispatcher = RequestDispatcher::new(transport);

        let error = dispatcher.send(&recipe_request()).await.unwrap_err();
        assert_eq!(
            error,
            DispatchError::Network("Connection error: connection refused".to_string())
        );
    }

    #[tokio::test]
    async fn test_http_status_is_network_error() {
        let transport = Arc::new(MockTransport::new(vec![Err(TransportError::HttpStatus {
            status: 502,
            body: "Bad Gateway".to_string(),
        })]));
        let dispatcher = RequestDispatcher::new(transport);

        match dispatcher.send(&recipe_request()).await {
            Err(DispatchError::Network(cause)) => {
                assert!(cause.contains("502"));
                assert!(cause.contains("Bad Gateway"));
            }
            other => panic!("Expected network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_undecodable_body_is_malformed() {
        let transport = Arc::new(MockTransport::new(vec![Err(TransportError::InvalidBody(
            "expected value at line 1 column 1".to_string(),
        ))]));
        let dispatcher = RequestDispatcher::new(transport);

        assert!(matches!(
            dispatcher.send(&recipe_request()).await,
            Err(DispatchError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_malformed() {
        let transport = Arc::new(MockTransport::new(vec![Ok(json!([1, 2, 3]))]));
        let dispatcher = RequestDispatcher::new(transport);

        assert!(matches!(
            dispatcher.send(&recipe_request()).await,
            Err(DispatchError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_clear_session_posts_id_and_ignores_body() {
        let transport = Arc::new(MockTransport::new(vec![Ok(json!(null))]));
        let dispatcher = RequestDispatcher::new(transport.clone());

        dispatcher
            .clear_session(SessionId::new("old-session").unwrap())
            .await
            .unwrap();

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests[0].0, Endpoint::ClearSession);
        assert_eq!(requests[0].1, json!({ "session_id": "old-session" }));
    }
}
