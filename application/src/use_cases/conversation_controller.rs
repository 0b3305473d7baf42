//! Conversation controller use case.
//!
//! Orchestrates one conversation thread: user input → request → dispatch →
//! renderer, with loading-state bookkeeping and session id lifecycle.
//!
//! ```text
//! submit(text)
//!   ├─ blank ──────────────────────────────→ Ignored (nothing rendered)
//!   ├─ already AwaitingResponse ───────────→ Busy (nothing sent)
//!   └─ Idle → AwaitingResponse
//!        render user message, show loading
//!        dispatcher.send(...)               ← only suspension point
//!        remove loading, render reply/error
//!        adopt server session id unless rotated meanwhile
//!      → Idle                               → Answered | Failed(kind)
//! ```
//!
//! Failures never escape [`ConversationController::submit`]; they become
//! assistant messages and a [`FailureKind`].

use super::dispatch_request::{DispatchError, RequestDispatcher};
use super::session_store::SessionStore;
use crate::config::ConversationConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::renderer::RendererPort;
use nutri_domain::{
    ChatMessage, ChatRequest, ConversationMode, ConversationState, InboundResponse, InputIntent,
    OutgoingRequest, RecipeProfile, RecipeRequest, SearchRequest, SessionId, classify_input,
};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Shown when a successful reply carries no text.
pub const EMPTY_REPLY_MESSAGE: &str = "Received empty response from server.";

/// Shown when the reply could not be understood.
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Received an unexpected response from the server.";

/// Why a submission failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Transport failure or non-success HTTP status
    Network,
    /// The backend answered `success: false`
    Application,
    /// The reply had an unexpected shape
    MalformedResponse,
    /// The request could not be encoded
    InvalidRequest,
}

/// What happened to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing was sent or rendered.
    Ignored,
    /// A request is already in flight; this submission was rejected.
    Busy,
    /// The backend answered successfully and the reply was rendered.
    Answered,
    /// The failure was rendered as an assistant message.
    Failed(FailureKind),
}

/// Result of [`ConversationController::start_new_conversation`].
pub struct NewConversation {
    /// The id now in effect.
    pub session_id: SessionId,
    /// Background `/api/session/clear` call for the retired id, if one was started.
    pub clear_task: Option<JoinHandle<()>>,
}

/// Drives a single conversation thread.
pub struct ConversationController {
    dispatcher: Arc<RequestDispatcher>,
    sessions: Arc<SessionStore>,
    renderer: Arc<dyn RendererPort>,
    conversation_logger: Arc<dyn ConversationLogger>,
    config: Mutex<ConversationConfig>,
    state: Mutex<ConversationState>,
}

impl ConversationController {
    pub fn new(
        dispatcher: Arc<RequestDispatcher>,
        sessions: Arc<SessionStore>,
        renderer: Arc<dyn RendererPort>,
        config: ConversationConfig,
    ) -> Self {
        Self {
            dispatcher,
            sessions,
            renderer,
            conversation_logger: Arc::new(NoConversationLogger),
            config: Mutex::new(config),
            state: Mutex::new(ConversationState::Idle),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn state(&self) -> ConversationState {
        *lock(&self.state)
    }

    /// Snapshot of the current settings.
    pub fn config(&self) -> ConversationConfig {
        lock(&self.config).clone()
    }

    /// Change settings; takes effect from the next submission.
    pub fn update_config(&self, update: impl FnOnce(&mut ConversationConfig)) {
        update(&mut lock(&self.config));
    }

    pub fn set_mode(&self, mode: ConversationMode) {
        self.update_config(|c| c.mode = mode);
    }

    pub fn set_profile(&self, profile: RecipeProfile) {
        self.update_config(|c| c.profile = profile);
    }

    pub fn set_use_hybrid(&self, use_hybrid: bool) {
        self.update_config(|c| c.use_hybrid = use_hybrid);
    }

    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.sessions
    }

    /// Submit a line of user input.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let config = self.config();
        let intent = classify_input(text, config.mode);
        if intent == InputIntent::Empty {
            debug!("Ignoring empty submission");
            return SubmitOutcome::Ignored;
        }

        let Some(_awaiting) = self.begin_request() else {
            warn!("Rejecting submission while a request is in flight");
            return SubmitOutcome::Busy;
        };

        // The session id is fixed here, before the await.
        let Some(request) = self.build_request(&intent, &config) else {
            return SubmitOutcome::Ignored;
        };

        let user_message = ChatMessage::user(user_echo(&intent, &config));
        self.renderer.append_message(&user_message);
        // Search requests carry no id; remember the one in effect anyway so a
        // rotation during the request is still detected.
        let sent_session = request
            .session_id()
            .cloned()
            .or_else(|| self.sessions.current());
        self.conversation_logger.log(ConversationEvent::UserMessage {
            mode: config.mode,
            endpoint: request.endpoint(),
            session_id: request.session_id().cloned(),
            text: user_message.content.clone(),
        });

        let loading = self.renderer.show_loading();
        let result = self.dispatcher.send(&request).await;
        self.renderer.remove_loading(loading);

        if let Ok(response) = &result
            && let Some(server_id) = response.new_session_id.clone()
            && self
                .sessions
                .adopt_if_current(sent_session.as_ref(), server_id.clone())
        {
            self.conversation_logger.log(ConversationEvent::SessionAdopted {
                session_id: server_id,
            });
        }

        let (reply, outcome) = interpret(&intent, result);
        self.renderer.append_message(&reply);

        let failure = match outcome {
            SubmitOutcome::Failed(kind) => Some(kind),
            _ => None,
        };
        self.conversation_logger.log(ConversationEvent::AssistantMessage {
            endpoint: request.endpoint(),
            failure,
            sources: reply.sources.len(),
            text: reply.content.clone(),
        });

        info!("Submission finished: {:?}", outcome);
        outcome
    }

    /// Start over: rotate the session id, clear the displayed history and
    /// tell the backend to forget the retired session.
    ///
    /// Never waits on the network; the clear call runs on a background task.
    pub fn start_new_conversation(&self) -> NewConversation {
        let rotation = self.sessions.rotate_with_previous();
        self.renderer.clear_history();

        self.conversation_logger.log(ConversationEvent::SessionRotated {
            previous: rotation.previous.clone(),
            current: rotation.current.clone(),
        });

        let clear_task = rotation.previous.and_then(|previous| {
            let Ok(runtime) = tokio::runtime::Handle::try_current() else {
                warn!("No async runtime; not clearing server memory for {}", previous);
                return None;
            };
            let dispatcher = self.dispatcher.clone();
            Some(runtime.spawn(async move {
                if let Err(e) = dispatcher.clear_session(previous).await {
                    warn!("Failed to clear server conversation memory: {}", e);
                }
            }))
        });

        NewConversation {
            session_id: rotation.current,
            clear_task,
        }
    }

    fn begin_request(&self) -> Option<AwaitingGuard<'_>> {
        let mut state = lock(&self.state);
        if *state == ConversationState::AwaitingResponse {
            return None;
        }
        *state = ConversationState::AwaitingResponse;
        Some(AwaitingGuard { state: &self.state })
    }

    fn build_request(
        &self,
        intent: &InputIntent,
        config: &ConversationConfig,
    ) -> Option<OutgoingRequest> {
        let request = match intent {
            InputIntent::Empty => return None,
            InputIntent::Search { query } => OutgoingRequest::Search(SearchRequest {
                query: query.clone(),
                k: config.search_results,
                use_hybrid: config.use_hybrid,
            }),
            InputIntent::Recipe { ingredients } => OutgoingRequest::Recipe(RecipeRequest {
                ingredients: ingredients.clone(),
                profile: config.profile.clone(),
                session_id: self.sessions.get_or_create_session_id(),
            }),
            InputIntent::Chat { message } => OutgoingRequest::Chat(ChatRequest {
                message: message.clone(),
                session_id: self.sessions.get_or_create_session_id(),
                profile: config.chat_sends_profile.then(|| config.profile.clone()),
            }),
        };
        Some(request)
    }
}

/// Returns the controller to `Idle` when the submission ends, however it ends.
struct AwaitingGuard<'a> {
    state: &'a Mutex<ConversationState>,
}

impl Drop for AwaitingGuard<'_> {
    fn drop(&mut self) {
        *lock(self.state) = ConversationState::Idle;
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The user's side of the exchange, as displayed.
fn user_echo(intent: &InputIntent, config: &ConversationConfig) -> String {
    match intent {
        InputIntent::Recipe { ingredients } => format!(
            "**Ingredients:** {}\n**Goal:** {}",
            ingredients, config.profile.goal
        ),
        InputIntent::Search { query } => format!("search: {}", query),
        InputIntent::Chat { message } => message.clone(),
        InputIntent::Empty => String::new(),
    }
}

/// Turn a dispatch result into the assistant message to display.
fn interpret(
    intent: &InputIntent,
    result: Result<InboundResponse, DispatchError>,
) -> (ChatMessage, SubmitOutcome) {
    let response = match result {
        Ok(response) => response,
        Err(DispatchError::Network(cause)) => {
            return (
                ChatMessage::assistant(format!(
                    "Network error: {}. Make sure the server is running.",
                    cause
                )),
                SubmitOutcome::Failed(FailureKind::Network),
            );
        }
        Err(DispatchError::MalformedResponse(detail)) => {
            debug!("Malformed response: {}", detail);
            return (
                ChatMessage::assistant(MALFORMED_RESPONSE_MESSAGE),
                SubmitOutcome::Failed(FailureKind::MalformedResponse),
            );
        }
        Err(e @ DispatchError::InvalidRequest(_)) => {
            return (
                ChatMessage::assistant(format!("Could not build the request. ({})", e)),
                SubmitOutcome::Failed(FailureKind::InvalidRequest),
            );
        }
    };

    if !response.success {
        let text = match (intent, response.error.as_deref()) {
            (InputIntent::Recipe { .. }, Some(error)) => {
                format!("I couldn't generate a recipe. {}", error)
            }
            (InputIntent::Recipe { .. }, None) => {
                "I couldn't generate a recipe. The server gave no reason.".to_string()
            }
            (_, error) => format!("Error: {}", error.unwrap_or("Failed to get response")),
        };
        return (
            ChatMessage::assistant(text),
            SubmitOutcome::Failed(FailureKind::Application),
        );
    }

    let text = match (intent, response.reply) {
        (InputIntent::Search { query }, _) => {
            format!("Here are the top results for \"{}\":", query)
        }
        (_, Some(reply)) => reply,
        (_, None) => EMPTY_REPLY_MESSAGE.to_string(),
    };

    (
        ChatMessage::assistant(text).with_sources(response.sources),
        SubmitOutcome::Answered,
    )
}
