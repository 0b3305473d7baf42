//! Renderer port
//!
//! The conversation controller never prints; it hands messages and loading
//! placeholders to a renderer. Implementations live in the presentation layer.

use nutri_domain::ChatMessage;

/// Token for a loading placeholder currently on screen.
///
/// Not `Clone`: handing it back to
/// [`RendererPort::remove_loading`] consumes it, so a placeholder is removed
/// at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct LoadingHandle {
    id: u64,
}

impl LoadingHandle {
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Displays the conversation.
pub trait RendererPort: Send + Sync {
    /// Show a user or assistant message, with its source cards.
    fn append_message(&self, message: &ChatMessage);

    /// Show a provisional "assistant is typing" placeholder.
    fn show_loading(&self) -> LoadingHandle;

    /// Remove a placeholder shown by [`Self::show_loading`].
    fn remove_loading(&self, handle: LoadingHandle);

    /// Clear displayed history, keeping only the initial greeting.
    fn clear_history(&self);
}

/// Renderer that discards everything (one-shot scripting, tests).
pub struct NoRenderer;

impl RendererPort for NoRenderer {
    fn append_message(&self, _message: &ChatMessage) {}

    fn show_loading(&self) -> LoadingHandle {
        LoadingHandle::new(0)
    }

    fn remove_loading(&self, _handle: LoadingHandle) {}

    fn clear_history(&self) {}
}
