//! Terminal renderer for the conversation controller

use super::console::ConsoleFormatter;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use nutri_application::{LoadingHandle, RendererPort};
use nutri_domain::ChatMessage;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

const LOADING_MESSAGE: &str = "Thinking...";

/// Prints messages to stdout and shows a spinner while a request is in flight.
pub struct ConsoleRenderer {
    show_progress: bool,
    next_loading_id: AtomicU64,
    spinners: Mutex<HashMap<u64, ProgressBar>>,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self {
            show_progress: true,
            next_loading_id: AtomicU64::new(1),
            spinners: Mutex::new(HashMap::new()),
        }
    }

    /// Set whether to animate a spinner (a plain line is printed otherwise)
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Number of loading indicators currently shown
    pub fn active_loading(&self) -> usize {
        self.spinners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RendererPort for ConsoleRenderer {
    fn append_message(&self, message: &ChatMessage) {
        println!("{}", ConsoleFormatter::format_message(message));
    }

    fn show_loading(&self) -> LoadingHandle {
        let id = self.next_loading_id.fetch_add(1, Ordering::Relaxed);

        let spinner = if self.show_progress {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.set_message(LOADING_MESSAGE);
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        } else {
            println!("{}", LOADING_MESSAGE.dimmed());
            ProgressBar::hidden()
        };

        self.spinners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, spinner);
        LoadingHandle::new(id)
    }

    fn remove_loading(&self, handle: LoadingHandle) {
        let spinner = self
            .spinners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&handle.id());
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }
    }

    fn clear_history(&self) {
        println!("{}", ConsoleFormatter::separator());
        println!("{}", ConsoleFormatter::greeting());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_handles_are_distinct() {
        let renderer = ConsoleRenderer::new().with_progress(false);
        let first = renderer.show_loading();
        let second = renderer.show_loading();
        assert_ne!(first.id(), second.id());
        assert_eq!(renderer.active_loading(), 2);

        renderer.remove_loading(first);
        assert_eq!(renderer.active_loading(), 1);
        renderer.remove_loading(second);
        assert_eq!(renderer.active_loading(), 0);
    }

    #[test]
    fn test_removing_unknown_handle_is_harmless() {
        let renderer = ConsoleRenderer::new().with_progress(false);
        renderer.remove_loading(LoadingHandle::new(42));
        assert_eq!(renderer.active_loading(), 0);
    }

    #[test]
    fn test_spinner_is_cleared() {
        let renderer = ConsoleRenderer::new();
        let handle = renderer.show_loading();
        assert_eq!(renderer.active_loading(), 1);
        renderer.remove_loading(handle);
        assert_eq!(renderer.active_loading(), 0);
    }
}
