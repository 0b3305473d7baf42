//! Normalized response entities

use crate::core::string::truncate_chars;
use crate::session::entities::SessionId;
use serde::Serialize;

/// Maximum number of characters of a source snippet shown before truncation.
pub const SNIPPET_PREVIEW_CHARS: usize = 150;

/// Snippet shown when a source carries no preview text at all.
pub const NO_PREVIEW_PLACEHOLDER: &str = "No preview available";

/// Title shown when a source carries no title.
pub const UNKNOWN_SOURCE_TITLE: &str = "Unknown Source";

/// Where a source record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Retrieved recipe or fact (RAG result)
    Retrieved,
    /// Direct branded-food database hit
    Branded,
}

/// A citation describing the provenance of generated content (Value Object)
///
/// The snippet is always a bounded preview and the confidence always lies in
/// `[0, 1]`; both are enforced on construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Source {
    title: String,
    snippet: String,
    confidence: f64,
    kind: SourceKind,
}

impl Source {
    pub fn new(title: impl Into<String>, snippet: impl AsRef<str>, confidence: f64) -> Self {
        let title = title.into();
        let title = if title.trim().is_empty() {
            UNKNOWN_SOURCE_TITLE.to_string()
        } else {
            title
        };

        let snippet = snippet.as_ref();
        let snippet = if snippet.trim().is_empty() {
            NO_PREVIEW_PLACEHOLDER.to_string()
        } else {
            truncate_chars(snippet, SNIPPET_PREVIEW_CHARS)
        };

        Self {
            title,
            snippet,
            confidence: clamp_confidence(confidence),
            kind: SourceKind::Retrieved,
        }
    }

    pub fn with_kind(mut self, kind: SourceKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Confidence as a whole percentage (0–100).
    pub fn percentage(&self) -> u8 {
        (self.confidence * 100.0).round() as u8
    }
}

fn clamp_confidence(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// A backend reply normalized into one shape, whichever endpoint produced it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InboundResponse {
    pub success: bool,
    pub reply: Option<String>,
    pub sources: Vec<Source>,
    pub error: Option<String>,
    pub new_session_id: Option<SessionId>,
}

impl InboundResponse {
    pub fn is_success(&self) -> bool {
        self.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_snippet_is_truncated_to_preview_length() {
        let text = "a".repeat(500);
        let source = Source::new("Lasagna", &text, 0.9);
        assert_eq!(source.snippet(), format!("{}...", "a".repeat(150)));
        assert_eq!(source.snippet().chars().count(), 153);
    }

    #[test]
    fn test_snippet_at_limit_is_kept() {
        let text = "b".repeat(150);
        let source = Source::new("Soup", &text, 0.1);
        assert_eq!(source.snippet(), text);
    }

    #[test]
    fn test_empty_snippet_uses_placeholder() {
        let source = Source::new("Soup", "", 0.4);
        assert_eq!(source.snippet(), NO_PREVIEW_PLACEHOLDER);
        let source = Source::new("Soup", "   ", 0.4);
        assert_eq!(source.snippet(), NO_PREVIEW_PLACEHOLDER);
    }

    #[test]
    fn test_blank_title_uses_unknown_source() {
        assert_eq!(Source::new("", "x", 0.0).title(), UNKNOWN_SOURCE_TITLE);
    }

    #[test]
    fn test_confidence_is_clamped() {
        assert_eq!(Source::new("t", "s", 1.7).confidence(), 1.0);
        assert_eq!(Source::new("t", "s", -0.2).confidence(), 0.0);
        assert_eq!(Source::new("t", "s", f64::NAN).confidence(), 0.0);
        assert_eq!(Source::new("t", "s", f64::INFINITY).confidence(), 0.0);
    }

    #[test]
    fn test_percentage_rounds() {
        assert_eq!(Source::new("t", "s", 0.876).percentage(), 88);
        assert_eq!(Source::new("t", "s", 1.0).percentage(), 100);
        assert_eq!(Source::new("t", "s", 0.0).percentage(), 0);
    }
}
