//! Response normalization
//!
//! Each concept is resolved through a precedence list of field aliases; the
//! first alias that is present and non-null wins.

use super::entities::{InboundResponse, Source, SourceKind, UNKNOWN_SOURCE_TITLE};
use crate::session::entities::SessionId;
use serde_json::{Map, Value};
use thiserror::Error;

/// Keys that may carry the assistant reply, highest priority first.
pub const REPLY_ALIASES: &[&str] = &["reply", "answer"];

/// Keys that may carry an application error message.
pub const ERROR_ALIASES: &[&str] = &["error", "refusal_message"];

/// Keys that may carry the list of source records.
pub const SOURCE_LIST_ALIASES: &[&str] = &["retrieved_recipes", "sources", "facts_used", "recipes"];

const SNIPPET_ALIASES: &[&str] = &["snippet", "text", "directions", "ingredients"];
const CONFIDENCE_ALIASES: &[&str] = &["confidence", "score"];

/// Confidence assigned to direct branded-food database hits.
const BRANDED_CONFIDENCE: f64 = 1.0;

/// The body did not have the shape of any known backend reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Field '{field}' should be {expected}, got {actual}")]
    WrongType {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Source #{index} in '{field}' is not an object")]
    InvalidSource { field: String, index: usize },
}

/// Fold a raw backend reply into an [`InboundResponse`].
///
/// - reply: `reply`, then `answer` (blank strings count as absent)
/// - success: the `success` flag when it is a boolean, otherwise "a reply was found"
/// - error: `error`, then `refusal_message`
/// - sources: `retrieved_recipes`, `sources`, `facts_used`, then `recipes`
/// - new session id: non-blank `session_id`
pub fn normalize_response(body: &Value) -> Result<InboundResponse, NormalizeError> {
    let obj = body
        .as_object()
        .ok_or_else(|| NormalizeError::NotAnObject(json_type(body)))?;

    let reply = first_string(obj, REPLY_ALIASES)?;
    let error = first_string(obj, ERROR_ALIASES)?;

    let success = match obj.get("success") {
        None | Some(Value::Null) => reply.is_some(),
        Some(Value::Bool(flag)) => *flag,
        Some(other) => {
            return Err(NormalizeError::WrongType {
                field: "success".to_string(),
                expected: "a boolean",
                actual: json_type(other),
            });
        }
    };

    let sources = match first_present(obj, SOURCE_LIST_ALIASES) {
        None => Vec::new(),
        Some((field, value)) => normalize_source_list(field, value)?,
    };

    let new_session_id = match obj.get("session_id") {
        None | Some(Value::Null) => None,
        Some(Value::String(id)) => SessionId::new(id.as_str()).ok(),
        Some(other) => {
            return Err(NormalizeError::WrongType {
                field: "session_id".to_string(),
                expected: "a string",
                actual: json_type(other),
            });
        }
    };

    Ok(InboundResponse {
        success,
        reply,
        sources,
        error,
        new_session_id,
    })
}

/// Normalize a single backend source record.
///
/// Branded-food hits (`type == "branded"` or a `brand_name`) are titled
/// `"{brand_name} ({brand_owner})"`, previewed from `ingredients` and always
/// fully confident.
pub fn normalize_source(record: &Map<String, Value>) -> Source {
    let brand_name = loose_text(record, "brand_name");
    let is_branded =
        record.get("type").and_then(Value::as_str) == Some("branded") || brand_name.is_some();

    if is_branded {
        let owner = loose_text(record, "brand_owner").unwrap_or_else(|| "Unknown".to_string());
        let brand = brand_name
            .or_else(|| loose_text(record, "title"))
            .unwrap_or_else(|| UNKNOWN_SOURCE_TITLE.to_string());
        let title = format!("{} ({})", brand, owner);
        let snippet = loose_text(record, "ingredients").unwrap_or_default();
        return Source::new(title, snippet, BRANDED_CONFIDENCE).with_kind(SourceKind::Branded);
    }

    let title = loose_text(record, "title").unwrap_or_default();
    let snippet = SNIPPET_ALIASES
        .iter()
        .find_map(|key| loose_text(record, key))
        .unwrap_or_default();
    let confidence = CONFIDENCE_ALIASES
        .iter()
        .find_map(|key| record.get(*key).and_then(Value::as_f64))
        .unwrap_or(0.0);

    Source::new(title, snippet, confidence)
}

fn normalize_source_list(field: &str, value: &Value) -> Result<Vec<Source>, NormalizeError> {
    let items = value.as_array().ok_or_else(|| NormalizeError::WrongType {
        field: field.to_string(),
        expected: "an array",
        actual: json_type(value),
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_object()
                .map(normalize_source)
                .ok_or_else(|| NormalizeError::InvalidSource {
                    field: field.to_string(),
                    index,
                })
        })
        .collect()
}

fn first_present<'a>(
    obj: &'a Map<String, Value>,
    aliases: &[&'static str],
) -> Option<(&'static str, &'a Value)> {
    aliases.iter().find_map(|key| match obj.get(*key) {
        None | Some(Value::Null) => None,
        Some(value) => Some((*key, value)),
    })
}

/// First non-blank string among `aliases`. A present alias of another type is an error.
fn first_string(
    obj: &Map<String, Value>,
    aliases: &[&'static str],
) -> Result<Option<String>, NormalizeError> {
    for key in aliases {
        match obj.get(*key) {
            None | Some(Value::Null) => continue,
            Some(Value::String(s)) if s.trim().is_empty() => continue,
            Some(Value::String(s)) => return Ok(Some(s.clone())),
            Some(other) => {
                return Err(NormalizeError::WrongType {
                    field: (*key).to_string(),
                    expected: "a string",
                    actual: json_type(other),
                });
            }
        }
    }
    Ok(None)
}

/// Text from a source record field: a string, or an array of strings joined
/// with `", "`. Anything else is treated as absent.
fn loose_text(record: &Map<String, Value>, key: &str) -> Option<String> {
    let text = match record.get(key)? {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };
    if text.trim().is_empty() { None } else { Some(text) }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
