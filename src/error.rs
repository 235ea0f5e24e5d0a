//! Error taxonomy and classifier
//!
//! `CoreError` is the typed result surface returned to the Renderer;
//! the classifier functions normalize raw failures and emit exactly one
//! structured log line each through the tracing sink. Emitting can never
//! fail: the tracing macros are no-ops when no subscriber is installed.

use thiserror::Error;
use tracing::{error, warn};

/// Placeholder label when no context is supplied
const UNKNOWN_CONTEXT: &str = "unknown";

/// Placeholder message when the raw error carries no text
const UNKNOWN_ERROR: &str = "an unknown error occurred";

/// Placeholder when a validation failure arrives with no messages
const UNKNOWN_VIOLATION: &str = "invalid request";

/// Errors surfaced to the Renderer as first-class results
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Operation referenced an id absent from the store
    #[error("todo not found: {0}")]
    NotFound(String),

    /// Request failed validation; the collection was left unmodified
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log a raw failure with its originating context
pub fn handle(error_text: impl std::fmt::Display, context: &str) {
    let context = normalize_context(context);
    let mut message = error_text.to_string();
    if message.trim().is_empty() {
        message = UNKNOWN_ERROR.to_string();
    }
    error!(%context, %message, "error");
}

/// Log a validation failure with its violation list
pub fn handle_validation(messages: &[String], context: &str) {
    let context = normalize_context(context);
    let violations = if messages.is_empty() {
        UNKNOWN_VIOLATION.to_string()
    } else {
        messages.join("; ")
    };
    warn!(%context, %violations, "validation failed");
}

/// Log a not-found outcome for the given id
pub fn handle_not_found(id: &str, context: &str) {
    let context = normalize_context(context);
    let message = if id.trim().is_empty() {
        "todo not found".to_string()
    } else {
        format!("todo \"{}\" not found", id.trim())
    };
    warn!(%context, %message, "not found");
}

fn normalize_context(context: &str) -> &str {
    let trimmed = context.trim();
    if trimmed.is_empty() { UNKNOWN_CONTEXT } else { trimmed }
}
