//! Turning a failed submission into one display string.
//!
//! Precedence:
//! 1. structured field-error list (`{"Error": [{"body": ..}, ..]}`), joined
//! 2. a single structured field error (`{"Error": {"body": ..}}`)
//! 3. the server's `message` / `Message` field
//! 4. the error's own message (transport, decode, missing id)
//! 5. [`FALLBACK_MESSAGE`]

use serde_json::Value;

use crate::error::SubmitError;

pub const FALLBACK_MESSAGE: &str = "Unknown error occurred";

/// Known shapes of an error response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerErrorShape {
    FieldErrors(Vec<String>),
    FieldError(String),
    Message(String),
    Unrecognized,
}

impl ServerErrorShape {
    pub fn classify(body: &Value) -> Self {
        match body.get("Error") {
            Some(Value::Array(items)) => {
                let bodies: Vec<String> = items
                    .iter()
                    .filter_map(|item| item.get("body"))
                    .map(text_of)
                    .filter(|s| !s.is_empty())
                    .collect();
                if !bodies.is_empty() {
                    return ServerErrorShape::FieldErrors(bodies);
                }
            }
            Some(Value::Object(obj)) => {
                if let Some(body) = obj.get("body").map(text_of).filter(|s| !s.is_empty()) {
                    return ServerErrorShape::FieldError(body);
                }
            }
            _ => {}
        }

        match body.get("message").or_else(|| body.get("Message")) {
            Some(Value::Array(parts)) if !parts.is_empty() => {
                let parts: Vec<String> = parts.iter().map(text_of).collect();
                ServerErrorShape::Message(parts.join(", "))
            }
            Some(Value::Null) | Some(Value::Array(_)) | None => ServerErrorShape::Unrecognized,
            Some(message) => match text_of(message) {
                s if s.is_empty() => ServerErrorShape::Unrecognized,
                s => ServerErrorShape::Message(s),
            },
        }
    }
}

/// Strings verbatim, anything else as compact JSON.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One human-readable message for `err`, without the `Failed: ` prefix.
pub fn normalize_error(err: &SubmitError) -> String {
    match err {
        SubmitError::Repository { status, body } => match ServerErrorShape::classify(body) {
            ServerErrorShape::FieldErrors(bodies) => bodies.join(", "),
            ServerErrorShape::FieldError(body) | ServerErrorShape::Message(body) => body,
            ServerErrorShape::Unrecognized => {
                tracing::debug!(status, %body, "unrecognized error body");
                FALLBACK_MESSAGE.to_string()
            }
        },
        SubmitError::Unknown(message) if message.is_empty() => FALLBACK_MESSAGE.to_string(),
        other => other.to_string(),
    }
}
