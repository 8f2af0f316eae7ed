//! Errors returned by the HTTP layer.

use serde_json::Value;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// The API answered with a non-2xx status.
    ///
    /// `body` is the parsed JSON body, or the raw text as a JSON string when
    /// the body was not JSON.
    #[error("API error ({status}): {body}")]
    Repository { status: u16, body: Value },

    /// The request never produced a response (connect, DNS, TLS, timeout).
    #[error("network error: {0}")]
    Transport(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("parse error: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Repository { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
