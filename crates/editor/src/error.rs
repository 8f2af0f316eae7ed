//! Submission error taxonomy.

use serde_json::Value;
use thiserror::Error;

use tripdesk_catalog::ValidationErrors;
use tripdesk_client::ApiError;

#[derive(Debug, Clone, Error)]
pub enum SubmitError {
    /// The form failed validation; raised by the editor, never by the coordinator.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Creation succeeded but the response carried no usable id.
    #[error("Failed to get new destination ID")]
    MissingId,

    /// A repository call answered with a non-success status.
    #[error("API error ({status}): {body}")]
    Repository { status: u16, body: Value },

    /// Anything else (network failure, undecodable response).
    #[error("{0}")]
    Unknown(String),
}

impl From<ApiError> for SubmitError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Repository { status, body } => SubmitError::Repository { status, body },
            other => SubmitError::Unknown(other.to_string()),
        }
    }
}
