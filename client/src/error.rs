//! Error type for client operations

use thiserror::Error;
use filter_builder_core::SynopsisError;

/// Error type for client operations
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("Server error: {status} - {body}")]
    Status {
        /// HTTP status code
        status: u16,

        /// Response body, if it could be read
        body: String,
    },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No access token available
    #[error("Token error: {0}")]
    Token(String),

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, FetchError>;

impl FetchError {
    /// Describe this failure as a synopsis error so it can be shown by the form
    pub fn to_synopsis_error(&self) -> SynopsisError {
        match self {
            FetchError::Network(e) => SynopsisError::new("NETWORK_ERROR", e.to_string()),
            FetchError::Status { status, body } => {
                let description = if body.is_empty() {
                    format!("Request failed with status {}", status)
                } else {
                    body.clone()
                };
                SynopsisError::new(format!("HTTP_{}", status), description)
            }
            FetchError::Json(e) => SynopsisError::new("INVALID_RESPONSE", e.to_string()),
            FetchError::Token(msg) => SynopsisError::new("UNAUTHENTICATED", msg.clone()),
            FetchError::Other(msg) => SynopsisError::new("CLIENT_ERROR", msg.clone()),
        }
    }

    /// Whether another attempt could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Network(_) | FetchError::Status { .. })
    }
}
