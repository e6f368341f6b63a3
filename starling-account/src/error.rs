//! Error types for this library.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Response body is not valid JSON")]
    InvalidJson(#[source] serde_json::Error),
    #[error("Response body does not match the expected `{0}` shape")]
    UnexpectedShape(&'static str, #[source] serde_json::Error),
    #[error("Provider returned an error `{error}`: {description}")]
    Provider { error: String, description: String },
}

impl DecodeError {
    /// Whether the provider rejected the request's credentials.
    pub fn is_auth_failure(&self) -> bool {
        match self {
            DecodeError::Provider { error, .. } => {
                matches!(error.as_str(), "invalid_token" | "unauthorized" | "insufficient_scope")
            }
            _ => false,
        }
    }
}
