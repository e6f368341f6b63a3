//! Errors raised while talking to the Starling API.

use starling_account::DecodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Could not build the HTTP client.")]
    Client(#[source] reqwest::Error),
    #[error("Request to `{url}` failed.")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Could not read the response body from `{url}`.")]
    ResponseRead {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Could not decode the response from `{path}`.")]
    Decode {
        path: String,
        #[source]
        source: DecodeError,
    },
}

impl ApiError {
    /// Whether the provider rejected the configured token
    pub fn is_auth_failure(&self) -> bool {
        match self {
            ApiError::Decode { source, .. } => source.is_auth_failure(),
            _ => false,
        }
    }
}
