//! API client error types

use thiserror::Error;

/// Errors that can occur while talking to the DigitalOcean API
#[derive(Error, Debug)]
pub enum ClientError {
    /// No token in the request context or the secret store
    #[error("DigitalOcean API token is not configured (set DIGITALOCEAN_API_TOKEN or pass --api-token)")]
    MissingToken,

    /// Tool arguments could not be turned into a request
    #[error("{0}")]
    InvalidArgument(String),

    /// Network/HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("DigitalOcean API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request was cancelled
    #[error("Request cancelled")]
    Cancelled,
}

impl ClientError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
