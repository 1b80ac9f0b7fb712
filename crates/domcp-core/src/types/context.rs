//! Per-request context handed to tool handlers and the client provider

use super::cancellation::CancellationToken;

/// Request-scoped data for a single tool invocation
///
/// `api_token` lets a hosting transport pass a caller-specific token (for
/// example from an HTTP header); when absent the client provider falls back
/// to its configured secret store.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub api_token: Option<String>,
    pub cancellation: CancellationToken,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_cancellation(mut self, cancellation: CancellationToken) -> Self {
        self.cancellation = cancellation;
        self
    }
}
