//! Mock API client for testing
//!
//! Deterministic responses keyed by method and path, no network.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};

use super::error::{ClientError, ClientResult};
use super::traits::{ApiClient, ApiRequest, HttpMethod};
use crate::types::RequestContext;

/// Canned answer for a route
#[derive(Debug, Clone)]
pub enum MockResponse {
    Json(Value),
    Error { status: u16, message: String },
}

/// Records every request; unrouted requests get `{}`
#[derive(Debug, Default)]
pub struct MockApiClient {
    routes: Mutex<HashMap<(HttpMethod, String), MockResponse>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, method: HttpMethod, path: &str, body: Value) -> Self {
        self.routes
            .lock()
            .insert((method, path.to_string()), MockResponse::Json(body));
        self
    }

    pub fn with_error(self, method: HttpMethod, path: &str, status: u16, message: &str) -> Self {
        self.routes.lock().insert(
            (method, path.to_string()),
            MockResponse::Error {
                status,
                message: message.to_string(),
            },
        );
        self
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn execute(&self, request: ApiRequest, ctx: &RequestContext) -> ClientResult<Value> {
        if ctx.cancellation.is_cancelled() {
            return Err(ClientError::Cancelled);
        }
        let route = self
            .routes
            .lock()
            .get(&(request.method, request.path.clone()))
            .cloned();
        self.requests.lock().push(request);

        match route {
            Some(MockResponse::Json(body)) => Ok(body),
            Some(MockResponse::Error { status, message }) => Err(ClientError::api(status, message)),
            None => Ok(json!({})),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_routes_and_records() {
        let client = MockApiClient::new()
            .with_response(HttpMethod::Get, "/v2/account", json!({ "account": { "status": "active" } }))
            .with_error(HttpMethod::Delete, "/v2/droplets/1", 404, "not found");
        let ctx = RequestContext::new();

        let account = client.execute(ApiRequest::new(HttpMethod::Get, "/v2/account"), &ctx).await.unwrap();
        assert_eq!(account["account"]["status"], "active");

        let err = client
            .execute(ApiRequest::new(HttpMethod::Delete, "/v2/droplets/1"), &ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 404, .. }));

        let other = client.execute(ApiRequest::new(HttpMethod::Get, "/v2/sizes"), &ctx).await.unwrap();
        assert_eq!(other, json!({}));

        assert_eq!(client.requests().len(), 3);
        assert_eq!(client.last_request().unwrap().path, "/v2/sizes");
    }
}
