//! reqwest-backed API client

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

use super::error::{ClientError, ClientResult};
use super::traits::{ApiClient, ApiRequest, HttpMethod};
use crate::types::RequestContext;

/// Public DigitalOcean API endpoint
pub const DEFAULT_API_ENDPOINT: &str = "https://api.digitalocean.com";

/// Build the shared reqwest client
pub fn build_http_client() -> ClientResult<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("domcp/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// API client bound to one endpoint and one bearer token
pub struct HttpApiClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpApiClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> ClientResult<Self> {
        Ok(Self::with_http(build_http_client()?, base_url, token))
    }

    /// Reuse an existing reqwest client (and its connection pool)
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn send(&self, request: ApiRequest) -> ClientResult<Value> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        };

        let mut builder = self
            .http
            .request(method, self.url_for(&request.path))
            .bearer_auth(&self.token);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::api(status.as_u16(), api_error_message(status, &text)));
        }
        Ok(decode_body(status, &text))
    }
}

impl std::fmt::Debug for HttpApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpApiClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn execute(&self, request: ApiRequest, ctx: &RequestContext) -> ClientResult<Value> {
        if ctx.cancellation.is_cancelled() {
            return Err(ClientError::Cancelled);
        }
        tokio::select! {
            result = self.send(request) => result,
            _ = ctx.cancellation.cancelled() => Err(ClientError::Cancelled),
        }
    }
}

/// Decode a successful response body
///
/// Deletes and most actions answer 204 with no body; kubeconfig downloads
/// answer YAML.
fn decode_body(status: StatusCode, text: &str) -> Value {
    if text.trim().is_empty() {
        return json!({ "status": status.as_u16() });
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Pull the human-readable message out of an error response
fn api_error_message(status: StatusCode, text: &str) -> String {
    let from_body = serde_json::from_str::<Value>(text)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string));
    match from_body {
        Some(message) => message,
        None if !text.trim().is_empty() => text.trim().to_string(),
        None => status.canonical_reason().unwrap_or("request failed").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_paths() {
        let client = HttpApiClient::new("https://api.example.com/", "t").unwrap();
        assert_eq!(client.url_for("/v2/account"), "https://api.example.com/v2/account");
        assert_eq!(client.base_url(), "https://api.example.com/");
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = HttpApiClient::new(DEFAULT_API_ENDPOINT, "dop_v1_secret").unwrap();
        let printed = format!("{:?}", client);
        assert!(!printed.contains("dop_v1_secret"));
        assert!(printed.contains("redacted"));
    }

    #[test]
    fn test_decode_body() {
        assert_eq!(decode_body(StatusCode::NO_CONTENT, ""), json!({ "status": 204 }));
        assert_eq!(decode_body(StatusCode::OK, r#"{"a":1}"#), json!({ "a": 1 }));
        assert_eq!(
            decode_body(StatusCode::OK, "apiVersion: v1\n"),
            Value::String("apiVersion: v1\n".to_string())
        );
    }

    #[test]
    fn test_api_error_message() {
        assert_eq!(
            api_error_message(StatusCode::NOT_FOUND, r#"{"id":"not_found","message":"The resource you were accessing could not be found."}"#),
            "The resource you were accessing could not be found."
        );
        assert_eq!(api_error_message(StatusCode::BAD_GATEWAY, "upstream down"), "upstream down");
        assert_eq!(api_error_message(StatusCode::UNAUTHORIZED, ""), "Unauthorized");
    }

    #[tokio::test]
    async fn test_cancelled_before_send() {
        let client = HttpApiClient::new("http://127.0.0.1:9", "t").unwrap();
        let ctx = RequestContext::new();
        ctx.cancellation.cancel();

        let result = client.execute(ApiRequest::new(HttpMethod::Get, "/v2/account"), &ctx).await;
        assert!(matches!(result, Err(ClientError::Cancelled)));
    }
}
