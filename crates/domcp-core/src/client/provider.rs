//! Client providers
//!
//! Tool handlers never build clients themselves; they ask a provider for one
//! on every call, passing the request context.

use std::sync::Arc;

use super::error::{ClientError, ClientResult};
use super::http::{build_http_client, HttpApiClient};
use super::traits::ApiClient;
use crate::secrets::{SecretStore, API_TOKEN_KEY};
use crate::types::RequestContext;

/// Factory producing an authenticated client for a request
pub type ClientProvider =
    Arc<dyn Fn(&RequestContext) -> ClientResult<Arc<dyn ApiClient>> + Send + Sync>;

/// Provider that authenticates with the request's token, falling back to
/// `store`
///
/// The reqwest client is built once and shared by every handed-out client.
pub fn token_provider(
    endpoint: impl Into<String>,
    store: Arc<dyn SecretStore>,
) -> ClientResult<ClientProvider> {
    let endpoint = endpoint.into();
    let http = build_http_client()?;

    Ok(Arc::new(move |ctx: &RequestContext| {
        let token = match ctx.api_token.as_deref() {
            Some(token) if !token.is_empty() => token.to_string(),
            _ => store.get(API_TOKEN_KEY).ok_or(ClientError::MissingToken)?,
        };
        let client: Arc<dyn ApiClient> =
            Arc::new(HttpApiClient::with_http(http.clone(), endpoint.clone(), token));
        Ok(client)
    }))
}

/// Provider that always hands out the same client
pub fn static_provider(client: Arc<dyn ApiClient>) -> ClientProvider {
    Arc::new(move |_ctx: &RequestContext| Ok(client.clone()))
}

/// Provider that always fails; registration never calls it
pub fn unavailable_provider() -> ClientProvider {
    Arc::new(|_ctx: &RequestContext| Err(ClientError::MissingToken))
}
