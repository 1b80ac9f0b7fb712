//! DigitalOcean API client
//!
//! ## Architecture
//!
//! ```text
//! tool handler ──ctx──▶ ClientProvider ──▶ Arc<dyn ApiClient>
//!                                             │
//!                          ┌──────────────────┴───────────┐
//!                    HttpApiClient                  MockApiClient
//!                 (reqwest, bearer auth)         (canned responses)
//! ```

mod error;
mod traits;
mod http;
mod mock;
mod provider;

pub use error::{ClientError, ClientResult};
pub use traits::{ApiClient, ApiRequest, HttpMethod};
pub use http::{build_http_client, HttpApiClient, DEFAULT_API_ENDPOINT};
pub use mock::{MockApiClient, MockResponse};
pub use provider::{static_provider, token_provider, unavailable_provider, ClientProvider};
