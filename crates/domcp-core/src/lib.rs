//! domcp core
//!
//! Exposes the DigitalOcean v2 API as MCP tools. The `registry` turns a
//! compact `service[:category]` list into a non-redundant set of tools,
//! defaulting to a small `basic` set per service, and appends them to a
//! serving surface.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domcp_core::{registry, token_provider, ConsoleLogger, EnvSecretStore, ToolServer};
//!
//! let logger = Arc::new(ConsoleLogger::new());
//! let provider = token_provider("https://api.digitalocean.com", Arc::new(EnvSecretStore::new()))?;
//! let server = ToolServer::new(logger.clone());
//!
//! registry::register(&server, &provider, logger.as_ref(), &["droplets:all", "networking:dns"])?;
//!
//! // Hand server.list_tools() / server.call_tool() to the transport
//! ```

pub mod client;
pub mod config;
pub mod logging;
pub mod registry;
pub mod response;
pub mod secrets;
pub mod tools;
pub mod types;

// Re-export commonly used types
pub use types::{CancellationToken, RequestContext, ToolCall, ToolResult};

pub use secrets::{
    ChainSecretStore, EnvSecretStore, MemorySecretStore, SecretStore, SecretStoreError, SecretStoreResult,
    API_TOKEN_KEY,
};

pub use logging::{ConsoleLogger, LogLevel, Logger, MemoryLogger, NoOpLogger, SharedLogger};

pub use config::{ConfigError, ConfigFile, ConfigResult, FileConfigProvider, ServerConfig};

pub use client::{
    token_provider, ApiClient, ApiRequest, ClientError, ClientProvider, ClientResult, HttpApiClient, HttpMethod,
    MockApiClient,
};

pub use tools::{CapabilityGroup, ServerTool, ToolError, ToolServer, ToolSurface};

pub use registry::{
    register, CategorySet, RegistrationReport, RegistryError, RegistryResult, ServiceFilterMap, ServiceName,
};

pub use response::compact_json;
