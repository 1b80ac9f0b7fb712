//! Registration errors

use thiserror::Error;

use crate::tools::ToolError;

/// Fatal problems raised while registering tools; the first one aborts
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Requested service is not in the catalog
    #[error("unsupported service: {service}, supported services are: {}", .supported.join(","))]
    UnknownService {
        service: String,
        supported: Vec<String>,
    },

    /// A capability group of `service` could not be constructed
    #[error("failed to register {service} tools: {source}")]
    Construction {
        service: String,
        #[source]
        source: ToolError,
    },
}

impl RegistryError {
    pub fn construction(service: impl Into<String>, source: ToolError) -> Self {
        Self::Construction {
            service: service.into(),
            source,
        }
    }

    /// Service the error is about
    pub fn service(&self) -> &str {
        match self {
            RegistryError::UnknownService { service, .. } => service,
            RegistryError::Construction { service, .. } => service,
        }
    }
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
