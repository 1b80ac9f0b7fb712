//! Tool registration and category filtering
//!
//! ```text
//! ["droplets", "networking:dns"]
//!     │ parse_service_filters
//!     ▼
//! ServiceFilterMap { droplets: {basic}, networking: {dns} }
//!     │ ServiceName::from_str + catalog activation
//!     ▼
//! [Droplets, Domains, Certificates] + common [Regions]
//!     │ CapabilityGroup::build
//!     ▼
//! ToolSurface::add_tools
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domcp_core::registry;
//! use domcp_core::tools::ToolServer;
//!
//! let server = ToolServer::new(logger.clone());
//! let report = registry::register(&server, &provider, logger.as_ref(), &["droplets:all", "accounts"])?;
//! println!("{} tools", report.tool_count);
//! ```

mod catalog;
mod driver;
mod error;
mod filter;

pub use catalog::{
    catalog, entry, supported_services, ActivationFn, ServiceCatalogEntry, ServiceName, COMMON_GROUPS,
    COMMON_SERVICE,
};
pub use driver::{plan, register, register_with, RegistrationPlan, RegistrationReport};
pub use error::{RegistryError, RegistryResult};
pub use filter::{has_category, parse_service_filters, CategorySet, ServiceFilterMap, ALL_CATEGORY, DEFAULT_CATEGORY};
