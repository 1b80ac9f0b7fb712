//! DigitalOcean tools
//!
//! Tools are declared as static `ToolSpec` tables, one file per service, and
//! grouped into `CapabilityGroup`s. Building a group binds every spec to the
//! generic API handler and a `ClientProvider`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  CapabilityGroup                            │
//! │    specs() -> &'static [ToolSpec]           │
//! │    build(provider) -> Vec<ServerTool>       │
//! └─────────────────────────────────────────────┘
//!           │
//!           │ ToolSurface::add_tools
//!           ▼
//! ┌─────────────────────────────────────────────┐
//! │  ToolServer                                 │
//! │    list_tools / call_tool                   │
//! └─────────────────────────────────────────────┘
//!           │
//!           │ ApiClient::execute
//!           ▼
//!     DigitalOcean v2 API
//! ```

mod error;
mod group;
mod handler;
mod server;
mod spec;

mod account;
mod apps;
mod common;
mod dbaas;
mod doks;
mod droplet;
mod insights;
mod marketplace;
mod networking;
mod spaces;

pub use error::ToolError;
pub use group::CapabilityGroup;
pub use handler::{api_tool, error_result, ServerTool, ToolFuture, ToolHandler};
pub use server::{ToolServer, ToolSurface};
pub use spec::{Param, ParamKind, ParamLocation, ToolSpec, PAGE, PER_PAGE};
