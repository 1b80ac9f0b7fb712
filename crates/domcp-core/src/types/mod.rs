//! Shared types for tool invocation

mod tool;
mod context;
mod cancellation;

pub use tool::{ToolCall, ToolResult};
pub use context::RequestContext;
pub use cancellation::CancellationToken;
