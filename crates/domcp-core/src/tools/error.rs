//! Tool construction and invocation errors

use thiserror::Error;

use crate::client::ClientError;

/// Errors raised while building a capability group or running one of its tools
#[derive(Error, Debug)]
pub enum ToolError {
    /// Two tools in one group share a name
    #[error("duplicate tool name: {0}")]
    DuplicateTool(String),

    /// A tool definition is inconsistent (path placeholders vs parameters)
    #[error("invalid tool definition {tool}: {message}")]
    InvalidSpec { tool: String, message: String },

    /// No client could be obtained for the request
    #[error("failed to get DigitalOcean client: {0}")]
    Client(#[from] ClientError),

    /// Result could not be serialized
    #[error("marshal error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tool name not registered on the server
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}

impl ToolError {
    pub fn invalid_spec(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSpec {
            tool: tool.into(),
            message: message.into(),
        }
    }
}
