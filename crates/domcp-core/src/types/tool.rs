//! Tool call request/response types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool call as issued by the agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique identifier for this tool call
    pub id: String,
    /// Name of the tool being called
    pub name: String,
    /// Input arguments for the tool
    pub input: Value,
}

impl ToolCall {
    pub fn new(id: impl Into<String>, name: impl Into<String>, input: Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            input,
        }
    }
}

/// Flattened result of a tool call, ready to hand back to the agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// ID of the tool call this is responding to
    #[serde(rename = "callId")]
    pub call_id: String,
    /// Text content joined with newlines
    pub content: String,
    /// Whether this result represents an error
    #[serde(rename = "isError", default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ToolResult {
    pub fn success(call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            content: content.into(),
            is_error: false,
        }
    }

    pub fn error(call_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            content: error.into(),
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_call_deserializes() {
        let call: ToolCall =
            serde_json::from_value(json!({ "id": "call_1", "name": "droplet-get", "input": { "id": 42 } })).unwrap();
        assert_eq!(call.name, "droplet-get");
        assert_eq!(call.input["id"], json!(42));
    }

    #[test]
    fn test_tool_result_serialization() {
        let ok = serde_json::to_value(ToolResult::success("c1", "{}")).unwrap();
        assert_eq!(ok, json!({ "callId": "c1", "content": "{}" }));

        let err = serde_json::to_value(ToolResult::error("c2", "api error")).unwrap();
        assert_eq!(err["isError"], json!(true));
    }
}
