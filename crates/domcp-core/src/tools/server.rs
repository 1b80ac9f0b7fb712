//! Serving surface for registered tools
//!
//! The registry only ever appends to a `ToolSurface`. `ToolServer` is the
//! in-process implementation: it keeps the tools, lists them and dispatches
//! calls, leaving the wire protocol to whoever hosts it.

use std::sync::Arc;

use parking_lot::RwLock;
use rmcp::model::{CallToolResult, RawContent, Tool};
use serde_json::Value;

use super::error::ToolError;
use super::handler::ServerTool;
use crate::logging::Logger;
use crate::{log_debug, log_error};
use crate::types::{RequestContext, ToolCall, ToolResult};

/// Destination for registered tools
pub trait ToolSurface {
    /// Attach tools; a tool whose name is already present replaces the old one
    fn add_tools(&self, tools: Vec<ServerTool>);
}

/// In-memory tool server
pub struct ToolServer {
    tools: RwLock<Vec<ServerTool>>,
    logger: Arc<dyn Logger>,
}

impl ToolServer {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            tools: RwLock::new(Vec::new()),
            logger,
        }
    }

    /// Tool definitions in registration order
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools.read().iter().map(|t| t.tool.clone()).collect()
    }

    pub fn tool_names(&self) -> Vec<String> {
        self.tools.read().iter().map(|t| t.name().to_string()).collect()
    }

    pub fn get(&self, name: &str) -> Option<ServerTool> {
        self.tools.read().iter().find(|t| t.name() == name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.read().iter().any(|t| t.name() == name)
    }

    pub fn len(&self) -> usize {
        self.tools.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call a tool by name
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
        ctx: RequestContext,
    ) -> Result<CallToolResult, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        log_debug!(self.logger, "[ToolServer] Calling tool: {}", name);
        tool.call(ctx, arguments).await
    }

    /// Execute a tool call and flatten the outcome to text
    pub async fn execute_tool_call(&self, tool_call: &ToolCall, ctx: RequestContext) -> ToolResult {
        match self.call_tool(&tool_call.name, tool_call.input.clone(), ctx).await {
            Ok(result) => {
                let text = result
                    .content
                    .iter()
                    .filter_map(|c| match &c.raw {
                        RawContent::Text(t) => Some(t.text.clone()),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join("\n");

                ToolResult {
                    call_id: tool_call.id.clone(),
                    content: text,
                    is_error: result.is_error.unwrap_or(false),
                }
            }
            Err(e) => {
                log_error!(self.logger, "[ToolServer] Tool {} failed: {}", tool_call.name, e);
                ToolResult::error(tool_call.id.clone(), e.to_string())
            }
        }
    }
}

impl ToolSurface for ToolServer {
    fn add_tools(&self, tools: Vec<ServerTool>) {
        let mut current = self.tools.write();
        for tool in tools {
            match current.iter().position(|t| t.name() == tool.name()) {
                Some(pos) => current[pos] = tool,
                None => current.push(tool),
            }
        }
    }
}

impl std::fmt::Debug for ToolServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolServer").field("tools", &self.tool_names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{static_provider, HttpMethod, MockApiClient};
    use crate::logging::NoOpLogger;
    use crate::tools::handler::api_tool;
    use crate::tools::spec::{tool, Param, ToolSpec};
    use serde_json::json;

    static ACCOUNT: ToolSpec = tool!(Get "/v2/account" => "account-get-information", "Account info");
    static KEY_GET: ToolSpec = tool!(
        Get "/v2/account/keys/{key_id}" => "key-get", "Get SSH key",
        params: [Param::path("key_id", "Key ID or fingerprint")],
    );

    fn server_with(mock: Arc<MockApiClient>) -> ToolServer {
        let server = ToolServer::new(Arc::new(NoOpLogger::new()));
        let provider = static_provider(mock);
        server.add_tools(vec![api_tool(&ACCOUNT, provider.clone()), api_tool(&KEY_GET, provider)]);
        server
    }

    #[test]
    fn test_add_tools_replaces_same_name() {
        let server = server_with(Arc::new(MockApiClient::new()));
        assert_eq!(server.len(), 2);

        let provider = static_provider(Arc::new(MockApiClient::new()));
        server.add_tools(vec![api_tool(&ACCOUNT, provider)]);
        assert_eq!(server.len(), 2);
        assert_eq!(server.tool_names(), vec!["account-get-information", "key-get"]);
        assert!(server.contains("key-get"));
        assert!(!server.is_empty());
    }

    #[test]
    fn test_list_tools_exposes_schema() {
        let server = server_with(Arc::new(MockApiClient::new()));
        let tools = server.list_tools();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[1].input_schema.get("required"), Some(&json!(["key_id"])));
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let server = server_with(Arc::new(MockApiClient::new()));
        let err = server
            .call_tool("droplet-create", json!({}), RequestContext::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(name) if name == "droplet-create"));
    }

    #[tokio::test]
    async fn test_execute_tool_call() {
        let mock = Arc::new(
            MockApiClient::new().with_response(HttpMethod::Get, "/v2/account", json!({ "account": { "uuid": "u1" } })),
        );
        let server = server_with(mock.clone());

        let calls = vec![
            ToolCall::new("1", "account-get-information", json!({})),
            ToolCall::new("2", "key-get", json!({})),
            ToolCall::new("3", "nope", json!({})),
        ];
        let mut results = Vec::new();
        for call in &calls {
            results.push(server.execute_tool_call(call, RequestContext::new()).await);
        }

        assert_eq!(results[0].content, r#"{"account":{"uuid":"u1"}}"#);
        assert!(!results[0].is_error);
        assert!(results[1].is_error);
        assert_eq!(results[1].content, "key_id is required");
        assert!(results[2].is_error);
        assert_eq!(results[2].call_id, "3");
        assert_eq!(mock.requests().len(), 1);
    }
}
