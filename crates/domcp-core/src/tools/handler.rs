//! Tool descriptors and the generic API-call handler

use std::sync::Arc;

use futures::future::BoxFuture;
use rmcp::model::{CallToolResult, Content, Tool};
use serde_json::Value;

use super::error::ToolError;
use super::spec::ToolSpec;
use crate::client::{ClientError, ClientProvider};
use crate::response::compact_json;
use crate::types::RequestContext;

/// Future returned by a tool handler
pub type ToolFuture = BoxFuture<'static, Result<CallToolResult, ToolError>>;

/// Callable behind a tool
///
/// `Err` is reserved for failures of the server itself (no client, output
/// not serializable); API and argument problems come back as an error
/// `CallToolResult` so the agent can read them.
pub type ToolHandler = Arc<dyn Fn(RequestContext, Value) -> ToolFuture + Send + Sync>;

/// A tool definition plus its handler, as attached to a `ToolSurface`
#[derive(Clone)]
pub struct ServerTool {
    pub tool: Tool,
    pub handler: ToolHandler,
}

impl ServerTool {
    pub fn new(tool: Tool, handler: ToolHandler) -> Self {
        Self { tool, handler }
    }

    pub fn name(&self) -> &str {
        self.tool.name.as_ref()
    }

    pub async fn call(&self, ctx: RequestContext, args: Value) -> Result<CallToolResult, ToolError> {
        (self.handler)(ctx, args).await
    }
}

impl std::fmt::Debug for ServerTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerTool").field("name", &self.name()).finish()
    }
}

/// Error result readable by the agent
pub fn error_result(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

/// Build the server tool for one `ToolSpec`
pub fn api_tool(spec: &'static ToolSpec, provider: ClientProvider) -> ServerTool {
    let tool = Tool::new(spec.name, spec.description, Arc::new(spec.input_schema()));
    let handler: ToolHandler = Arc::new(move |ctx: RequestContext, args: Value| -> ToolFuture {
        Box::pin(invoke(spec, provider.clone(), ctx, args))
    });
    ServerTool::new(tool, handler)
}

async fn invoke(
    spec: &'static ToolSpec,
    provider: ClientProvider,
    ctx: RequestContext,
    args: Value,
) -> Result<CallToolResult, ToolError> {
    let client = provider(&ctx)?;

    let request = match spec.build_request(&args) {
        Ok(request) => request,
        Err(e) => return Ok(error_result(e.to_string())),
    };

    match client.execute(request, &ctx).await {
        Ok(body) => {
            let text = compact_json(&body)?;
            Ok(CallToolResult::success(vec![Content::text(text)]))
        }
        Err(ClientError::Cancelled) => Err(ToolError::Client(ClientError::Cancelled)),
        Err(e) => Ok(error_result(format!("api error: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{static_provider, unavailable_provider, HttpMethod, MockApiClient};
    use crate::tools::spec::{tool, Param};
    use rmcp::model::RawContent;
    use serde_json::json;

    static GET_DROPLET: ToolSpec = tool!(
        Get "/v2/droplets/{id}" => "droplet-get", "Get a droplet",
        params: [Param::path_id("id", "Droplet ID")],
    );

    fn text_of(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|c| match &c.raw {
                RawContent::Text(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn test_success_is_compact_json() {
        let mock = Arc::new(MockApiClient::new().with_response(
            HttpMethod::Get,
            "/v2/droplets/7",
            json!({ "droplet": { "id": 7, "name": "web" } }),
        ));
        let tool = api_tool(&GET_DROPLET, static_provider(mock.clone()));
        assert_eq!(tool.name(), "droplet-get");

        let result = tool.call(RequestContext::new(), json!({ "id": 7 })).await.unwrap();
        assert_ne!(result.is_error, Some(true));
        assert_eq!(text_of(&result), r#"{"droplet":{"id":7,"name":"web"}}"#);
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_api_error_is_tool_error() {
        let mock = Arc::new(MockApiClient::new().with_error(HttpMethod::Get, "/v2/droplets/9", 404, "not found"));
        let tool = api_tool(&GET_DROPLET, static_provider(mock));

        let result = tool.call(RequestContext::new(), json!({ "id": 9 })).await.unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).starts_with("api error:"));
    }

    #[tokio::test]
    async fn test_missing_argument_never_reaches_api() {
        let mock = Arc::new(MockApiClient::new());
        let tool = api_tool(&GET_DROPLET, static_provider(mock.clone()));

        let result = tool.call(RequestContext::new(), json!({})).await.unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "id is required");
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_client_failure_is_handler_error() {
        let tool = api_tool(&GET_DROPLET, unavailable_provider());
        let err = tool.call(RequestContext::new(), json!({ "id": 1 })).await.unwrap_err();
        assert!(err.to_string().starts_with("failed to get DigitalOcean client"));
    }

    #[tokio::test]
    async fn test_cancelled_request() {
        let tool = api_tool(&GET_DROPLET, static_provider(Arc::new(MockApiClient::new())));
        let ctx = RequestContext::new();
        ctx.cancellation.cancel();

        let err = tool.call(ctx, json!({ "id": 1 })).await.unwrap_err();
        assert!(matches!(err, ToolError::Client(ClientError::Cancelled)));
    }
}
