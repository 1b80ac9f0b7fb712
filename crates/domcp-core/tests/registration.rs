//! End-to-end registration: tokens in, callable tools out

use std::collections::HashSet;
use std::sync::Arc;

use domcp_core::client::{static_provider, token_provider, HttpMethod, MockApiClient};
use domcp_core::registry::{self, ServiceName};
use domcp_core::{
    CapabilityGroup, MemoryLogger, MemorySecretStore, NoOpLogger, RegistryError, RequestContext, ToolCall,
    ToolServer, API_TOKEN_KEY,
};
use serde_json::{json, Value};

fn server() -> ToolServer {
    ToolServer::new(Arc::new(NoOpLogger::new()))
}

#[tokio::test]
async fn registered_tool_calls_the_api() {
    let mock = Arc::new(MockApiClient::new().with_response(
        HttpMethod::Get,
        "/v2/account",
        json!({ "account": { "email": "sammy@example.com", "status": "active" } }),
    ));
    let server = server();
    registry::register(&server, &static_provider(mock.clone()), &NoOpLogger::new(), &["accounts"]).unwrap();

    let result = server
        .execute_tool_call(&ToolCall::new("1", "account-get-information", json!({})), RequestContext::new())
        .await;
    assert!(!result.is_error, "{}", result.content);
    assert_eq!(result.call_id, "1");

    let body: Value = serde_json::from_str(&result.content).unwrap();
    assert_eq!(body["account"]["status"], "active");
    assert!(!result.content.contains(' '), "output is not compact: {}", result.content);

    let request = mock.last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.path, "/v2/account");
}

#[tokio::test]
async fn action_tools_post_fixed_type() {
    let mock = Arc::new(MockApiClient::new());
    let server = server();
    registry::register(&server, &static_provider(mock.clone()), &NoOpLogger::new(), &["droplets:actions"]).unwrap();

    let result = server
        .execute_tool_call(
            &ToolCall::new("2", "droplet-resize", json!({ "id": 1234, "size": "s-2vcpu-4gb" })),
            RequestContext::new(),
        )
        .await;
    assert!(!result.is_error, "{}", result.content);

    let request = mock.last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.path, "/v2/droplets/1234/actions");
    assert_eq!(request.body, Some(json!({ "type": "resize", "size": "s-2vcpu-4gb" })));
}

#[tokio::test]
async fn api_errors_reach_the_agent() {
    let mock = Arc::new(MockApiClient::new().with_error(
        HttpMethod::Get,
        "/v2/databases/abc",
        404,
        "The resource you were accessing could not be found.",
    ));
    let server = server();
    registry::register(&server, &static_provider(mock), &NoOpLogger::new(), &["databases"]).unwrap();

    let result = server
        .execute_tool_call(&ToolCall::new("3", "db-cluster-get", json!({ "id": "abc" })), RequestContext::new())
        .await;
    assert!(result.is_error);
    assert!(result.content.starts_with("api error:"));
    assert!(result.content.contains("could not be found"));
}

#[tokio::test]
async fn missing_token_fails_the_call_not_registration() {
    let provider = token_provider("http://127.0.0.1:9", Arc::new(MemorySecretStore::new())).unwrap();
    let server = server();
    registry::register(&server, &provider, &NoOpLogger::new(), &["doks"]).unwrap();
    assert!(server.contains("doks-list-clusters"));

    let result = server
        .execute_tool_call(&ToolCall::new("4", "doks-list-clusters", json!({})), RequestContext::new())
        .await;
    assert!(result.is_error);
    assert!(result.content.starts_with("failed to get DigitalOcean client"));
}

#[tokio::test]
async fn request_token_or_store_token_builds_client() {
    let store = Arc::new(MemorySecretStore::with_secret(API_TOKEN_KEY, "dop_v1_test"));
    let provider = token_provider("http://127.0.0.1:9", store).unwrap();
    assert!(provider(&RequestContext::new()).is_ok());

    let empty = token_provider("http://127.0.0.1:9", Arc::new(MemorySecretStore::new())).unwrap();
    assert!(empty(&RequestContext::new().with_api_token("dop_v1_request")).is_ok());
}

#[test]
fn unknown_service_leaves_server_empty() {
    let server = server();
    let logger = MemoryLogger::new();
    let err = registry::register(
        &server,
        &static_provider(Arc::new(MockApiClient::new())),
        &logger,
        &["droplets:all", "kubernetes"],
    )
    .unwrap_err();

    match &err {
        RegistryError::UnknownService { service, supported } => {
            assert_eq!(service, "kubernetes");
            assert!(supported.contains(&"doks".to_string()));
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(server.is_empty());
}

#[test]
fn everything_registers_without_duplicates() {
    let tokens: Vec<String> = ServiceName::ALL.iter().map(|s| format!("{}:all", s)).collect();
    let server = server();
    let report = registry::register(
        &server,
        &static_provider(Arc::new(MockApiClient::new())),
        &NoOpLogger::new(),
        &tokens,
    )
    .unwrap();

    assert_eq!(report.groups.len(), CapabilityGroup::ALL.len());
    assert_eq!(server.len(), report.tool_count);

    let names = server.tool_names();
    let unique: HashSet<&String> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn default_registration_is_small() {
    let provider = static_provider(Arc::new(MockApiClient::new()));

    let basic = server();
    let none: [&str; 0] = [];
    registry::register(&basic, &provider, &NoOpLogger::new(), &none).unwrap();

    let full = server();
    let all: Vec<String> = ServiceName::ALL.iter().map(|s| format!("{}:all", s)).collect();
    registry::register(&full, &provider, &NoOpLogger::new(), &all).unwrap();

    assert!(basic.len() < full.len());
    for name in basic.tool_names() {
        assert!(full.contains(&name), "{} missing from the full set", name);
    }
    assert!(basic.contains("region-list"));
    assert!(!basic.contains("droplet-resize"));
}

#[test]
fn tool_schemas_are_objects() {
    let server = server();
    registry::register(
        &server,
        &static_provider(Arc::new(MockApiClient::new())),
        &NoOpLogger::new(),
        &["networking:all"],
    )
    .unwrap();

    for tool in server.list_tools() {
        assert_eq!(tool.input_schema.get("type"), Some(&json!("object")), "{}", tool.name);
        assert!(tool.description.is_some());
    }

    let create = server.get("domain-record-create").unwrap();
    let required = create.tool.input_schema.get("required").unwrap();
    assert!(required.as_array().unwrap().contains(&json!("domain_name")));
}
