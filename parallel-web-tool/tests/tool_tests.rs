use parallel_web_core::CoreError;
use parallel_web_tool::{
    ParallelWebTool, ParallelWebToolkit, ReadonlyContext, SearchConfig, Tool, ToolContext,
    Toolset,
};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct MockToolContext;

impl ReadonlyContext for MockToolContext {
    fn invocation_id(&self) -> &str { "inv-1" }
    fn agent_name(&self) -> &str { "test-agent" }
}

impl ToolContext for MockToolContext {
    fn function_call_id(&self) -> &str { "call-1" }
}

fn ctx() -> Arc<dyn ToolContext> {
    Arc::new(MockToolContext) as Arc<dyn ToolContext>
}

fn tool_with_url(url: &str) -> ParallelWebTool {
    ParallelWebTool::builder().api_key("test-key").api_url(url).build_with_env(|_| None).unwrap()
}

#[test]
fn test_parallel_web_tool_metadata() {
    let tool = ParallelWebTool::new("test-key").unwrap();
    assert_eq!(tool.name(), "parallel_web_search");
    assert_eq!(
        tool.description(),
        "Research current events; returns ranked, compressed excerpts from multiple sites. Provide a clear objective and a few search queries."
    );
    assert!(!tool.is_long_running());
}

#[test]
fn test_parallel_web_tool_declaration() {
    let tool = ParallelWebTool::new("test-key").unwrap();
    let declaration = tool.declaration();
    assert_eq!(declaration.name, "parallel_web_search");

    let params = declaration.parameters.unwrap();
    assert_eq!(params["properties"]["objective"]["type"], "string");
    assert_eq!(params["properties"]["objective"]["maxLength"], 5000);
    assert_eq!(params["properties"]["search_queries"]["type"], "array");
    assert_eq!(params["properties"]["search_queries"]["minItems"], 1);
    assert_eq!(params["properties"]["search_queries"]["maxItems"], 5);
}

#[tokio::test]
async fn test_execute_returns_json_string() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foo": "bar"})))
        .expect(1)
        .mount(&server)
        .await;

    let tool = tool_with_url(&server.uri());
    let result = tool
        .execute(ctx(), json!({"objective": "test", "search_queries": ["x", "y"]}))
        .await
        .unwrap();
    assert_eq!(result, json!(r#"{"foo":"bar"}"#));
}

#[tokio::test]
async fn test_execute_validation_error() {
    let tool = ParallelWebTool::new("test-key").unwrap();
    let err = tool
        .execute(ctx(), json!({"objective": "o", "search_queries": ["a", "b", "c", "d", "e", "f"]}))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Tool(_)));
    assert_eq!(err.to_string(), "Tool error: search_queries must have 1..5 items");
}

#[tokio::test]
async fn test_execute_missing_objective() {
    let tool = ParallelWebTool::new("test-key").unwrap();
    let err = tool.execute(ctx(), json!({"search_queries": ["a"]})).await.unwrap_err();
    assert!(err.to_string().contains("Invalid search input"), "unexpected: {err}");
}

#[tokio::test]
async fn test_execute_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "Boom"})))
        .mount(&server)
        .await;

    let tool = tool_with_url(&server.uri());
    let err = tool
        .execute(ctx(), json!({"objective": "o", "search_queries": ["a"]}))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Tool error: Parallel API request failed (400): Boom");
}

#[tokio::test]
async fn test_toolkit_exposes_search_tool() {
    let toolkit = ParallelWebToolkit::with_config(
        "test-key",
        SearchConfig::default().with_max_results(3),
    )
    .unwrap();
    assert_eq!(toolkit.name(), "parallel_web");
    assert_eq!(toolkit.search_tool().config().search().max_results, 3);

    let readonly = Arc::new(MockToolContext) as Arc<dyn ReadonlyContext>;
    let tools = toolkit.tools(readonly).await.unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name(), "parallel_web_search");
}
