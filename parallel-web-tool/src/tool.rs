use crate::config::{
    PARALLEL_API_KEY_ENV, PARALLEL_API_URL, ParallelWebConfig, Processor, SearchConfig,
};
use crate::error::ParallelWebError;
use crate::request::{InputSchema, SearchRequest, SearchRequestBody};
use crate::response::{SearchResponse, interpret};
use async_trait::async_trait;
use parallel_web_core::{Result, Tool, ToolContext};
use parallel_web_telemetry::{
    Instrument, http_request_span, record_status_code, tool_execute_span,
};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

const TOOL_NAME: &str = "parallel_web_search";
const TOOL_DESCRIPTION: &str = "Research current events; returns ranked, compressed excerpts from multiple sites. Provide a clear objective and a few search queries.";

/// Message returned when no API key can be resolved.
pub const MISSING_API_KEY_MESSAGE: &str =
    "No Parallel API key found. Set \"PARALLEL_API_KEY\" or pass `apiKey`.";

/// Web search backed by the Parallel search API.
///
/// Each call validates the input, posts one request to `{api_url}/search`
/// and returns the response body verbatim as a JSON string.
///
/// # Example
///
/// ```rust,no_run
/// use parallel_web_tool::{ParallelWebTool, Processor, SearchRequest};
///
/// # async fn example() -> Result<(), parallel_web_tool::ParallelWebError> {
/// let tool = ParallelWebTool::builder()
///     .api_key("your-api-key")
///     .processor(Processor::Pro)
///     .build()?;
///
/// let json = tool
///     .search(&SearchRequest::new("When was the UN founded?", ["UN founding year"]))
///     .await?;
/// println!("{json}");
/// # Ok(())
/// # }
/// ```
pub struct ParallelWebTool {
    config: ParallelWebConfig,
    input: InputSchema,
    client: Client,
}

impl ParallelWebTool {
    pub fn builder() -> ParallelWebToolBuilder {
        ParallelWebToolBuilder::new()
    }

    /// Create a tool with default settings and an explicit API key.
    pub fn new(api_key: impl Into<String>) -> std::result::Result<Self, ParallelWebError> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a tool with default settings, reading the key from `PARALLEL_API_KEY`.
    pub fn from_env() -> std::result::Result<Self, ParallelWebError> {
        Self::builder().build()
    }

    pub fn config(&self) -> &ParallelWebConfig {
        &self.config
    }

    /// JSON schema of the accepted arguments.
    pub fn input_schema(&self) -> &Value {
        self.input.schema()
    }

    /// Run a search and return the response body as a compact JSON string.
    pub async fn search(
        &self,
        request: &SearchRequest,
    ) -> std::result::Result<String, ParallelWebError> {
        let payload = self.search_value(request).await?;
        serde_json::to_string(&payload).map_err(ParallelWebError::Decode)
    }

    /// Run a search and decode the payload into [`SearchResponse`].
    pub async fn search_structured(
        &self,
        request: &SearchRequest,
    ) -> std::result::Result<SearchResponse, ParallelWebError> {
        let payload = self.search_value(request).await?;
        serde_json::from_value(payload).map_err(ParallelWebError::Decode)
    }

    async fn search_value(
        &self,
        request: &SearchRequest,
    ) -> std::result::Result<Value, ParallelWebError> {
        self.input.check(request)?;

        let body = SearchRequestBody::new(request, self.config.search());
        let url = self.config.search_url();

        debug!(
            url = %url,
            queries = body.search_queries.len(),
            processor = %body.processor,
            "Sending Parallel search request"
        );

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header("x-api-key", self.config.api_key())
            .json(&body)
            .send()
            .instrument(http_request_span("POST", &url))
            .await?;

        let status = response.status();
        record_status_code(status.as_u16());
        debug!(status = status.as_u16(), "Received Parallel search response");

        let bytes = response.bytes().await.ok();
        interpret(status, bytes.as_deref())
    }

    async fn run(&self, ctx: Arc<dyn ToolContext>, args: Value) -> Result<Value> {
        debug!(
            invocation_id = ctx.invocation_id(),
            function_call_id = ctx.function_call_id(),
            "Executing Parallel web search"
        );
        let request = self.input.parse(args)?;
        let json = self.search(&request).await?;
        Ok(Value::String(json))
    }
}

#[async_trait]
impl Tool for ParallelWebTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        TOOL_DESCRIPTION
    }

    fn parameters_schema(&self) -> Option<Value> {
        Some(self.input.schema().clone())
    }

    async fn execute(&self, ctx: Arc<dyn ToolContext>, args: Value) -> Result<Value> {
        self.run(ctx, args).instrument(tool_execute_span(TOOL_NAME)).await
    }
}

/// Builder for [`ParallelWebTool`].
///
/// The API key is resolved once, in [`build`](Self::build): the explicit key
/// wins, then `PARALLEL_API_KEY`. Nothing reads the environment after that.
#[derive(Default)]
pub struct ParallelWebToolBuilder {
    api_key: Option<String>,
    api_url: Option<String>,
    search: SearchConfig,
    client: Option<Client>,
}

impl ParallelWebToolBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Base URL; `/search` is appended. Defaults to [`PARALLEL_API_URL`].
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Replace all search settings at once.
    pub fn search_config(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.search.max_results = max_results;
        self
    }

    pub fn processor(mut self, processor: Processor) -> Self {
        self.search.processor = processor;
        self
    }

    pub fn max_chars_per_result(mut self, max_chars_per_result: u32) -> Self {
        self.search.max_chars_per_result = max_chars_per_result;
        self
    }

    /// Use a preconfigured HTTP client (proxies, custom TLS).
    pub fn http_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build, falling back to the process environment for the API key.
    pub fn build(self) -> std::result::Result<ParallelWebTool, ParallelWebError> {
        self.build_with_env(|name| std::env::var(name).ok())
    }

    /// Build, falling back to `lookup` for the API key.
    pub fn build_with_env<F>(
        self,
        lookup: F,
    ) -> std::result::Result<ParallelWebTool, ParallelWebError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .or_else(|| lookup(PARALLEL_API_KEY_ENV).filter(|key| !key.is_empty()))
            .ok_or_else(|| {
                ParallelWebError::Configuration(MISSING_API_KEY_MESSAGE.to_string())
            })?;

        if self.search.max_results == 0 {
            return Err(ParallelWebError::Configuration(
                "max_results must be a positive integer".to_string(),
            ));
        }
        if self.search.max_chars_per_result == 0 {
            return Err(ParallelWebError::Configuration(
                "max_chars_per_result must be a positive integer".to_string(),
            ));
        }

        let api_url = self.api_url.unwrap_or_else(|| PARALLEL_API_URL.to_string());
        let client = match self.client {
            Some(client) => client,
            None => Client::builder().build().map_err(|e| {
                ParallelWebError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?,
        };

        Ok(ParallelWebTool {
            config: ParallelWebConfig::new(api_key, api_url, self.search),
            input: InputSchema::new()?,
            client,
        })
    }
}
