//! # parallel-web-tool
//!
//! Web search for agents through the [Parallel](https://parallel.ai) search API.
//!
//! ## Overview
//!
//! - [`ParallelWebTool`] - The `parallel_web_search` tool
//! - [`ParallelWebToolBuilder`] - API key, endpoint and search settings
//! - [`ParallelWebToolkit`] - Toolset wrapping the tool for agent wiring
//! - [`ParallelWebError`] - Configuration, validation, transport and API failures
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use parallel_web_tool::{ParallelWebTool, Tool, ToolContext};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # async fn example(ctx: Arc<dyn ToolContext>) -> Result<(), Box<dyn std::error::Error>> {
//! // Reads PARALLEL_API_KEY when no key is passed.
//! let tool = ParallelWebTool::builder().max_results(5).build()?;
//!
//! let result = tool
//!     .execute(ctx, json!({
//!         "objective": "When was the United Nations founded? Prefer UN websites.",
//!         "search_queries": ["UN founding year", "United Nations charter 1945"]
//!     }))
//!     .await?;
//! println!("{}", result.as_str().unwrap_or_default());
//! # Ok(())
//! # }
//! ```
//!
//! The tool returns the API response verbatim as a JSON string. Use
//! [`ParallelWebTool::search_structured`] for a typed [`SearchResponse`].

mod config;
mod error;
mod request;
mod response;
mod tool;
mod toolkit;

pub use config::{
    DEFAULT_MAX_CHARS_PER_RESULT, DEFAULT_MAX_RESULTS, PARALLEL_API_KEY_ENV, PARALLEL_API_URL,
    ParallelWebConfig, Processor, SearchConfig,
};
pub use error::ParallelWebError;
pub use request::{
    InputSchema, MAX_OBJECTIVE_CHARS, MAX_SEARCH_QUERIES, MIN_SEARCH_QUERIES,
    OBJECTIVE_BOUND_MESSAGE, SEARCH_QUERIES_BOUND_MESSAGE, SearchRequest, SearchRequestBody,
};
pub use response::{SearchResponse, SearchResultItem};
pub use tool::{MISSING_API_KEY_MESSAGE, ParallelWebTool, ParallelWebToolBuilder};
pub use toolkit::ParallelWebToolkit;

// Re-export core traits for convenience.
pub use parallel_web_core::{ReadonlyContext, Tool, ToolContext, Toolset};
