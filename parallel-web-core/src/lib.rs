//! # parallel-web-core
//!
//! Capability traits and error types shared by the Parallel web search crates.
//!
//! ## Overview
//!
//! - [`Tool`] / [`Toolset`] - What a host agent framework invokes
//! - [`ToolDeclaration`] - Name, description and argument schema of a tool
//! - [`ToolContext`] - Per-call identifiers handed to [`Tool::execute`]
//! - [`CoreError`] / [`Result`] - Unified error handling
//!
//! ### Tool
//!
//! ```rust,ignore
//! #[async_trait]
//! pub trait Tool: Send + Sync {
//!     fn name(&self) -> &str;
//!     fn description(&self) -> &str;
//!     async fn execute(&self, ctx: Arc<dyn ToolContext>, args: Value) -> Result<Value>;
//! }
//! ```

pub mod error;
pub mod tool;

pub use error::{CoreError, Result};
pub use tool::{ReadonlyContext, Tool, ToolContext, ToolDeclaration, Toolset};
