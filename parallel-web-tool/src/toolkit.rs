use crate::config::SearchConfig;
use crate::error::ParallelWebError;
use crate::tool::ParallelWebTool;
use async_trait::async_trait;
use parallel_web_core::{ReadonlyContext, Result, Tool, Toolset};
use std::sync::Arc;

/// Toolset exposing the Parallel tools to an agent.
///
/// All tools share one configured [`ParallelWebTool`].
pub struct ParallelWebToolkit {
    search: Arc<ParallelWebTool>,
}

impl ParallelWebToolkit {
    pub fn new(api_key: impl Into<String>) -> std::result::Result<Self, ParallelWebError> {
        Ok(Self::from_tool(ParallelWebTool::new(api_key)?))
    }

    pub fn from_env() -> std::result::Result<Self, ParallelWebError> {
        Ok(Self::from_tool(ParallelWebTool::from_env()?))
    }

    pub fn with_config(
        api_key: impl Into<String>,
        config: SearchConfig,
    ) -> std::result::Result<Self, ParallelWebError> {
        let tool = ParallelWebTool::builder().api_key(api_key).search_config(config).build()?;
        Ok(Self::from_tool(tool))
    }

    pub fn from_tool(tool: ParallelWebTool) -> Self {
        Self { search: Arc::new(tool) }
    }

    pub fn search_tool(&self) -> Arc<ParallelWebTool> {
        Arc::clone(&self.search)
    }
}

#[async_trait]
impl Toolset for ParallelWebToolkit {
    fn name(&self) -> &str {
        "parallel_web"
    }

    async fn tools(&self, _ctx: Arc<dyn ReadonlyContext>) -> Result<Vec<Arc<dyn Tool>>> {
        Ok(vec![self.search.clone() as Arc<dyn Tool>])
    }
}
