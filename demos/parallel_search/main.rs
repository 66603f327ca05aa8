//! Run one Parallel web search from the command line.
//!
//! ```text
//! PARALLEL_API_KEY=... cargo run -p parallel-web-demos --bin parallel_search -- \
//!     "When was the UN founded? Prefer UN websites." "UN founding year" "United Nations charter"
//! ```

use anyhow::Result;
use clap::Parser;
use parallel_web_core::{ReadonlyContext, Tool, ToolContext};
use parallel_web_tool::{ParallelWebTool, Processor, SearchRequest};
use serde_json::json;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(about = "Search the web through the Parallel API")]
struct Args {
    /// What the research should find out
    objective: String,

    /// One to five search queries
    #[arg(required = true, num_args = 1..=5)]
    queries: Vec<String>,

    /// Search tier: base or pro
    #[arg(long, default_value = "base")]
    processor: Processor,

    #[arg(long, default_value_t = 10)]
    max_results: u32,

    /// Decode the payload and print one line per result
    #[arg(long)]
    structured: bool,
}

struct CliContext;

impl ReadonlyContext for CliContext {
    fn invocation_id(&self) -> &str {
        "cli"
    }
    fn agent_name(&self) -> &str {
        "parallel_search_demo"
    }
}

impl ToolContext for CliContext {
    fn function_call_id(&self) -> &str {
        "cli-call"
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    parallel_web_telemetry::init_telemetry("parallel-search-demo")
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let args = Args::parse();
    let tool = ParallelWebTool::builder()
        .processor(args.processor)
        .max_results(args.max_results)
        .build()?;

    if args.structured {
        let request = SearchRequest::new(args.objective, args.queries);
        let response = tool.search_structured(&request).await?;
        tracing::info!(
            search_id = %response.search_id,
            results = response.results.len(),
            "Search finished"
        );
        for result in response.results {
            println!("{} - {}", result.title.as_deref().unwrap_or("(untitled)"), result.url);
            for excerpt in result.excerpts {
                println!("    {excerpt}");
            }
        }
        return Ok(());
    }

    let output = tool
        .execute(
            Arc::new(CliContext),
            json!({ "objective": args.objective, "search_queries": args.queries }),
        )
        .await?;
    println!("{}", output.as_str().unwrap_or_default());

    Ok(())
}
