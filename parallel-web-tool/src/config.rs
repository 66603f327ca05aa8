//! Configuration types for the Parallel search tool.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default Parallel API base URL.
pub const PARALLEL_API_URL: &str = "https://api.parallel.ai/v1beta";

/// Environment variable consulted when no API key is passed explicitly.
pub const PARALLEL_API_KEY_ENV: &str = "PARALLEL_API_KEY";

pub const DEFAULT_MAX_RESULTS: u32 = 10;
pub const DEFAULT_MAX_CHARS_PER_RESULT: u32 = 1500;

/// Search tier offered by the Parallel API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Processor {
    #[default]
    Base,
    Pro,
}

impl Processor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Processor::Base => "base",
            Processor::Pro => "pro",
        }
    }
}

impl fmt::Display for Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Processor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base" => Ok(Processor::Base),
            "pro" => Ok(Processor::Pro),
            other => Err(format!("unknown processor '{other}', expected 'base' or 'pro'")),
        }
    }
}

/// Non-secret search settings merged into every request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of results returned by the API.
    pub max_results: u32,
    /// Search tier.
    pub processor: Processor,
    /// Upper bound on excerpt characters per result.
    pub max_chars_per_result: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            processor: Processor::default(),
            max_chars_per_result: DEFAULT_MAX_CHARS_PER_RESULT,
        }
    }
}

impl SearchConfig {
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_processor(mut self, processor: Processor) -> Self {
        self.processor = processor;
        self
    }

    pub fn with_max_chars_per_result(mut self, max_chars_per_result: u32) -> Self {
        self.max_chars_per_result = max_chars_per_result;
        self
    }
}

/// Fully resolved tool configuration. Built once by
/// [`ParallelWebToolBuilder`](crate::ParallelWebToolBuilder) and never
/// mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct ParallelWebConfig {
    api_key: String,
    api_url: String,
    search: SearchConfig,
}

impl ParallelWebConfig {
    pub(crate) fn new(api_key: String, api_url: String, search: SearchConfig) -> Self {
        Self { api_key, api_url, search }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn search(&self) -> &SearchConfig {
        &self.search
    }

    /// Full URL of the search endpoint.
    pub fn search_url(&self) -> String {
        format!("{}/search", self.api_url.trim_end_matches('/'))
    }
}

impl fmt::Debug for ParallelWebConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParallelWebConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .field("search", &self.search)
            .finish()
    }
}
