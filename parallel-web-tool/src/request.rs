//! Caller input, its schema, and the wire body sent to the search endpoint.

use crate::config::{Processor, SearchConfig};
use crate::error::ParallelWebError;
use jsonschema::Validator;
use schemars::{JsonSchema, r#gen::SchemaSettings};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub const MAX_OBJECTIVE_CHARS: usize = 5000;
pub const MIN_SEARCH_QUERIES: usize = 1;
pub const MAX_SEARCH_QUERIES: usize = 5;

pub const OBJECTIVE_BOUND_MESSAGE: &str = "objective must be <= 5000 characters";
pub const SEARCH_QUERIES_BOUND_MESSAGE: &str = "search_queries must have 1..5 items";

/// Arguments accepted by `parallel_web_search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchRequest {
    /// Natural-language description of the web research goal. Include any
    /// source or freshness guidance.
    #[schemars(length(max = 5000))]
    pub objective: String,
    /// Search queries to guide the search.
    #[schemars(length(min = 1, max = 5))]
    pub search_queries: Vec<String>,
}

impl SearchRequest {
    pub fn new<I, S>(objective: impl Into<String>, search_queries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            objective: objective.into(),
            search_queries: search_queries.into_iter().map(Into::into).collect(),
        }
    }
}

/// JSON body posted to `{api_url}/search`. Caller fields come first, then
/// the configured settings; serde keeps declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequestBody<'a> {
    pub objective: &'a str,
    pub search_queries: &'a [String],
    pub max_results: u32,
    pub processor: Processor,
    pub max_chars_per_result: u32,
}

impl<'a> SearchRequestBody<'a> {
    pub fn new(request: &'a SearchRequest, config: &SearchConfig) -> Self {
        Self {
            objective: &request.objective,
            search_queries: &request.search_queries,
            max_results: config.max_results,
            processor: config.processor,
            max_chars_per_result: config.max_chars_per_result,
        }
    }
}

/// Generate an inline JSON schema (no `$schema`, `$ref` or definitions) for a
/// tool argument type.
pub(crate) fn generate_tool_schema<T>() -> Result<Value, serde_json::Error>
where
    T: JsonSchema,
{
    let settings = SchemaSettings::draft07().with(|s| {
        s.inline_subschemas = true;
        s.meta_schema = None;
    });
    let generator = schemars::r#gen::SchemaGenerator::new(settings);
    let mut schema = generator.into_root_schema_for::<T>();
    schema.schema.metadata().title = None;

    let mut value = serde_json::to_value(schema.schema)?;
    clean_schema(&mut value);
    Ok(value)
}

fn clean_schema(value: &mut Value) {
    if let Value::Object(map) = value {
        map.remove("$schema");
        map.remove("definitions");

        for (_, v) in map.iter_mut() {
            clean_schema(v);
        }
    } else if let Value::Array(arr) = value {
        for v in arr.iter_mut() {
            clean_schema(v);
        }
    }
}

/// Compiled input schema for [`SearchRequest`].
///
/// The document validator enforces the whole contract. The two bound
/// validators only exist to turn a failure into the human-readable bound
/// description callers surface to the model.
pub struct InputSchema {
    schema: Value,
    document: Validator,
    objective_bound: Validator,
    queries_bound: Validator,
}

impl InputSchema {
    pub fn new() -> Result<Self, ParallelWebError> {
        let schema = generate_tool_schema::<SearchRequest>().map_err(|e| {
            ParallelWebError::Configuration(format!("Failed to generate input schema: {e}"))
        })?;
        let document = compile(&schema)?;
        let objective_bound = compile(&json!({ "maxLength": MAX_OBJECTIVE_CHARS }))?;
        let queries_bound = compile(&json!({
            "minItems": MIN_SEARCH_QUERIES,
            "maxItems": MAX_SEARCH_QUERIES,
        }))?;

        Ok(Self { schema, document, objective_bound, queries_bound })
    }

    /// The JSON schema presented to models.
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    pub fn validate(&self, args: &Value) -> Result<(), ParallelWebError> {
        if self.document.is_valid(args) {
            return Ok(());
        }

        if let Some(objective) = args.get("objective") {
            if !self.objective_bound.is_valid(objective) {
                return Err(ParallelWebError::Validation(OBJECTIVE_BOUND_MESSAGE.to_string()));
            }
        }
        if let Some(queries) = args.get("search_queries") {
            if !self.queries_bound.is_valid(queries) {
                return Err(ParallelWebError::Validation(
                    SEARCH_QUERIES_BOUND_MESSAGE.to_string(),
                ));
            }
        }

        let detail = self
            .document
            .iter_errors(args)
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        Err(ParallelWebError::Validation(format!("Invalid search input: {detail}")))
    }

    /// Validate raw tool arguments and decode them.
    pub fn parse(&self, args: Value) -> Result<SearchRequest, ParallelWebError> {
        self.validate(&args)?;
        serde_json::from_value(args)
            .map_err(|e| ParallelWebError::Validation(format!("Invalid search input: {e}")))
    }

    /// Validate an already typed request.
    pub fn check(&self, request: &SearchRequest) -> Result<(), ParallelWebError> {
        let value = serde_json::to_value(request)
            .map_err(|e| ParallelWebError::Validation(format!("Invalid search input: {e}")))?;
        self.validate(&value)
    }
}

fn compile(schema: &Value) -> Result<Validator, ParallelWebError> {
    Validator::new(schema).map_err(|e| {
        ParallelWebError::Configuration(format!("Invalid input schema: {e}"))
    })
}
