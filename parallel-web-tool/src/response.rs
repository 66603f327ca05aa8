//! Interpreting responses from the search endpoint.

use crate::error::ParallelWebError;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Typed view of a successful search payload.
///
/// The tool itself returns the payload verbatim; this type is for Rust
/// callers that want structured access via
/// [`ParallelWebTool::search_structured`](crate::ParallelWebTool::search_structured).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub search_id: String,
    #[serde(default)]
    pub results: Vec<SearchResultItem>,
}

/// One ranked source with its compressed excerpts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub excerpts: Vec<String>,
}

/// Map a status and raw body to the payload or a failure.
///
/// `body` is `None` when reading the body failed; that is treated the same
/// as a body that is not JSON. The JSON check runs before the status check.
pub(crate) fn interpret(
    status: StatusCode,
    body: Option<&[u8]>,
) -> Result<Value, ParallelWebError> {
    let payload = body
        .and_then(|bytes| serde_json::from_slice::<Value>(bytes).ok())
        .ok_or(ParallelWebError::Transport { status: status.as_u16() })?;

    if !status.is_success() {
        let message = match payload.get("error") {
            Some(Value::String(message)) => message.clone(),
            Some(Value::Null) | None => {
                status.canonical_reason().unwrap_or("Unknown Status").to_string()
            }
            Some(other) => other.to_string(),
        };
        return Err(ParallelWebError::Api { status: status.as_u16(), message });
    }

    Ok(payload)
}
