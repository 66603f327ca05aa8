use parallel_web_core::CoreError;

/// Failures produced by the Parallel search tool.
#[derive(Debug, thiserror::Error)]
pub enum ParallelWebError {
    /// Missing API key or unusable settings at construction time.
    #[error("{0}")]
    Configuration(String),

    /// Caller input violates the tool's input schema. No request was sent.
    #[error("{0}")]
    Validation(String),

    /// The response body could not be parsed as JSON, whatever the status.
    #[error("Parallel API returned non-JSON (status {status}).")]
    Transport { status: u16 },

    /// Non-2xx status with a JSON body.
    #[error("Parallel API request failed ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request never produced a response.
    #[error("Parallel API request could not be sent: {0}")]
    Request(#[from] reqwest::Error),

    /// A successful payload did not match [`SearchResponse`](crate::SearchResponse).
    #[error("Parallel API response has an unexpected shape: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ParallelWebError {
    /// HTTP status attached to the failure, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ParallelWebError::Transport { status } | ParallelWebError::Api { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

impl From<ParallelWebError> for CoreError {
    fn from(err: ParallelWebError) -> Self {
        match err {
            ParallelWebError::Configuration(message) => CoreError::Config(message),
            other => CoreError::Tool(other.to_string()),
        }
    }
}
