//! Span helpers for tool operations

use tracing::Span;

/// Create a span for tool execution
///
/// # Example
/// ```
/// use parallel_web_telemetry::tool_execute_span;
/// let span = tool_execute_span("parallel_web_search");
/// let _enter = span.enter();
/// ```
pub fn tool_execute_span(tool_name: &str) -> Span {
    tracing::info_span!(
        "tool.execute",
        tool.name = tool_name,
        http.status_code = tracing::field::Empty,
        otel.kind = "internal"
    )
}

/// Create a span for an outbound HTTP call.
pub fn http_request_span(method: &str, url: &str) -> Span {
    tracing::debug_span!(
        "http.request",
        http.method = method,
        http.url = url,
        otel.kind = "client"
    )
}

/// Record the response status on the current span.
pub fn record_status_code(status: u16) {
    Span::current().record("http.status_code", status);
}
