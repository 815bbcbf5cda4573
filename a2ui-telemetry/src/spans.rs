//! Span helpers for A2UI operations

use tracing::Span;

/// Create a span for extension negotiation on a request
///
/// # Example
/// ```
/// use a2ui_telemetry::extension_activation_span;
/// let span = extension_activation_span("https://a2ui.org/a2a-extension/a2ui/v0.8");
/// let _enter = span.enter();
/// ```
pub fn extension_activation_span(extension_uri: &str) -> Span {
    tracing::debug_span!("a2ui.extension.activate", extension.uri = extension_uri)
}

/// Create a span for splitting model output into text and A2UI messages
pub fn agent_response_span(content_len: usize) -> Span {
    tracing::debug_span!("a2ui.response.parse", content.len = content_len)
}
