use std::collections::BTreeSet;

use crate::types::Message;

/// Extension negotiation state for the request being served.
///
/// Host frameworks implement this on whatever carries per-request state; the
/// A2UI helpers only need to read what the client asked for and record what the
/// server agreed to.
pub trait ExtensionContext {
    /// Extension URIs the client requested.
    fn requested_extensions(&self) -> &BTreeSet<String>;

    /// Mark an extension as active for the response.
    fn add_activated_extension(&mut self, uri: &str);

    fn is_extension_requested(&self, uri: &str) -> bool {
        self.requested_extensions().contains(uri)
    }
}

/// Request Context.
///
/// Holds the incoming message together with the requested and activated
/// extension sets.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    message: Option<Message>,
    requested_extensions: BTreeSet<String>,
    activated_extensions: BTreeSet<String>,
}

impl RequestContext {
    pub fn new(message: Option<Message>) -> Self {
        Self { message, ..Default::default() }
    }

    pub fn with_requested_extensions<I, S>(mut self, uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requested_extensions.extend(uris.into_iter().map(Into::into));
        self
    }

    /// The incoming `Message` object from the request, if available.
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn activated_extensions(&self) -> &BTreeSet<String> {
        &self.activated_extensions
    }
}

impl ExtensionContext for RequestContext {
    fn requested_extensions(&self) -> &BTreeSet<String> {
        &self.requested_extensions
    }

    fn add_activated_extension(&mut self, uri: &str) {
        if self.activated_extensions.insert(uri.to_string()) {
            tracing::debug!(extension.uri = uri, "extension activated");
        }
    }
}
