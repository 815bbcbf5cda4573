use a2ui_a2a::{AgentCapabilities, AgentExtension};

use crate::extension::{A2UI_EXTENSION_URI, STANDARD_CATALOG_ID, get_a2ui_agent_extension};
use crate::response::{AgentResponse, DEFAULT_RESPONSE_DELIMITER, parse_agent_response};

/// Server-side configuration for the A2UI extension.
#[derive(Clone, Debug)]
pub struct A2uiExtensionConfig {
    /// Whether clients may send their own catalogs inline (default: false)
    pub accepts_inline_custom_catalog: bool,
    /// Marker separating reply text from A2UI JSON in model output
    pub response_delimiter: String,
    /// Catalogs this agent generates components for (default: the standard catalog)
    pub supported_catalog_ids: Vec<String>,
}

impl Default for A2uiExtensionConfig {
    fn default() -> Self {
        Self {
            accepts_inline_custom_catalog: false,
            response_delimiter: DEFAULT_RESPONSE_DELIMITER.to_string(),
            supported_catalog_ids: vec![STANDARD_CATALOG_ID.to_string()],
        }
    }
}

impl A2uiExtensionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inline_custom_catalog(mut self, accepts: bool) -> Self {
        self.accepts_inline_custom_catalog = accepts;
        self
    }

    /// An empty delimiter disables splitting; every response is plain text.
    pub fn with_response_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.response_delimiter = delimiter.into();
        self
    }

    pub fn with_supported_catalog_ids(mut self, catalog_ids: Vec<String>) -> Self {
        self.supported_catalog_ids = catalog_ids;
        self
    }

    pub fn agent_extension(&self) -> AgentExtension {
        get_a2ui_agent_extension(self.accepts_inline_custom_catalog)
    }

    /// Add the A2UI descriptor to `capabilities` unless it is already listed.
    pub fn advertise(&self, capabilities: &mut AgentCapabilities) {
        if capabilities.find_extension(A2UI_EXTENSION_URI).is_some() {
            return;
        }
        capabilities.extensions.get_or_insert_with(Vec::new).push(self.agent_extension());
    }

    pub fn parse_response(&self, content: &str) -> AgentResponse {
        parse_agent_response(content, &self.response_delimiter)
    }
}
