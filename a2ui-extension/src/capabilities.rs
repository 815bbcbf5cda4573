//! A2UI client capabilities sent in message metadata.
//!
//! Clients describe which component catalogs they can render under the
//! `a2uiClientCapabilities` metadata key:
//!
//! ```json
//! {
//!   "a2uiClientCapabilities": {
//!     "supportedCatalogIds": ["https://.../standard_catalog_definition.json"],
//!     "inlineCatalogs": [{ "catalogId": "custom", "components": {} }]
//!   }
//! }
//! ```

use a2ui_a2a::Message;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{A2uiError, Result};
use crate::extension::{
    A2UI_CLIENT_CAPABILITIES_KEY, INLINE_CATALOGS_KEY, STANDARD_CATALOG_ID,
    SUPPORTED_CATALOG_IDS_KEY,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct A2uiClientCapabilities {
    #[serde(rename = "supportedCatalogIds", default)]
    pub supported_catalog_ids: Vec<String>,
    #[serde(rename = "inlineCatalogs", default)]
    pub inline_catalogs: Vec<Value>,
}

impl A2uiClientCapabilities {
    /// Read capabilities from a metadata mapping.
    ///
    /// Returns `Ok(None)` when the client sent none.
    pub fn from_metadata(metadata: &Map<String, Value>) -> Result<Option<Self>> {
        let Some(raw) = metadata.get(A2UI_CLIENT_CAPABILITIES_KEY) else {
            return Ok(None);
        };
        if !raw.is_object() {
            return Err(A2uiError::InvalidCapabilities(format!(
                "{} must be an object",
                A2UI_CLIENT_CAPABILITIES_KEY
            )));
        }
        serde_json::from_value(raw.clone())
            .map(Some)
            .map_err(|e| A2uiError::InvalidCapabilities(e.to_string()))
    }

    /// Whether the client can render components from `catalog_id`.
    ///
    /// A client that lists no catalogs is assumed to support the standard one.
    pub fn supports_catalog(&self, catalog_id: &str) -> bool {
        if self.supported_catalog_ids.is_empty() {
            return catalog_id == STANDARD_CATALOG_ID;
        }
        self.supported_catalog_ids.iter().any(|id| id == catalog_id)
    }

    pub fn supports_standard_catalog(&self) -> bool {
        self.supports_catalog(STANDARD_CATALOG_ID)
    }

    pub fn has_inline_catalogs(&self) -> bool {
        !self.inline_catalogs.is_empty()
    }

    /// The metadata fragment a client attaches to its messages.
    pub fn to_metadata(&self) -> Map<String, Value> {
        let mut caps = Map::new();
        caps.insert(
            SUPPORTED_CATALOG_IDS_KEY.to_string(),
            Value::Array(self.supported_catalog_ids.iter().cloned().map(Value::String).collect()),
        );
        if self.has_inline_catalogs() {
            caps.insert(INLINE_CATALOGS_KEY.to_string(), Value::Array(self.inline_catalogs.clone()));
        }

        let mut metadata = Map::new();
        metadata.insert(A2UI_CLIENT_CAPABILITIES_KEY.to_string(), Value::Object(caps));
        metadata
    }
}

/// Client capabilities attached to `message`, if any.
pub fn client_capabilities(message: &Message) -> Result<Option<A2uiClientCapabilities>> {
    match message.metadata.as_ref() {
        Some(metadata) => A2uiClientCapabilities::from_metadata(metadata),
        None => Ok(None),
    }
}
