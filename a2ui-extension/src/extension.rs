//! Core A2UI extension helpers.
//!
//! A2UI payloads travel as A2A data parts tagged with the
//! `application/json+a2ui` mime type. Servers advertise support through an
//! [`AgentExtension`] on their card and activate it per request when the client
//! asked for it.

use a2ui_a2a::{AgentExtension, DataPart, ExtensionContext, Part};
use serde_json::{Map, Value};

pub const A2UI_EXTENSION_URI: &str = "https://a2ui.org/a2a-extension/a2ui/v0.8";

pub const MIME_TYPE_KEY: &str = "mimeType";
pub const A2UI_MIME_TYPE: &str = "application/json+a2ui";

pub const A2UI_CLIENT_CAPABILITIES_KEY: &str = "a2uiClientCapabilities";
pub const SUPPORTED_CATALOG_IDS_KEY: &str = "supportedCatalogIds";
pub const INLINE_CATALOGS_KEY: &str = "inlineCatalogs";

pub const STANDARD_CATALOG_ID: &str = "https://raw.githubusercontent.com/google/A2UI/refs/heads/main/specification/0.8/json/standard_catalog_definition.json";

pub const A2UI_EXTENSION_DESCRIPTION: &str = "Provides agent driven UI using the A2UI JSON format.";

pub const ACCEPTS_INLINE_CUSTOM_CATALOG_KEY: &str = "acceptsInlineCustomCatalog";

/// Wrap A2UI data in a data part tagged with the A2UI mime type.
pub fn create_a2ui_part(a2ui_data: Map<String, Value>) -> Part {
    let mut metadata = Map::new();
    metadata.insert(MIME_TYPE_KEY.to_string(), Value::String(A2UI_MIME_TYPE.to_string()));
    DataPart::new(a2ui_data).with_metadata(metadata).into()
}

/// Whether `part` is a data part carrying A2UI content.
pub fn is_a2ui_part(part: &Part) -> bool {
    let Part::Data(data_part) = part else {
        return false;
    };
    match data_part.metadata.as_ref() {
        Some(metadata) if !metadata.is_empty() => {
            metadata.get(MIME_TYPE_KEY).and_then(Value::as_str) == Some(A2UI_MIME_TYPE)
        }
        _ => false,
    }
}

/// The data part holding A2UI content, or `None` for anything else.
pub fn get_a2ui_data_part(part: &Part) -> Option<&DataPart> {
    if is_a2ui_part(part) { part.as_data() } else { None }
}

/// Build the extension descriptor advertised on the agent card.
///
/// `params` is only populated when inline custom catalogs are accepted; the
/// default of `false` leaves it unset.
pub fn get_a2ui_agent_extension(accepts_inline_custom_catalog: bool) -> AgentExtension {
    let mut params = Map::new();
    if accepts_inline_custom_catalog {
        params.insert(ACCEPTS_INLINE_CUSTOM_CATALOG_KEY.to_string(), Value::Bool(true));
    }

    AgentExtension {
        uri: A2UI_EXTENSION_URI.to_string(),
        description: Some(A2UI_EXTENSION_DESCRIPTION.to_string()),
        required: None,
        params: if params.is_empty() { None } else { Some(params) },
    }
}

/// Activate the A2UI extension on `context` if the client requested it.
pub fn try_activate_a2ui_extension<C>(context: &mut C) -> bool
where
    C: ExtensionContext + ?Sized,
{
    let _span = a2ui_telemetry::extension_activation_span(A2UI_EXTENSION_URI).entered();
    if context.requested_extensions().contains(A2UI_EXTENSION_URI) {
        context.add_activated_extension(A2UI_EXTENSION_URI);
        tracing::debug!(extension.uri = A2UI_EXTENSION_URI, "A2UI extension activated");
        return true;
    }
    tracing::trace!(extension.uri = A2UI_EXTENSION_URI, "A2UI extension not requested");
    false
}
