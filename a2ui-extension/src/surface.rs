//! Batched A2UI surface parts.
//!
//! Renderers that consume a whole batch of A2UI messages at once expect them
//! wrapped as `{"messages": [...]}` with an extra `activityType` metadata entry.

use a2ui_a2a::{DataPart, Part};
use serde_json::{Map, Value};

use crate::extension::{A2UI_MIME_TYPE, MIME_TYPE_KEY};

pub const ACTIVITY_TYPE_KEY: &str = "activityType";
pub const A2UI_ACTIVITY_TYPE: &str = "a2ui-surface";
pub const MESSAGES_KEY: &str = "messages";

/// Wrap a batch of A2UI messages in a single surface part.
pub fn create_a2ui_surface_part(messages: Vec<Value>) -> Part {
    let mut data = Map::new();
    data.insert(MESSAGES_KEY.to_string(), Value::Array(messages));

    let mut metadata = Map::new();
    metadata.insert(MIME_TYPE_KEY.to_string(), Value::String(A2UI_MIME_TYPE.to_string()));
    metadata.insert(ACTIVITY_TYPE_KEY.to_string(), Value::String(A2UI_ACTIVITY_TYPE.to_string()));

    DataPart::new(data).with_metadata(metadata).into()
}

/// The A2UI messages carried by a data part.
///
/// A `messages` array yields its elements; any other payload is a single message.
pub fn a2ui_messages(part: &DataPart) -> Vec<Value> {
    match part.data.get(MESSAGES_KEY) {
        Some(Value::Array(messages)) => messages.clone(),
        _ => vec![Value::Object(part.data.clone())],
    }
}

/// Whether the part is tagged as a batched surface.
pub fn is_surface_part(part: &DataPart) -> bool {
    part.metadata_value(ACTIVITY_TYPE_KEY).and_then(Value::as_str) == Some(A2UI_ACTIVITY_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::{create_a2ui_part, get_a2ui_data_part, is_a2ui_part};
    use serde_json::json;

    #[test]
    fn surface_part_is_a2ui() {
        let part = create_a2ui_surface_part(vec![
            json!({"surfaceUpdate": {"surfaceId": "main", "components": []}}),
            json!({"beginRendering": {"surfaceId": "main", "root": "root"}}),
        ]);

        assert!(is_a2ui_part(&part));
        let data_part = get_a2ui_data_part(&part).unwrap();
        assert!(is_surface_part(data_part));

        let messages = a2ui_messages(data_part);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1]["beginRendering"]["root"], "root");
    }

    #[test]
    fn single_message_part_yields_itself() {
        let mut data = Map::new();
        data.insert("deleteSurface".to_string(), json!({"surfaceId": "main"}));
        let part = create_a2ui_part(data);
        let data_part = get_a2ui_data_part(&part).unwrap();

        assert!(!is_surface_part(data_part));
        assert_eq!(a2ui_messages(data_part), vec![json!({"deleteSurface": {"surfaceId": "main"}})]);
    }
}
