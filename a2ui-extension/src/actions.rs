//! User actions reported back by A2UI renderers.
//!
//! When a user clicks a button or submits a form on a rendered surface the
//! client sends the action inside a data part. Renderers disagree on the exact
//! envelope, so several shapes are accepted.

use a2ui_a2a::{DataPart, Message};
use serde_json::{Map, Value};

const USER_ACTION_KEY: &str = "userAction";
const ACTION_KEY: &str = "action";
const A2UI_ACTION_KEY: &str = "a2uiAction";

#[derive(Debug, Clone, PartialEq)]
pub struct UserAction {
    pub name: String,
    pub context: Map<String, Value>,
}

impl UserAction {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), context: Map::new() }
    }

    /// Render the action as a prompt for the agent.
    pub fn to_query(&self) -> String {
        format!("User action: {} with context: {}", self.name, Value::Object(self.context.clone()))
    }

    fn from_object(object: &Map<String, Value>, name_keys: &[&str]) -> Option<Self> {
        let name = name_keys
            .iter()
            .find_map(|key| object.get(*key).and_then(Value::as_str).filter(|name| !name.is_empty()))?;
        let context = object.get("context").and_then(Value::as_object).cloned().unwrap_or_default();
        Some(Self { name: name.to_string(), context })
    }

    /// Extract an action from a single data part.
    pub fn from_data_part(part: &DataPart) -> Option<Self> {
        if let Some(raw) = part.data.get(USER_ACTION_KEY) {
            return match raw {
                Value::String(name) if !name.is_empty() => Some(Self::new(name.as_str())),
                Value::Object(object) => Self::from_object(object, &["name", "actionName"]),
                _ => None,
            };
        }
        if let Some(Value::Object(object)) = part.data.get(ACTION_KEY) {
            return Self::from_object(object, &["name"]);
        }
        if let Some(Value::Object(object)) = part.data.get(A2UI_ACTION_KEY) {
            return Self::from_object(object, &["actionName", "name"]);
        }
        None
    }
}

/// First user action found in the message's data parts.
pub fn extract_user_action(message: &Message) -> Option<UserAction> {
    message.data_parts().find_map(UserAction::from_data_part)
}

/// The query an agent should answer for `message`: the user action if one is
/// present, otherwise the first text part.
pub fn message_query(message: &Message) -> Option<String> {
    if let Some(action) = extract_user_action(message) {
        tracing::debug!(action.name = %action.name, "user action found in message");
        return Some(action.to_query());
    }
    message.parts.iter().find_map(|part| part.as_text()).map(str::to_string)
}
