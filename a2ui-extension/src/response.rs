//! Splitting model output into conversational text and A2UI messages.

use a2ui_a2a::Part;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

use crate::extension::create_a2ui_part;

/// Marker a model is prompted to emit between its reply and the A2UI JSON.
pub const DEFAULT_RESPONSE_DELIMITER: &str = "---a2ui_JSON---";

static FENCE_OPEN_REGEX: OnceLock<Regex> = OnceLock::new();
static FENCE_CLOSE_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_fence_open_regex() -> &'static Regex {
    FENCE_OPEN_REGEX.get_or_init(|| Regex::new(r"(?i)^```json\s*").expect("Invalid regex pattern"))
}

fn get_fence_close_regex() -> &'static Regex {
    FENCE_CLOSE_REGEX.get_or_init(|| Regex::new(r"\s*```$").expect("Invalid regex pattern"))
}

/// Model output split at the A2UI delimiter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentResponse {
    pub text: String,
    pub a2ui_messages: Vec<Value>,
}

impl AgentResponse {
    pub fn has_ui(&self) -> bool {
        !self.a2ui_messages.is_empty()
    }

    /// Convert into message parts: the text (when non-empty) followed by one
    /// A2UI part per message object.
    pub fn into_parts(self) -> Vec<Part> {
        let mut parts = Vec::with_capacity(self.a2ui_messages.len() + 1);
        if !self.text.is_empty() {
            parts.push(Part::text(self.text));
        }
        for message in self.a2ui_messages {
            match message {
                Value::Object(data) => parts.push(create_a2ui_part(data)),
                other => {
                    tracing::debug!(value = %other, "skipping non-object A2UI message");
                }
            }
        }
        parts
    }
}

fn strip_code_fence(json: &str) -> String {
    let trimmed = json.trim();
    let without_open = get_fence_open_regex().replace(trimmed, "");
    get_fence_close_regex().replace(&without_open, "").trim().to_string()
}

/// Split `content` at the first `delimiter`.
///
/// Only the segment between the first and a second delimiter is read as JSON;
/// anything after a second delimiter is dropped. Without a delimiter, with an
/// empty delimiter, or with nothing after it, the whole response is text. JSON
/// that fails to parse is treated as part of the text.
pub fn parse_agent_response(content: &str, delimiter: &str) -> AgentResponse {
    let _span = a2ui_telemetry::agent_response_span(content.len()).entered();
    let split = if delimiter.is_empty() { None } else { content.split_once(delimiter) };
    let Some((text, rest)) = split else {
        return AgentResponse { text: content.trim().to_string(), a2ui_messages: Vec::new() };
    };

    let json = rest.split(delimiter).next().unwrap_or_default();
    let cleaned = strip_code_fence(json);
    if cleaned.is_empty() {
        return AgentResponse { text: text.trim().to_string(), a2ui_messages: Vec::new() };
    }

    match serde_json::from_str::<Value>(&cleaned) {
        Ok(Value::Array(messages)) => {
            AgentResponse { text: text.trim().to_string(), a2ui_messages: messages }
        }
        Ok(message) => AgentResponse { text: text.trim().to_string(), a2ui_messages: vec![message] },
        Err(e) => {
            tracing::warn!(error = %e, "A2UI JSON in agent response did not parse, treating as text");
            AgentResponse { text: content.trim().to_string(), a2ui_messages: Vec::new() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::is_a2ui_part;
    use serde_json::json;

    #[test]
    fn plain_text_without_delimiter() {
        let response = parse_agent_response("  Hello there  ", DEFAULT_RESPONSE_DELIMITER);
        assert_eq!(response.text, "Hello there");
        assert!(!response.has_ui());
    }

    #[test]
    fn array_after_delimiter() {
        let content = "Here are some options.\n---a2ui_JSON---\n[{\"beginRendering\": {\"surfaceId\": \"s1\", \"root\": \"r1\"}}, {\"deleteSurface\": {\"surfaceId\": \"s0\"}}]";
        let response = parse_agent_response(content, DEFAULT_RESPONSE_DELIMITER);
        assert_eq!(response.text, "Here are some options.");
        assert_eq!(response.a2ui_messages.len(), 2);
        assert_eq!(response.a2ui_messages[0]["beginRendering"]["root"], "r1");
    }

    #[test]
    fn single_object_in_code_fence() {
        let content = "Done ---a2ui_JSON---\n```JSON\n{\"deleteSurface\": {\"surfaceId\": \"s1\"}}\n```";
        let response = parse_agent_response(content, DEFAULT_RESPONSE_DELIMITER);
        assert_eq!(response.text, "Done");
        assert_eq!(response.a2ui_messages, vec![json!({"deleteSurface": {"surfaceId": "s1"}})]);
    }

    #[test]
    fn empty_json_half() {
        let response = parse_agent_response("Only text ---a2ui_JSON---   ", DEFAULT_RESPONSE_DELIMITER);
        assert_eq!(response.text, "Only text");
        assert!(!response.has_ui());
    }

    #[test]
    fn invalid_json_keeps_whole_content() {
        let content = "Oops ---a2ui_JSON--- {not json";
        let response = parse_agent_response(content, DEFAULT_RESPONSE_DELIMITER);
        assert_eq!(response.text, content);
        assert!(!response.has_ui());
    }

    #[test]
    fn json_stops_at_second_delimiter() {
        let response =
            parse_agent_response("a ---a2ui_JSON--- [1] ---a2ui_JSON--- [2]", DEFAULT_RESPONSE_DELIMITER);
        assert_eq!(response.text, "a");
        assert_eq!(response.a2ui_messages, vec![json!(1)]);
    }

    #[test]
    fn repeated_delimiter_keeps_first_ui_block() {
        let content = "Pick one ---a2ui_JSON--- [{\"deleteSurface\":{\"surfaceId\":\"s1\"}}] ---a2ui_JSON--- trailing";
        let response = parse_agent_response(content, DEFAULT_RESPONSE_DELIMITER);
        assert_eq!(response.text, "Pick one");
        assert_eq!(response.a2ui_messages, vec![json!({"deleteSurface": {"surfaceId": "s1"}})]);
    }

    #[test]
    fn empty_delimiter_means_plain_text() {
        let response = parse_agent_response(" 42 ", "");
        assert_eq!(response.text, "42");
        assert!(!response.has_ui());
    }

    #[test]
    fn into_parts_skips_non_objects() {
        let response = AgentResponse {
            text: "hi".to_string(),
            a2ui_messages: vec![json!({"beginRendering": {"surfaceId": "s", "root": "r"}}), json!(3)],
        };
        let parts = response.into_parts();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].as_text(), Some("hi"));
        assert!(is_a2ui_part(&parts[1]));
    }

    #[test]
    fn into_parts_without_text() {
        let response = AgentResponse {
            text: String::new(),
            a2ui_messages: vec![json!({"deleteSurface": {"surfaceId": "s"}})],
        };
        let parts = response.into_parts();
        assert_eq!(parts.len(), 1);
        assert!(is_a2ui_part(&parts[0]));
    }
}
