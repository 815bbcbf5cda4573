use a2ui_a2a::{
    AgentCapabilities, AgentCard, AgentExtension, AgentSkill, FileContent, ExtensionContext, HTTP_EXTENSION_HEADER, Message,
    Part, RequestContext, Role, activated_extensions_header, get_requested_extensions,
};
use serde_json::json;

#[test]
fn message_from_wire_keeps_part_order_and_metadata() {
    let raw = json!({
        "role": "user",
        "messageId": "msg-1",
        "contextId": "ctx-1",
        "parts": [
            {"kind": "text", "text": "show me a form"},
            {"kind": "data", "data": {"userAction": "submit"}, "metadata": {"mimeType": "application/json"}},
            {"kind": "file", "file": {"uri": "https://example.com/a.png", "mimeType": "image/png"}}
        ]
    });

    let message: Message = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(message.role, Role::User);
    assert_eq!(message.parts.len(), 3);
    assert_eq!(message.parts[0].as_text(), Some("show me a form"));
    assert_eq!(message.data_parts().count(), 1);
    assert!(matches!(message.parts[2], Part::File(_)));

    let back = serde_json::to_value(&message).unwrap();
    assert_eq!(back, raw);
}

#[test]
fn negotiation_from_header_values() {
    let requested = get_requested_extensions(["https://a2ui.org/a2a-extension/a2ui/v0.8, urn:other"]);
    let mut ctx = RequestContext::new(None).with_requested_extensions(requested);

    assert!(ctx.is_extension_requested("urn:other"));
    ctx.add_activated_extension("urn:other");

    assert_eq!(HTTP_EXTENSION_HEADER, "X-A2A-Extensions");
    assert_eq!(activated_extensions_header(ctx.activated_extensions()), "urn:other");
}

#[test]
fn agent_card_advertises_extensions() {
    let mut extension = AgentExtension::new("urn:ext");
    extension.description = Some("test".to_string());

    let card = AgentCard::builder()
        .name("ui-agent")
        .description("Renders UI")
        .url("http://localhost:8080")
        .capabilities(AgentCapabilities {
            streaming: true,
            extensions: Some(vec![extension]),
            ..Default::default()
        })
        .skills(vec![AgentSkill::new("render_ui", "Render UI", "Builds forms", vec!["ui".to_string()])])
        .build();

    let value = serde_json::to_value(&card).unwrap();
    assert_eq!(value["skills"][0]["id"], "render_ui");
    assert_eq!(value["skills"][0]["tags"], json!(["ui"]));
    assert!(value["skills"][0].get("examples").is_none());
    assert_eq!(value["capabilities"]["extensions"][0]["uri"], "urn:ext");
    assert!(value["capabilities"]["extensions"][0].get("params").is_none());
    assert_eq!(value["capabilities"]["pushNotifications"], false);
}

#[test]
fn file_part_serializes_with_kind() {
    let part = Part::file(FileContent {
        name: Some("menu.png".to_string()),
        mime_type: Some("image/png".to_string()),
        bytes: None,
        uri: Some("https://example.com/menu.png".to_string()),
    });

    assert!(part.as_data().is_none());
    assert!(part.metadata().is_none());
    assert_eq!(
        serde_json::to_value(&part).unwrap(),
        json!({
            "kind": "file",
            "file": {"name": "menu.png", "mimeType": "image/png", "uri": "https://example.com/menu.png"}
        })
    );
}
