//! # A2UI Extension
//!
//! Helpers for carrying A2UI agent-driven UI inside A2A messages.
//!
//! - Tag and detect A2UI data parts ([`create_a2ui_part`], [`is_a2ui_part`])
//! - Advertise the extension on an agent card ([`get_a2ui_agent_extension`])
//! - Activate it for requests that ask for it ([`try_activate_a2ui_extension`])
//!
//! ## Usage
//!
//! ```rust
//! use a2ui_a2a::RequestContext;
//! use a2ui_extension::{
//!     A2UI_EXTENSION_URI, create_a2ui_part, get_a2ui_data_part, try_activate_a2ui_extension,
//! };
//! use serde_json::json;
//!
//! let mut ctx = RequestContext::new(None).with_requested_extensions([A2UI_EXTENSION_URI]);
//! if try_activate_a2ui_extension(&mut ctx) {
//!     let data = json!({"beginRendering": {"surfaceId": "s1", "root": "r1"}});
//!     let part = create_a2ui_part(data.as_object().cloned().unwrap_or_default());
//!     assert!(get_a2ui_data_part(&part).is_some());
//! }
//! ```

pub mod actions;
pub mod capabilities;
pub mod config;
pub mod error;
pub mod extension;
pub mod response;
pub mod surface;

pub use actions::{UserAction, extract_user_action, message_query};
pub use capabilities::{A2uiClientCapabilities, client_capabilities};
pub use config::A2uiExtensionConfig;
pub use error::{A2uiError, Result};
pub use extension::*;
pub use response::{AgentResponse, DEFAULT_RESPONSE_DELIMITER, parse_agent_response};
pub use surface::{
    A2UI_ACTIVITY_TYPE, ACTIVITY_TYPE_KEY, a2ui_messages, create_a2ui_surface_part, is_surface_part,
};
