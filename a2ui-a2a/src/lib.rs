//! # A2UI A2A
//!
//! The slice of the A2A agent-communication protocol the A2UI extension works
//! against: message parts, messages, agent cards with their extension
//! descriptors, and the per-request extension negotiation context.

pub mod context;
pub mod extensions;
pub mod types;

pub use context::{ExtensionContext, RequestContext};
pub use extensions::{HTTP_EXTENSION_HEADER, activated_extensions_header, get_requested_extensions};
pub use types::*;
