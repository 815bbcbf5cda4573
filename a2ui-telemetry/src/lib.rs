//! # A2UI Telemetry
//!
//! Structured logging for the A2UI extension crates using `tracing`.
//!
//! ## Usage
//!
//! ```rust
//! use a2ui_telemetry::{init_telemetry, info};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     init_telemetry("my-ui-agent")?;
//!     info!("A2UI agent starting");
//!     Ok(())
//! }
//! ```

pub mod init;
pub mod spans;

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, trace, warn, Span};

pub use init::{init_json_telemetry, init_telemetry};
pub use spans::*;
