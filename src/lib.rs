//! # line-bridge
//!
//! A line-oriented text-to-UDP bridge.
//!
//! The bridge consumes newline-terminated text from an input stream (stdin in
//! the shipped binary), mirrors every line verbatim to an output stream, and
//! scans each line for the payload marker (`"DATA: "` by default). When the
//! marker is found, the remainder of the line is trimmed, hex-decoded, and
//! sent as a single UDP datagram to a fixed destination.
//!
//! Typical deployment is behind a serial-to-text pipe:
//!
//! ```text
//! device_logger | line-bridge
//! ```
//!
//! ## Design
//! - Single sequential loop, one line at a time; no queuing, no retries.
//! - Malformed payloads and send failures degrade to "report and continue":
//!   a diagnostic is written inline on the output stream and the next line
//!   is processed normally.
//! - CTRL+C triggers a clean shutdown with a stop notice; end-of-input ends
//!   the loop normally.
//!
//! ## Example
//! ```no_run
//! use line_bridge::bridge::LineBridge;
//! use line_bridge::config::BridgeConfig;
//!
//! #[tokio::main]
//! async fn main() -> line_bridge::error::Result<()> {
//!     let config = BridgeConfig::default_with_overrides(|c| {
//!         c.destination.host = "127.0.0.1".into();
//!         c.destination.port = 5555;
//!     });
//!
//!     let bridge = LineBridge::connect(&config).await?;
//!     let input = tokio::io::BufReader::new(tokio::io::stdin());
//!     bridge.run(input, tokio::io::stdout()).await?;
//!     Ok(())
//! }
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod payload;
pub mod utils;

pub use bridge::{BridgeStats, LineBridge};
pub use config::BridgeConfig;
pub use error::{BridgeError, Result};
