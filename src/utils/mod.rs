//! # Utility Modules
//!
//! Supporting utilities for the bridge.
//!
//! ## Components
//! - **Logging**: Structured logging configuration (stderr, so the mirrored
//!   stdout stream stays byte-exact)

pub mod logging;
