//! # Error Types
//!
//! Error handling for the bridge.
//!
//! The bridge distinguishes two classes of failure:
//! - **Fatal errors**: configuration problems, socket setup failures, and
//!   I/O errors on the input or mirrored output stream. These abort startup
//!   or the run loop.
//! - **Per-line errors**: malformed hex payloads and datagram send failures.
//!   These are caught inside the loop, reported as an inline diagnostic, and
//!   never escape the per-line boundary.
//!
//! All errors implement `std::error::Error` for interoperability.

use std::io;
use thiserror::Error;

/// BridgeError is the primary error type for all bridge operations
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid hex payload: {0}")]
    Decode(#[from] hex::FromHexError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Results using BridgeError
pub type Result<T> = std::result::Result<T, BridgeError>;
