//! # Configuration Management
//!
//! Centralized configuration for the line bridge.
//!
//! This module provides structured configuration for the bridge: the UDP
//! destination, the payload marker, and logging options.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Environment variables via `from_env()`
//! - Direct instantiation with defaults
//!
//! The defaults reproduce the classic edit-the-constants deployment: a fixed
//! destination address baked in before each run. Overrides exist so the
//! destination can be swapped without recompiling (e.g., loopback testing).

use crate::error::{BridgeError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Default destination host for forwarded datagrams
pub const DEFAULT_TARGET_HOST: &str = "192.168.160.22";

/// Default destination port for forwarded datagrams
pub const DEFAULT_TARGET_PORT: u16 = 5555;

/// Marker substring that identifies lines carrying a forwardable payload
pub const DEFAULT_MARKER: &str = "DATA: ";

/// Main bridge configuration structure that contains all configurable settings
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct BridgeConfig {
    /// Where forwarded datagrams are sent
    #[serde(default)]
    pub destination: DestinationConfig,

    /// Line-scanning configuration
    #[serde(default)]
    pub forwarding: ForwardingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BridgeConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| BridgeError::Config(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| BridgeError::Config(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| BridgeError::Config(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Start with defaults
        let mut config = Self::default();

        // Override with environment variables
        if let Ok(host) = std::env::var("LINE_BRIDGE_TARGET_HOST") {
            config.destination.host = host;
        }

        if let Ok(port) = std::env::var("LINE_BRIDGE_TARGET_PORT") {
            let val = port.parse::<u16>().map_err(|_| {
                BridgeError::Config(format!("Invalid LINE_BRIDGE_TARGET_PORT: '{port}'"))
            })?;
            config.destination.port = val;
        }

        if let Ok(marker) = std::env::var("LINE_BRIDGE_MARKER") {
            config.forwarding.marker = marker;
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        errors.extend(self.destination.validate());
        errors.extend(self.forwarding.validate());

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(BridgeError::Config(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// UDP destination configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DestinationConfig {
    /// Destination host (IP address or resolvable name)
    pub host: String,

    /// Destination UDP port
    pub port: u16,
}

impl Default for DestinationConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_TARGET_HOST),
            port: DEFAULT_TARGET_PORT,
        }
    }
}

impl DestinationConfig {
    /// Validate destination configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.host.is_empty() {
            errors.push("Destination host cannot be empty".to_string());
        } else if self.host.chars().any(char::is_whitespace) {
            errors.push(format!(
                "Invalid destination host: '{}' (must not contain whitespace)",
                self.host
            ));
        }

        if self.port == 0 {
            errors.push("Destination port must be greater than 0".to_string());
        }

        errors
    }
}

/// Line-scanning configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForwardingConfig {
    /// Marker substring that precedes the hex payload on a line
    pub marker: String,
}

impl Default for ForwardingConfig {
    fn default() -> Self {
        Self {
            marker: String::from(DEFAULT_MARKER),
        }
    }
}

impl ForwardingConfig {
    /// Validate forwarding configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.marker.is_empty() {
            errors.push("Payload marker cannot be empty".to_string());
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            json_format: false,
        }
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
