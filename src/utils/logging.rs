//! Structured logging setup.
//!
//! Logs are written to stderr: stdout carries the mirrored input stream and
//! inline diagnostics, and must not be interleaved with log events.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber from the logging configuration.
///
/// `RUST_LOG` takes precedence over the configured level when set. Calling
/// this more than once is a no-op (the first subscriber wins), which keeps
/// test setups harmless.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string().to_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.json_format {
        let _ = builder.json().try_init();
    } else {
        let _ = builder.try_init();
    }
}
