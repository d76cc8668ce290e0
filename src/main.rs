//! Binary entry point: stdin to UDP.

use tokio::io::BufReader;
use tracing::info;

use line_bridge::bridge::LineBridge;
use line_bridge::config::BridgeConfig;
use line_bridge::error::Result;
use line_bridge::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Config file named by LINE_BRIDGE_CONFIG wins; otherwise defaults plus
    // environment overrides.
    let config = match std::env::var("LINE_BRIDGE_CONFIG") {
        Ok(path) => BridgeConfig::from_file(path)?,
        Err(_) => BridgeConfig::from_env()?,
    };

    logging::init(&config.logging);
    config.validate_strict()?;

    let bridge = LineBridge::connect(&config).await?;

    let input = BufReader::new(tokio::io::stdin());
    let stats = bridge.run(input, tokio::io::stdout()).await?;

    info!(
        lines = stats.lines_read,
        datagrams = stats.datagrams_sent,
        errors = stats.line_errors,
        "Bridge stopped"
    );

    Ok(())
}
