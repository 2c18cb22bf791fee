//! Main entry point for Skye Bot.

use anyhow::Context;
use skye_bot::SkyeBot;
use skye_commands::ProcessStats;
use skye_common::init_logging;
use skye_config::ConfigLoader;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Uptime counts from here.
    let process = ProcessStats::new();

    let config = ConfigLoader::load().context("Failed to load configuration")?;
    let _log_guard = init_logging(&config.logging).context("Failed to initialize logging")?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting Skye Bot");

    let bot = SkyeBot::new(config, process);
    if let Err(e) = bot.start().await {
        error!("Bot stopped with an error: {e}");
        return Err(e.into());
    }

    Ok(())
}
