//! Core bot logic using the Poise framework.

use crate::error::BotResult;
use poise::serenity_prelude::{self as serenity, GatewayIntents};
use skye_commands::{create_framework, Data, ProcessStats};
use skye_config::Config;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Gateway intents the commands rely on.
///
/// Member lists feed the server and bot statistics; message content is read
/// by prefix commands.
pub fn required_intents() -> GatewayIntents {
    GatewayIntents::non_privileged() | GatewayIntents::GUILD_MEMBERS | GatewayIntents::MESSAGE_CONTENT
}

/// Main bot structure.
pub struct SkyeBot {
    config: Arc<Config>,
    process: ProcessStats,
}

impl SkyeBot {
    /// Creates a new bot instance. `process` should be created as early as possible.
    pub fn new(config: Config, process: ProcessStats) -> Self {
        Self {
            config: Arc::new(config),
            process,
        }
    }

    /// Connects to Discord and runs until the gateway closes or Ctrl-C is received.
    pub async fn start(self) -> BotResult<()> {
        let config = self.config;
        let data_config = Arc::clone(&config);
        let process = self.process;

        let framework = create_framework(&config)
            .setup(move |ctx, ready, framework| {
                Box::pin(async move {
                    info!(user = %ready.user.name, guilds = ready.guilds.len(), "Connected to Discord");
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                    debug!(commands = framework.options().commands.len(), "Registered application commands");
                    Ok(Data::new(data_config, process))
                })
            })
            .build();

        let intents = required_intents();
        debug!("Configured Discord intents: {intents:?}");
        let mut client = serenity::ClientBuilder::new(&config.discord.token, intents)
            .framework(framework)
            .await?;

        let shard_manager = client.shard_manager.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {e}");
                return;
            }
            info!("Received shutdown signal, closing shards");
            shard_manager.shutdown_all().await;
        });

        client.start().await?;
        info!("Discord client stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intents_cover_members_and_prefix_commands() {
        let intents = required_intents();
        assert!(intents.contains(GatewayIntents::GUILDS));
        assert!(intents.contains(GatewayIntents::GUILD_MEMBERS));
        assert!(intents.contains(GatewayIntents::MESSAGE_CONTENT));
        assert!(!intents.contains(GatewayIntents::GUILD_PRESENCES));
    }

    #[test]
    fn test_new_keeps_config() {
        let mut config = Config::default();
        config.discord.prefix = "s!".to_string();
        let bot = SkyeBot::new(config, ProcessStats::new());
        assert_eq!(bot.config.discord.prefix, "s!");
    }
}
