//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use skye_common::{LoggingConfig, SkyeError};

/// Main configuration structure for Skye Bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discord connection configuration.
    pub discord: DiscordConfig,
    /// Embed appearance.
    pub appearance: AppearanceConfig,
    /// Interactive component behaviour.
    pub interaction: InteractionConfig,
    /// External links shown by the info commands.
    pub links: LinksConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Discord bot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Discord bot token.
    pub token: String,
    /// Prefix for text commands.
    pub prefix: String,
    /// Users allowed to run owner-only commands.
    pub owner_ids: Vec<u64>,
}

/// Embed appearance configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Default embed colour as `0xRRGGBB`.
    pub embed_color: u32,
}

/// Interactive component configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Seconds of inactivity after which a dropdown stops responding.
    pub timeout_seconds: u64,
}

/// Links rendered in embeds, buttons and the source command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Project website.
    pub website: String,
    /// Support server invite.
    pub support: String,
    /// Bot invite link.
    pub invite: String,
    /// top.gg listing.
    pub top_gg: String,
    /// Repository hosting this bot's source.
    pub source_repository: String,
    /// Branch of `source_repository` to link to.
    pub source_branch: String,
    /// Repository of the command framework.
    pub library_repository: String,
    /// Branch of `library_repository` to link to.
    pub library_branch: String,
}

impl Config {
    /// Validates the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), SkyeError> {
        match crate::validator::ConfigValidator::issues(self).into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(()),
        }
    }

    /// Interaction timeout as a [`std::time::Duration`].
    pub const fn interaction_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.interaction.timeout_seconds)
    }
}
