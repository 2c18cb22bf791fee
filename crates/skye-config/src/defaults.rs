//! Default values for every configuration section.

use crate::schema::{AppearanceConfig, Config, DiscordConfig, InteractionConfig, LinksConfig};
use skye_common::{constants, LoggingConfig};

/// Seconds a dropdown stays interactive without input.
pub const DEFAULT_INTERACTION_TIMEOUT_SECS: u64 = 180;

/// Prefix for text commands when none is configured.
pub const DEFAULT_PREFIX: &str = "!";

impl Default for Config {
    fn default() -> Self {
        Self {
            discord: DiscordConfig::default(),
            appearance: AppearanceConfig::default(),
            interaction: InteractionConfig::default(),
            links: LinksConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            prefix: DEFAULT_PREFIX.to_string(),
            owner_ids: Vec::new(),
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            embed_color: constants::EMBED_COLOR,
        }
    }
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_INTERACTION_TIMEOUT_SECS,
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            website: constants::WEBSITE_URL.to_string(),
            support: constants::SUPPORT_URL.to_string(),
            invite: constants::INVITE_URL.to_string(),
            top_gg: constants::TOP_GG_URL.to_string(),
            source_repository: constants::SOURCE_REPOSITORY.to_string(),
            source_branch: constants::SOURCE_BRANCH.to_string(),
            library_repository: constants::LIBRARY_REPOSITORY.to_string(),
            library_branch: constants::LIBRARY_BRANCH.to_string(),
        }
    }
}
