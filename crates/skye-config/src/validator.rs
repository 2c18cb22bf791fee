//! Runtime validation of a loaded configuration.

use crate::schema::Config;
use skye_common::SkyeError;

/// Longest inactivity timeout accepted for interactive components.
pub const MAX_INTERACTION_TIMEOUT_SECS: u64 = 900;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Collects every problem with the configuration.
    pub fn issues(config: &Config) -> Vec<SkyeError> {
        let mut issues = Vec::new();

        if config.discord.token.trim().is_empty() {
            issues.push(SkyeError::validation_field(
                "Discord token cannot be empty",
                "discord.token",
            ));
        }

        if config.discord.prefix.is_empty() || config.discord.prefix.contains(char::is_whitespace) {
            issues.push(SkyeError::validation_field(
                "Command prefix must be non-empty and contain no whitespace",
                "discord.prefix",
            ));
        }

        let timeout = config.interaction.timeout_seconds;
        if timeout == 0 || timeout > MAX_INTERACTION_TIMEOUT_SECS {
            issues.push(SkyeError::validation_field(
                format!(
                    "Interaction timeout must be between 1 and {MAX_INTERACTION_TIMEOUT_SECS} seconds, got {timeout}"
                ),
                "interaction.timeout_seconds",
            ));
        }

        if config.appearance.embed_color > 0x00FF_FFFF {
            issues.push(SkyeError::validation_field(
                format!("Embed colour {:#x} is not a 24-bit colour", config.appearance.embed_color),
                "appearance.embed_color",
            ));
        }

        let links = &config.links;
        for (field, value) in [
            ("links.website", &links.website),
            ("links.support", &links.support),
            ("links.invite", &links.invite),
            ("links.top_gg", &links.top_gg),
            ("links.source_repository", &links.source_repository),
            ("links.library_repository", &links.library_repository),
        ] {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                issues.push(SkyeError::validation_field(
                    format!("'{value}' is not an http(s) URL"),
                    field,
                ));
            }
        }

        for (field, value) in [
            ("links.source_branch", &links.source_branch),
            ("links.library_branch", &links.library_branch),
        ] {
            if value.trim().is_empty() {
                issues.push(SkyeError::validation_field("Branch cannot be empty", field));
            }
        }

        issues
    }
}
