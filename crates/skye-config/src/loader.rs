//! Configuration loading from YAML with environment variable overrides.

use crate::schema::Config;
use skye_common::SkyeError;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "SKYE_CONFIG_PATH";

/// Files probed, in order, when no explicit path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["config.yaml", "config.yml"];

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Configuration validation error.
    #[error("Configuration validation failed: {0}")]
    Validation(#[source] SkyeError),

    /// Environment variable parsing error.
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Name of the variable.
        var: String,
        /// Parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for SkyeError {
    fn from(err: ConfigError) -> Self {
        SkyeError::config_with_source("could not load configuration", err)
    }
}

/// Configuration loader for the application.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from `SKYE_CONFIG_PATH`, a default file, or defaults, then
    /// apply environment overrides and validate.
    pub fn load() -> skye_common::Result<Config> {
        let config = if let Ok(config_path) = std::env::var(CONFIG_PATH_VAR) {
            Self::load_config(&config_path)?
        } else if let Some(path) = DEFAULT_CONFIG_FILES.iter().find(|p| Path::new(p).exists()) {
            Self::load_config(path)?
        } else {
            info!("No configuration file found, using defaults");
            Self::finish(Config::default(), env_lookup)?
        };

        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> skye_common::Result<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Parse, override and validate configuration from a YAML string.
    pub fn from_yaml_str<F>(content: &str, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config: Config = serde_yaml::from_str(content)?;
        Self::finish(config, lookup)
    }

    fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        debug!("Loading configuration from {}", path.as_ref().display());
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content, env_lookup)
    }

    fn finish<F>(mut config: Config, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::apply_overrides(&mut config, lookup)?;
        config.validate().map_err(ConfigError::Validation)?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("DISCORD_TOKEN") {
            config.discord.token = token;
        }

        if let Some(prefix) = lookup("SKYE_PREFIX") {
            config.discord.prefix = prefix;
        }

        if let Some(owners) = lookup("SKYE_OWNER_IDS") {
            config.discord.owner_ids = owners
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| {
                    s.parse::<u64>().map_err(|e| ConfigError::EnvParse {
                        var: "SKYE_OWNER_IDS".to_string(),
                        source: Box::new(e),
                    })
                })
                .collect::<Result<_, _>>()?;
        }

        if let Some(timeout) = lookup("SKYE_INTERACTION_TIMEOUT") {
            config.interaction.timeout_seconds =
                timeout.trim().parse().map_err(|e| ConfigError::EnvParse {
                    var: "SKYE_INTERACTION_TIMEOUT".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Some(level) = lookup("SKYE_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
