//! Integration tests for skye-bot crate.
//!
//! These tests cover what happens before the gateway connection: loading
//! configuration from disk and building the bot.

use skye_bot::{BotError, SkyeBot};
use skye_commands::ProcessStats;
use skye_common::test_utils::{config_fixtures, create_temp_dir, init_test_logging};
use skye_config::ConfigLoader;
use std::time::Duration;

#[test]
fn test_bot_from_config_file() {
    init_test_logging();
    let dir = create_temp_dir();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, config_fixtures::full_config_yaml()).unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(config.interaction_timeout(), Duration::from_secs(120));
    assert_eq!(config.discord.prefix, "?");
    assert_eq!(config.discord.owner_ids, vec![894_794_517_079_793_704]);

    let _bot = SkyeBot::new(config, ProcessStats::new());
}

#[test]
fn test_missing_file_is_a_config_error() {
    let dir = create_temp_dir();
    let err: BotError = ConfigLoader::load_from_file(dir.path().join("absent.yaml"))
        .unwrap_err()
        .into();
    assert!(matches!(err, BotError::Config(_)));
}

#[test]
fn test_framework_builds_without_connecting() {
    let config = ConfigLoader::from_yaml_str(config_fixtures::minimal_config_yaml(), |_| None).unwrap();
    let options = skye_commands::framework_options(&config);
    assert_eq!(options.commands.len(), skye_commands::commands().len());
    assert_eq!(options.prefix_options.prefix.as_deref(), Some("!"));
}
