//! Integration tests for skye-config crate.

use skye_common::test_utils::config_fixtures;
use skye_config::{Config, ConfigLoader};
use std::io::Write;

#[test]
fn test_default_config_validation() {
    let mut config = Config::default();

    // Default config should fail validation due to the empty token
    assert!(config.validate().is_err());

    config.discord.token = "test_token".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_full_yaml_round_trips_into_schema() {
    let config = ConfigLoader::from_yaml_str(config_fixtures::full_config_yaml(), |_| None).unwrap();

    assert_eq!(config.discord.token, "test_token_full");
    assert_eq!(config.discord.prefix, "?");
    assert_eq!(config.discord.owner_ids, vec![894_794_517_079_793_704]);
    assert_eq!(config.appearance.embed_color, 0x3867_A8);
    assert_eq!(config.interaction.timeout_seconds, 120);
    assert_eq!(config.links.source_branch, "main");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.interaction_timeout().as_secs(), 120);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(config_fixtures::minimal_config_yaml().as_bytes())
        .unwrap();

    let config = ConfigLoader::load_from_file(file.path()).unwrap();
    assert_eq!(config.discord.token, "test_token");
    assert_eq!(config.links, Config::default().links);
}

#[test]
fn test_missing_file_is_an_error() {
    let err = ConfigLoader::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert_eq!(err.kind(), "Config");
}
