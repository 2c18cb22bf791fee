//! Integration tests for skye-commands crate.
//!
//! These tests drive the public pieces the commands are built from: the info
//! card session, the server snapshot, bot statistics and the source lookup.

use skye_commands::botinfo::{BotStats, GuildSummary};
use skye_commands::info::{render, Avatar, InfoError, InfoSession, InfoView, Subject};
use skye_commands::server::{ChannelAccess, ChannelKind, GuildSnapshot};
use skye_commands::source::{source_reply, NOT_FOUND, SOURCE_INDEX};
use skye_commands::{commands, ProcessStats};
use skye_common::test_utils::{discord_fixtures, init_test_logging, mock_timestamp};
use skye_config::{Config, ConfigLoader};

fn subject(roles: usize) -> Subject {
    Subject {
        id: discord_fixtures::OTHER_USER_ID,
        tag: "subject".to_string(),
        avatar: Avatar::custom("https://cdn.discordapp.com/avatars/2/abc", false),
        banner_url: None,
        created_at: mock_timestamp(2021, 1, 1, 0, 0, 0),
        joined_at: Some(mock_timestamp(2022, 1, 1, 0, 0, 0)),
        role_mentions: discord_fixtures::role_mentions(roles),
    }
}

#[test]
fn test_info_card_walkthrough() {
    init_test_logging();
    let config = Config::default();
    let mut session = InfoSession::new(discord_fixtures::INVOKER_ID, subject(12), config.appearance.embed_color);

    assert_eq!(session.rendered().field_value("Roles"), Some("12 roles"));

    let denied = session.select(discord_fixtures::OTHER_USER_ID, InfoView::Banner);
    assert!(matches!(denied, Err(InfoError::NotInvoker { .. })));
    assert_eq!(session.selected(), InfoView::Info);

    let banner = session.select(discord_fixtures::INVOKER_ID, InfoView::Banner).unwrap().clone();
    assert_eq!(banner.description.as_deref(), Some("User does not have a banner!"));
    assert!(banner.image.is_none());

    session.expire();
    assert_eq!(session.select(discord_fixtures::INVOKER_ID, InfoView::Info), Err(InfoError::Expired));
    assert_eq!(session.rendered(), &render(InfoView::Banner, session.subject(), config.appearance.embed_color));
}

#[test]
fn test_server_snapshot_counts_locked_channels() {
    use poise::serenity_prelude::Permissions;

    let mut channels = vec![ChannelAccess::open(ChannelKind::Text); 4];
    channels.extend(vec![
        ChannelAccess {
            deny: Permissions::VIEW_CHANNEL,
            ..ChannelAccess::open(ChannelKind::Text)
        };
        3
    ]);
    let snapshot = GuildSnapshot {
        id: discord_fixtures::GUILD_ID,
        name: "guild".to_string(),
        owner: "owner".to_string(),
        icon_url: None,
        created_at: mock_timestamp(2020, 1, 1, 0, 0, 0),
        everyone: Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES,
        channels,
        role_names: vec!["@everyone".to_string()],
        features: Vec::new(),
        premium_tier: 0,
        boost_count: 0,
        member_count: 0,
        members: Vec::new(),
        emojis: Vec::new(),
    };

    let totals = snapshot.channel_totals();
    assert_eq!((totals.text, totals.text_locked), (7, 3));
    assert_eq!(
        snapshot.render().field_value("Members"),
        Some("Total: 0 (0 bots)")
    );
}

#[test]
fn test_unavailable_guilds_in_bot_stats() {
    let available = GuildSummary {
        available: true,
        member_count: 10,
        humans: 8,
        channels: 4,
        text: 2,
        voice: 1,
    };
    let stats = BotStats::aggregate(&[available, GuildSummary::unavailable()]);
    assert_eq!(stats.guilds, 2);
    assert_eq!(stats.members, 10);
    assert!((stats.human_percentage - 80.0).abs() < f64::EPSILON);
}

#[test]
fn test_source_lookup_against_registered_commands() {
    let config = ConfigLoader::from_yaml_str(
        skye_common::test_utils::config_fixtures::full_config_yaml(),
        |_| None,
    )
    .unwrap();
    let commands = commands();

    assert_eq!(
        source_reply(&commands, Some("does not exist"), &config.links, SOURCE_INDEX),
        NOT_FOUND
    );
    let link = source_reply(&commands, Some("userinfo"), &config.links, SOURCE_INDEX);
    assert!(link.starts_with("<https://github.com/SkyeBot/Skye/blob/main/crates/skye-commands/src/info/userinfo.rs#L"));
}

#[test]
fn test_process_stats_in_async_context() {
    let stats = ProcessStats::new();
    let uptime = tokio_test::block_on(async {
        tokio::task::yield_now().await;
        stats.uptime(chrono::Utc::now())
    });
    assert!(uptime >= chrono::Duration::zero());
}
