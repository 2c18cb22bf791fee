//! Test utilities and shared test helpers for Skye Bot.
//!
//! Enabled for this crate's own tests and, through the `testing` feature,
//! for the other workspace crates' test suites.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests; safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Test fixture for creating a fixed timestamp.
pub fn mock_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .unwrap()
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Discord snowflake fixtures.
pub mod discord_fixtures {
    /// A user id that invokes commands in tests.
    pub const INVOKER_ID: u64 = 894_794_517_079_793_704;
    /// A second, unrelated user id.
    pub const OTHER_USER_ID: u64 = 932_462_085_516_968_027;
    /// A guild id.
    pub const GUILD_ID: u64 = 586_339_098_172_850_187;

    /// Generate `count` distinct role ids.
    pub fn role_ids(count: usize) -> Vec<u64> {
        (0..count as u64).map(|i| 100_000_000_000_000_000 + i).collect()
    }

    /// Role mentions for `count` distinct roles.
    pub fn role_mentions(count: usize) -> Vec<String> {
        role_ids(count).into_iter().map(|id| format!("<@&{id}>")).collect()
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// A minimal valid configuration as YAML string.
    pub fn minimal_config_yaml() -> &'static str {
        r#"
discord:
  token: "test_token"
"#
    }

    /// A full configuration as YAML string.
    pub fn full_config_yaml() -> &'static str {
        concat!(
            "discord:\n",
            "  token: \"test_token_full\"\n",
            "  prefix: \"?\"\n",
            "  owner_ids: [894794517079793704]\n",
            "\n",
            "appearance:\n",
            "  embed_color: 3696552\n",
            "\n",
            "interaction:\n",
            "  timeout_seconds: 120\n",
            "\n",
            "links:\n",
            "  website: \"https://skyebot.dev/\"\n",
            "  support: \"https://discord.gg/Zwn7D78pDw\"\n",
            "  invite: \"https://discord.com/oauth2/authorize\"\n",
            "  top_gg: \"https://top.gg/bot/932462085516968027\"\n",
            "  source_repository: \"https://github.com/SkyeBot/Skye\"\n",
            "  source_branch: \"main\"\n",
            "  library_repository: \"https://github.com/serenity-rs/poise\"\n",
            "  library_branch: \"current\"\n",
            "\n",
            "logging:\n",
            "  level: \"debug\"\n",
            "  format: \"compact\"\n"
        )
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for generating valid Discord snowflakes.
    pub fn snowflake_strategy() -> impl Strategy<Value = u64> {
        100_000_000_000_000_000u64..=999_999_999_999_999_999u64
    }

    /// Strategy for generating a pair of distinct snowflakes.
    pub fn distinct_snowflakes() -> impl Strategy<Value = (u64, u64)> {
        (snowflake_strategy(), snowflake_strategy()).prop_filter("ids must differ", |(a, b)| a != b)
    }
}
