//! Integration tests for skye-common crate.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use skye_common::{date, human_timedelta, join_or_count, Plural, SkyeError};

#[test]
fn test_uptime_phrase() {
    let started = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let now = started + Duration::hours(5) + Duration::minutes(1);
    assert_eq!(
        human_timedelta(started, now, false, false),
        "5 hours and 1 minute"
    );
}

#[test]
fn test_missing_join_date() {
    assert_eq!(date(None, true), "N/A");
}

#[test]
fn test_member_count_line() {
    let line = format!("Total: {} ({})", 120, Plural(3).of("bot"));
    assert_eq!(line, "Total: 120 (3 bots)");
}

#[test]
fn test_error_kind() {
    assert_eq!(SkyeError::validation_field("bad", "discord.prefix").kind(), "Validation");
    assert_eq!(SkyeError::config_with_source("gone", std::fmt::Error).kind(), "Config");
}

proptest! {
    #[test]
    fn test_role_list_collapses_at_ten(count in 0usize..40) {
        let roles: Vec<String> = (0..count).map(|i| format!("<@&{i}>")).collect();
        let rendered = join_or_count(&roles, "roles");
        if count >= 10 {
            prop_assert_eq!(rendered, format!("{count} roles"));
        } else {
            prop_assert_eq!(rendered, roles.join(", "));
        }
    }

    #[test]
    fn test_brief_timedelta_has_no_spaces_inside_units(secs in 1i64..10_000_000) {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let then = now - Duration::seconds(secs);
        let brief = human_timedelta(then, now, true, false);
        let parts: Vec<&str> = brief.split(' ').collect();
        prop_assert!(parts.len() <= 3);
        for part in parts {
            prop_assert!(part.chars().last().is_some_and(|c| "ymowdhs".contains(c)));
        }
    }
}
