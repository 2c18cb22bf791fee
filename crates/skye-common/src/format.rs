//! Display formatting helpers used by every embed.
//!
//! Timestamps are rendered with Discord's `<t:UNIX:STYLE>` markup so each
//! client sees them in its own timezone.

use chrono::{DateTime, Utc};

/// Renders a timestamp as a full date, optionally followed by its relative form.
///
/// Returns `"N/A"` when there is nothing to render, e.g. the join date of a
/// user that is not a guild member.
pub fn date(timestamp: Option<DateTime<Utc>>, ago: bool) -> String {
    let Some(timestamp) = timestamp else {
        return "N/A".to_string();
    };
    let unix = timestamp.timestamp();
    if ago {
        format!("<t:{unix}:f> (<t:{unix}:R>)")
    } else {
        format!("<t:{unix}:f>")
    }
}

/// Renders a timestamp relative to the reader's clock ("3 days ago").
pub fn format_relative(timestamp: DateTime<Utc>) -> String {
    format!("<t:{}:R>", timestamp.timestamp())
}

const UNITS: [(&str, &str, i64); 7] = [
    ("year", "y", 365 * 86_400),
    ("month", "mo", 30 * 86_400),
    ("week", "w", 7 * 86_400),
    ("day", "d", 86_400),
    ("hour", "h", 3_600),
    ("minute", "m", 60),
    ("second", "s", 1),
];

/// Most units shown by [`human_timedelta`].
const ACCURACY: usize = 3;

/// Human readable distance between `dt` and `now`.
///
/// The long form reads `"2 days, 3 hours and 1 second"`, the brief form
/// `"2d 3h 1s"`. Units that are zero are skipped and only the three largest
/// remaining units are kept. Months count 30 days, years 365. With `suffix` set, a
/// point in the past gets `" ago"` appended and one in the future is
/// prefixed with `"in "`. A distance under one second is `"now"`.
pub fn human_timedelta(dt: DateTime<Utc>, now: DateTime<Utc>, brief: bool, suffix: bool) -> String {
    let past = dt <= now;
    let mut remaining = (now - dt).num_seconds().abs();

    let mut parts = Vec::new();
    for (name, short, size) in UNITS {
        let amount = remaining / size;
        remaining %= size;
        if amount == 0 || parts.len() == ACCURACY {
            continue;
        }
        if brief {
            parts.push(format!("{amount}{short}"));
        } else {
            parts.push(Plural(amount).of(name));
        }
    }

    if parts.is_empty() {
        return "now".to_string();
    }

    let body = if brief {
        parts.join(" ")
    } else {
        human_join(&parts, ", ", "and")
    };

    match (suffix, past) {
        (true, true) => format!("{body} ago"),
        (true, false) => format!("in {body}"),
        (false, _) => body,
    }
}

/// Joins items as natural language: `"a"`, `"a and b"`, `"a, b and c"`.
pub fn human_join<S: AsRef<str>>(items: &[S], delimiter: &str, last: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [head @ .., tail] => {
            let head = head.iter().map(AsRef::as_ref).collect::<Vec<_>>();
            format!("{} {last} {}", head.join(delimiter), tail.as_ref())
        }
    }
}

/// Count paired with the right word form.
///
/// `spec` is either a singular noun, pluralised with a trailing `s`, or an
/// explicit `"singular|plural"` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plural(pub i64);

impl Plural {
    /// Renders the count followed by the matching noun form.
    pub fn of(self, spec: &str) -> String {
        let (singular, plural) = match spec.split_once('|') {
            Some((singular, plural)) => (singular.to_string(), plural.to_string()),
            None => (spec.to_string(), format!("{spec}s")),
        };
        if self.0.abs() == 1 {
            format!("{} {singular}", self.0)
        } else {
            format!("{} {plural}", self.0)
        }
    }
}

/// Inserts `,` thousands separators: `1234567` becomes `"1,234,567"`.
pub fn with_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Joins display items, or collapses them to `"{n} {noun}"` once there are ten or more.
pub fn join_or_count<S: AsRef<str>>(items: &[S], noun: &str) -> String {
    if items.len() < 10 {
        items.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ")
    } else {
        format!("{} {noun}", items.len())
    }
}
