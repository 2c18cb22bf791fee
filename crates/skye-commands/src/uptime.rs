//! Uptime command reading the process statistics from framework data.

use crate::framework::{Context, Error};
use crate::stats::ProcessStats;
use chrono::{DateTime, Utc};

/// The uptime reply for `stats` as of `now`.
pub fn uptime_message(stats: &ProcessStats, now: DateTime<Utc>) -> String {
    format!("I have been running since: **{}** ago", stats.uptime_text(now, false))
}

/// Tells you how long the bot has been up for.
#[poise::command(slash_command, prefix_command, category = "Bot Info")]
pub async fn uptime(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say(uptime_message(&ctx.data().process, Utc::now())).await?;
    Ok(())
}
