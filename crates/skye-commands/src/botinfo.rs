//! `/botinfo`: statistics about the bot across every guild it is in.

use crate::embed::{to_utc, EmbedSpec};
use crate::framework::{Context, Data, Error};
use crate::server::ChannelKind;
use crate::stats::bytes_to_mb;
use chrono::{DateTime, Utc};
use poise::serenity_prelude as serenity;
use skye_common::constants::{
    AUTHOR_ICON_URL, AUTHOR_NAME, BOTINFO_FOOTER, GITHUB, INVITE, TOP_GG, WEBSITE,
};
use skye_common::{date, with_thousands};
use skye_config::schema::LinksConfig;
use std::collections::BTreeSet;
use tracing::debug;

/// Framework version shown in the `Library` field.
pub const LIBRARY_VERSION: &str = env!("SKYE_POISE_VERSION");

const TITLE: &str = "Hi! im Skye! I'm a multipurpose open source Discord Bot!";

/// Per-guild numbers taken from the cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuildSummary {
    /// False for guilds Discord reported as unavailable.
    pub available: bool,
    /// Member count reported by Discord.
    pub member_count: u64,
    /// Cached non-bot members.
    pub humans: u64,
    /// All channels, categories included.
    pub channels: u64,
    /// Text and announcement channels.
    pub text: u64,
    /// Voice channels.
    pub voice: u64,
}

impl GuildSummary {
    /// A guild the bot knows of but cannot see.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Summarises a cached guild.
    pub fn from_guild(guild: &serenity::Guild) -> Self {
        let (text, voice) = guild
            .channels
            .values()
            .fold((0, 0), |(text, voice), channel| match ChannelKind::from(channel.kind) {
                ChannelKind::Text => (text + 1, voice),
                ChannelKind::Voice => (text, voice + 1),
                ChannelKind::Other => (text, voice),
            });
        Self {
            available: true,
            member_count: guild.member_count,
            humans: guild.members.values().filter(|m| !m.user.bot).count() as u64,
            channels: guild.channels.len() as u64,
            text,
            voice,
        }
    }
}

/// Totals across every guild.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BotStats {
    /// Guilds, unavailable ones included.
    pub guilds: u64,
    /// Sum of member counts.
    pub members: u64,
    /// All channels.
    pub channels: u64,
    /// Text channels.
    pub text: u64,
    /// Voice channels.
    pub voice: u64,
    /// Mean share of humans per guild in percent, rounded to two decimals.
    pub human_percentage: f64,
}

impl BotStats {
    /// Aggregates guild summaries.
    #[allow(clippy::cast_precision_loss)]
    pub fn aggregate(guilds: &[GuildSummary]) -> Self {
        let mut stats = Self {
            guilds: guilds.len() as u64,
            ..Self::default()
        };
        let mut ratios = Vec::new();
        for guild in guilds.iter().filter(|g| g.available) {
            stats.members += guild.member_count;
            stats.channels += guild.channels;
            stats.text += guild.text;
            stats.voice += guild.voice;
            if guild.member_count > 0 {
                ratios.push(guild.humans as f64 / guild.member_count as f64 * 100.0);
            }
        }
        if !ratios.is_empty() {
            let mean = ratios.iter().sum::<f64>() / ratios.len() as f64;
            stats.human_percentage = (mean * 100.0).round() / 100.0;
        }
        stats
    }
}

/// Everything besides the guild totals that the card shows.
#[derive(Debug, Clone)]
pub struct BotInfo<'a> {
    /// Guild totals.
    pub stats: BotStats,
    /// Creation time of the bot account.
    pub created_at: DateTime<Utc>,
    /// Distinct command categories.
    pub categories: usize,
    /// Resident memory, when it could be read.
    pub memory_bytes: Option<u64>,
    /// Link targets.
    pub links: &'a LinksConfig,
    /// Embed colour.
    pub color: u32,
    /// Render time.
    pub now: DateTime<Utc>,
}

impl BotInfo<'_> {
    /// Renders the bot info card.
    pub fn render(&self) -> EmbedSpec {
        let links = self.links;
        let description = format!(
            "Source Code: {GITHUB} [source]({}/tree/{}) | Invite Link: {INVITE} [invite me]({}) | Top.gg Link: {TOP_GG} [top.gg]({}) | ",
            links.source_repository, links.source_branch, links.invite, links.top_gg
        );
        let stats = &self.stats;
        let ram = self
            .memory_bytes
            .map_or_else(|| "N/A".to_string(), |bytes| format!("{:.2} MB", bytes_to_mb(bytes)));

        EmbedSpec::new()
            .title(TITLE)
            .description(description)
            .color(self.color)
            .author(AUTHOR_NAME, Some(AUTHOR_ICON_URL.to_string()))
            .field("Library", format!("**poise {LIBRARY_VERSION}**"), true)
            .field("Date Created", date(Some(self.created_at), true), true)
            .field(
                "Bot servers",
                format!(
                    "**servers:** {}\n**avg bot/human:** {}%\n**Currently serving over {} People!**",
                    stats.guilds,
                    percentage(stats.human_percentage),
                    stats.members
                ),
                true,
            )
            .field(
                "Channels",
                format!(
                    "{} total\n{} text\n{} voice",
                    with_thousands(stats.channels),
                    with_thousands(stats.text),
                    with_thousands(stats.voice)
                ),
                true,
            )
            .field("Categories loaded", self.categories.to_string(), true)
            .field("RAM Usage", ram, true)
            .footer(BOTINFO_FOOTER)
            .timestamp(self.now)
    }
}

/// A rounded percentage, always with a decimal part: `50.0`, `54.17`.
pub fn percentage(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Number of distinct categories among `commands`.
pub fn category_count(commands: &[poise::Command<Data, Error>]) -> usize {
    commands
        .iter()
        .filter_map(|command| command.category.as_deref())
        .collect::<BTreeSet<_>>()
        .len()
}

/// Link buttons under the card.
pub fn link_buttons(links: &LinksConfig) -> serenity::CreateActionRow {
    serenity::CreateActionRow::Buttons(vec![
        serenity::CreateButton::new_link(&links.website)
            .label("Website")
            .emoji(serenity::ReactionType::Unicode(WEBSITE.to_string())),
        serenity::CreateButton::new_link(&links.support)
            .label("Support Server")
            .emoji(serenity::ReactionType::Unicode(INVITE.to_string())),
    ])
}

/// Provides info about the bot.
#[poise::command(slash_command, prefix_command, category = "Bot Info", aliases("about", "info"))]
pub async fn botinfo(ctx: Context<'_>) -> Result<(), Error> {
    let cache = ctx.cache();
    let summaries: Vec<GuildSummary> = cache
        .guilds()
        .into_iter()
        .map(|id| cache.guild(id).map_or_else(GuildSummary::unavailable, |g| GuildSummary::from_guild(&g)))
        .collect();
    let created_at = to_utc(cache.current_user().id.created_at());

    let data = ctx.data();
    let info = BotInfo {
        stats: BotStats::aggregate(&summaries),
        created_at,
        categories: category_count(&ctx.framework().options().commands),
        memory_bytes: data.process.memory_bytes(),
        links: &data.config.links,
        color: data.config.appearance.embed_color,
        now: Utc::now(),
    };
    debug!(guilds = info.stats.guilds, "Collected bot statistics");

    ctx.send(
        poise::CreateReply::default()
            .embed(info.render().into())
            .components(vec![link_buttons(&data.config.links)]),
    )
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use skye_common::test_utils::mock_timestamp;

    fn guild(member_count: u64, humans: u64) -> GuildSummary {
        GuildSummary {
            available: true,
            member_count,
            humans,
            channels: 5,
            text: 3,
            voice: 1,
        }
    }

    #[test]
    fn test_aggregate() {
        let stats = BotStats::aggregate(&[guild(4, 3), guild(3, 1)]);
        assert_eq!(stats.guilds, 2);
        assert_eq!(stats.members, 7);
        assert_eq!(stats.channels, 10);
        assert_eq!(stats.text, 6);
        assert_eq!(stats.voice, 2);
        // (75 + 33.333...) / 2
        assert!((stats.human_percentage - 54.17).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percentage_keeps_decimal_part() {
        assert_eq!(percentage(50.0), "50.0");
        assert_eq!(percentage(0.0), "0.0");
        assert_eq!(percentage(54.17), "54.17");
        assert_eq!(percentage(87.5), "87.5");
    }

    #[test]
    fn test_empty_guilds_skip_average() {
        let stats = BotStats::aggregate(&[guild(0, 0), guild(2, 1)]);
        assert!((stats.human_percentage - 50.0).abs() < f64::EPSILON);
        assert_eq!(BotStats::aggregate(&[]), BotStats::default());
    }

    #[test]
    fn test_render() {
        let links = LinksConfig::default();
        let info = BotInfo {
            stats: BotStats {
                guilds: 3,
                members: 1_500,
                channels: 12_345,
                text: 10_000,
                voice: 2_345,
                human_percentage: 87.5,
            },
            created_at: mock_timestamp(2022, 1, 17, 0, 0, 0),
            categories: 4,
            memory_bytes: Some(3 * 1024 * 1024 / 2),
            links: &links,
            color: 0x12_3456,
            now: mock_timestamp(2024, 1, 1, 0, 0, 0),
        };
        let embed = info.render();

        assert_eq!(embed.title.as_deref(), Some(TITLE));
        assert!(embed
            .description
            .as_deref()
            .is_some_and(|d| d.contains(&format!("({}/tree/{})", links.source_repository, links.source_branch))));
        assert_eq!(embed.field_value("Library"), Some(format!("**poise {LIBRARY_VERSION}**").as_str()));
        assert_eq!(
            embed.field_value("Bot servers"),
            Some("**servers:** 3\n**avg bot/human:** 87.5%\n**Currently serving over 1500 People!**")
        );
        assert_eq!(embed.field_value("Channels"), Some("12,345 total\n10,000 text\n2,345 voice"));
        assert_eq!(embed.field_value("Categories loaded"), Some("4"));
        assert_eq!(embed.field_value("RAM Usage"), Some("1.50 MB"));
        assert_eq!(embed.footer.as_deref(), Some(BOTINFO_FOOTER));
        assert_eq!(embed.timestamp, Some(info.now));
    }

    #[test]
    fn test_render_without_memory() {
        let links = LinksConfig::default();
        let info = BotInfo {
            stats: BotStats::default(),
            created_at: mock_timestamp(2022, 1, 17, 0, 0, 0),
            categories: 0,
            memory_bytes: None,
            links: &links,
            color: 0,
            now: mock_timestamp(2024, 1, 1, 0, 0, 0),
        };
        assert_eq!(info.render().field_value("RAM Usage"), Some("N/A"));
    }

    #[test]
    fn test_category_count() {
        assert_eq!(category_count(&crate::framework::commands()), 4);
    }

    proptest! {
        #[test]
        fn test_unavailable_guild_only_counts_as_guild(
            members in prop::collection::vec((1u64..10_000, 0u64..100), 0..10),
            unavailable in 1usize..5,
        ) {
            let available: Vec<GuildSummary> = members
                .iter()
                .map(|&(count, humans)| guild(count, humans.min(count)))
                .collect();
            let mut all = available.clone();
            all.extend(std::iter::repeat(GuildSummary::unavailable()).take(unavailable));

            let base = BotStats::aggregate(&available);
            let with = BotStats::aggregate(&all);
            prop_assert_eq!(with.guilds, base.guilds + unavailable as u64);
            prop_assert_eq!(with.members, base.members);
            prop_assert_eq!(with.channels, base.channels);
            prop_assert_eq!(with.text, base.text);
            prop_assert_eq!(with.voice, base.voice);
            prop_assert!((with.human_percentage - base.human_percentage).abs() < f64::EPSILON);
        }
    }
}
