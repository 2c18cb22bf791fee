//! Read-only view of a guild and the statistics computed from it.

use crate::embed::{to_utc, EmbedSpec};
use chrono::{DateTime, Utc};
use poise::serenity_prelude as serenity;
use serenity::Permissions;
use skye_common::constants::{TEXT_CHANNEL, TICK_YES, VOICE_CHANNEL};
use skye_common::{format_relative, Plural};

/// Guild features shown in the card, in display order.
pub const FEATURE_LABELS: [(&str, &str); 14] = [
    ("PARTNERED", "Partnered"),
    ("VERIFIED", "Verified"),
    ("DISCOVERABLE", "Server Discovery"),
    ("COMMUNITY", "Community Server"),
    ("FEATURABLE", "Featured"),
    ("WELCOME_SCREEN_ENABLED", "Welcome Screen"),
    ("INVITE_SPLASH", "Invite Splash"),
    ("VIP_REGIONS", "VIP Voice Servers"),
    ("VANITY_URL", "Vanity Invite"),
    ("COMMERCE", "Commerce"),
    ("LURKABLE", "Lurkable"),
    ("NEWS", "News Channels"),
    ("ANIMATED_ICON", "Animated Icon"),
    ("BANNER", "Banner"),
];

const MORE_EMOJI: &str = "MORE_EMOJI";
const TIER_EMOJI_LIMITS: [u64; 4] = [50, 100, 150, 250];

/// How a channel is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// Text and announcement channels.
    Text,
    /// Voice channels.
    Voice,
    /// Categories, stages, forums and the rest; never displayed.
    Other,
}

impl From<serenity::ChannelType> for ChannelKind {
    fn from(kind: serenity::ChannelType) -> Self {
        match kind {
            serenity::ChannelType::Text | serenity::ChannelType::News => Self::Text,
            serenity::ChannelType::Voice => Self::Voice,
            _ => Self::Other,
        }
    }
}

/// A channel together with its `@everyone` overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelAccess {
    /// Channel kind.
    pub kind: ChannelKind,
    /// Permissions the overwrite grants.
    pub allow: Permissions,
    /// Permissions the overwrite removes.
    pub deny: Permissions,
}

impl ChannelAccess {
    /// A channel without an `@everyone` overwrite.
    pub const fn open(kind: ChannelKind) -> Self {
        Self {
            kind,
            allow: Permissions::empty(),
            deny: Permissions::empty(),
        }
    }

    /// `@everyone` permissions in this channel given the guild-wide ones.
    pub fn effective(&self, everyone: Permissions) -> Permissions {
        (everyone & !self.deny) | self.allow
    }

    /// Whether `@everyone` cannot use the channel.
    pub fn is_locked(&self, everyone: Permissions) -> bool {
        let perms = self.effective(everyone);
        if !perms.contains(Permissions::VIEW_CHANNEL) {
            return true;
        }
        self.kind == ChannelKind::Voice
            && !perms.contains(Permissions::CONNECT | Permissions::SPEAK)
    }
}

/// A guild member as far as the card cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInfo {
    /// User id.
    pub id: u64,
    /// Display tag.
    pub tag: String,
    /// Whether the account is a bot.
    pub bot: bool,
    /// Start of the member's current boost.
    pub premium_since: Option<DateTime<Utc>>,
}

/// A custom emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiInfo {
    /// Animated emoji have their own quota.
    pub animated: bool,
    /// False when the emoji is disabled by a lost boost tier.
    pub available: bool,
}

/// Totals and locked counts per displayed channel kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelTotals {
    /// Text channels.
    pub text: u64,
    /// Locked text channels.
    pub text_locked: u64,
    /// Voice channels.
    pub voice: u64,
    /// Locked voice channels.
    pub voice_locked: u64,
}

/// Custom emoji counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmojiStats {
    /// Static emoji.
    pub regular: u64,
    /// Disabled static emoji.
    pub regular_disabled: u64,
    /// Animated emoji.
    pub animated: u64,
    /// Disabled animated emoji.
    pub animated_disabled: u64,
}

impl EmojiStats {
    /// Counts `emojis`.
    pub fn count(emojis: &[EmojiInfo]) -> Self {
        emojis.iter().fold(Self::default(), |mut stats, emoji| {
            let disabled = u64::from(!emoji.available);
            if emoji.animated {
                stats.animated += 1;
                stats.animated_disabled += disabled;
            } else {
                stats.regular += 1;
                stats.regular_disabled += disabled;
            }
            stats
        })
    }

    /// All emoji.
    pub const fn total(&self) -> u64 {
        self.regular + self.animated
    }
}

/// Everything `/serverinfo` shows, captured once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSnapshot {
    /// Guild id.
    pub id: u64,
    /// Guild name.
    pub name: String,
    /// Owner tag, or a mention when the owner is not loaded.
    pub owner: String,
    /// Icon url.
    pub icon_url: Option<String>,
    /// Guild creation time.
    pub created_at: DateTime<Utc>,
    /// Guild-wide `@everyone` permissions.
    pub everyone: Permissions,
    /// Every channel.
    pub channels: Vec<ChannelAccess>,
    /// Role names, lowest position first.
    pub role_names: Vec<String>,
    /// Raw feature flags.
    pub features: Vec<String>,
    /// Boost level, 0 to 3.
    pub premium_tier: u8,
    /// Number of boosts.
    pub boost_count: u64,
    /// Member count reported by Discord.
    pub member_count: u64,
    /// Loaded members.
    pub members: Vec<MemberInfo>,
    /// Custom emoji.
    pub emojis: Vec<EmojiInfo>,
}

impl GuildSnapshot {
    /// Builds a snapshot from a cached guild and its fully loaded member list.
    pub fn from_guild(guild: &serenity::Guild, members: &[serenity::Member]) -> Self {
        let everyone_id = serenity::RoleId::new(guild.id.get());
        let everyone = guild
            .roles
            .get(&everyone_id)
            .map_or_else(Permissions::empty, |role| role.permissions);

        let channels = guild
            .channels
            .values()
            .map(|channel| {
                let kind = ChannelKind::from(channel.kind);
                channel
                    .permission_overwrites
                    .iter()
                    .find(|o| o.kind == serenity::PermissionOverwriteType::Role(everyone_id))
                    .map_or_else(
                        || ChannelAccess::open(kind),
                        |o| ChannelAccess {
                            kind,
                            allow: o.allow,
                            deny: o.deny,
                        },
                    )
            })
            .collect();

        let mut roles: Vec<&serenity::Role> = guild.roles.values().collect();
        roles.sort_by_key(|role| (role.position, role.id));

        let members: Vec<MemberInfo> = members
            .iter()
            .map(|member| MemberInfo {
                id: member.user.id.get(),
                tag: member.user.tag(),
                bot: member.user.bot,
                premium_since: member.premium_since.map(to_utc),
            })
            .collect();

        let owner = members
            .iter()
            .find(|member| member.id == guild.owner_id.get())
            .map_or_else(|| format!("<@{}>", guild.owner_id), |member| member.tag.clone());

        Self {
            id: guild.id.get(),
            name: guild.name.clone(),
            owner,
            icon_url: guild.icon_url(),
            created_at: to_utc(guild.id.created_at()),
            everyone,
            channels,
            role_names: roles.iter().map(|role| role.name.clone()).collect(),
            features: guild.features.clone(),
            premium_tier: u8::from(guild.premium_tier),
            boost_count: guild.premium_subscription_count.unwrap_or_default(),
            member_count: guild.member_count,
            members,
            emojis: guild
                .emojis
                .values()
                .map(|emoji| EmojiInfo {
                    animated: emoji.animated,
                    available: emoji.available,
                })
                .collect(),
        }
    }

    /// Channel totals with locked counts.
    pub fn channel_totals(&self) -> ChannelTotals {
        self.channels.iter().fold(ChannelTotals::default(), |mut totals, channel| {
            let locked = u64::from(channel.is_locked(self.everyone));
            match channel.kind {
                ChannelKind::Text => {
                    totals.text += 1;
                    totals.text_locked += locked;
                }
                ChannelKind::Voice => {
                    totals.voice += 1;
                    totals.voice_locked += locked;
                }
                ChannelKind::Other => {}
            }
            totals
        })
    }

    /// Labels of the known features this guild has.
    pub fn feature_labels(&self) -> Vec<&'static str> {
        FEATURE_LABELS
            .iter()
            .filter(|(flag, _)| self.features.iter().any(|f| f == flag))
            .map(|(_, label)| *label)
            .collect()
    }

    /// The member whose boost started last, if anyone is boosting.
    ///
    /// Members without a boost rank at the guild creation time; the first of
    /// several equal members wins.
    pub fn last_booster(&self) -> Option<&MemberInfo> {
        let rank = |member: &MemberInfo| member.premium_since.unwrap_or(self.created_at);
        let latest = self.members.iter().fold(None::<&MemberInfo>, |best, member| match best {
            Some(best) if rank(member) <= rank(best) => Some(best),
            _ => Some(member),
        })?;
        latest.premium_since.map(|_| latest)
    }

    /// Number of bot accounts among the loaded members.
    pub fn bot_count(&self) -> u64 {
        self.members.iter().filter(|member| member.bot).count() as u64
    }

    /// Emoji slots per kind.
    pub fn emoji_limit(&self) -> u64 {
        let base = if self.features.iter().any(|f| f == MORE_EMOJI) { 200 } else { 50 };
        let tier = TIER_EMOJI_LIMITS[usize::from(self.premium_tier.min(3))];
        base.max(tier)
    }

    /// Renders the server card.
    pub fn render(&self) -> EmbedSpec {
        let mut embed = EmbedSpec::new()
            .title(self.name.clone())
            .description(format!("**ID**: {}\n**Owner**: {}", self.id, self.owner));
        if let Some(icon) = &self.icon_url {
            embed = embed.thumbnail(icon.clone());
        }

        let features = self.feature_labels();
        if !features.is_empty() {
            let lines: Vec<String> = features.iter().map(|label| format!("{TICK_YES}: {label}")).collect();
            embed = embed.field("Features", lines.join("\n"), true);
        }

        embed = embed.field("Channels", self.channel_lines(), true);

        if self.premium_tier != 0 {
            let mut boosts = format!("Level {}\n{} boosts", self.premium_tier, self.boost_count);
            if let Some(member) = self.last_booster() {
                if let Some(since) = member.premium_since {
                    boosts.push_str(&format!("\nLast Boost: {} ({})", member.tag, format_relative(since)));
                }
            }
            embed = embed.field("Boosts", boosts, false);
        }

        embed = embed
            .field(
                "Members",
                format!("Total: {} ({})", self.member_count, Plural(i64::try_from(self.bot_count()).unwrap_or(i64::MAX)).of("bot")),
                false,
            )
            .field("Roles", self.roles_line(), true)
            .field("Emoji", self.emoji_lines(), false);

        embed.footer("Created").timestamp(self.created_at)
    }

    fn channel_lines(&self) -> String {
        let totals = self.channel_totals();
        let line = |emoji: &str, total: u64, locked: u64| {
            if locked > 0 {
                format!("{emoji} {total} ({locked} locked)")
            } else {
                format!("{emoji} {total}")
            }
        };

        let mut lines = Vec::new();
        if totals.text > 0 {
            lines.push(line(TEXT_CHANNEL, totals.text, totals.text_locked));
        }
        if totals.voice > 0 {
            lines.push(line(VOICE_CHANNEL, totals.voice, totals.voice_locked));
        }
        if lines.is_empty() {
            return "None".to_string();
        }
        lines.join("\n")
    }

    fn roles_line(&self) -> String {
        if self.role_names.len() < 10 {
            self.role_names
                .iter()
                .map(|name| name.replace('@', "@\u{200b}"))
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            format!("{} roles", self.role_names.len())
        }
    }

    fn emoji_lines(&self) -> String {
        let stats = EmojiStats::count(&self.emojis);
        let limit = self.emoji_limit();
        let mut text = format!("Regular: {}/{limit}\nAnimated: {}/{limit}\n", stats.regular, stats.animated);
        if stats.regular_disabled > 0 || stats.animated_disabled > 0 {
            text.push_str(&format!(
                "Disabled: {} regular, {} animated\n",
                stats.regular_disabled, stats.animated_disabled
            ));
        }
        text.push_str(&format!("Total Emoji: {}/{}", stats.total(), limit * 2));
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use skye_common::test_utils::{discord_fixtures, mock_timestamp};

    fn everyone() -> Permissions {
        Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES | Permissions::CONNECT | Permissions::SPEAK
    }

    fn hidden(kind: ChannelKind) -> ChannelAccess {
        ChannelAccess {
            deny: Permissions::VIEW_CHANNEL,
            ..ChannelAccess::open(kind)
        }
    }

    fn member(id: u64, bot: bool, premium_since: Option<DateTime<Utc>>) -> MemberInfo {
        MemberInfo {
            id,
            tag: format!("member{id}"),
            bot,
            premium_since,
        }
    }

    fn snapshot() -> GuildSnapshot {
        GuildSnapshot {
            id: discord_fixtures::GUILD_ID,
            name: "Skye HQ".to_string(),
            owner: "sawsha".to_string(),
            icon_url: None,
            created_at: mock_timestamp(2019, 6, 1, 0, 0, 0),
            everyone: everyone(),
            channels: Vec::new(),
            role_names: vec!["@everyone".to_string(), "Mods".to_string()],
            features: Vec::new(),
            premium_tier: 0,
            boost_count: 0,
            member_count: 3,
            members: vec![member(1, false, None), member(2, true, None), member(3, false, None)],
            emojis: Vec::new(),
        }
    }

    #[test]
    fn test_overwrite_can_lock_and_unlock() {
        let base = everyone();
        assert!(hidden(ChannelKind::Text).is_locked(base));
        assert!(!ChannelAccess::open(ChannelKind::Text).is_locked(base));

        let reopened = ChannelAccess {
            allow: Permissions::VIEW_CHANNEL,
            ..ChannelAccess::open(ChannelKind::Text)
        };
        assert!(!reopened.is_locked(Permissions::empty()));
    }

    #[test]
    fn test_voice_needs_connect_and_speak() {
        let muted = ChannelAccess {
            deny: Permissions::SPEAK,
            ..ChannelAccess::open(ChannelKind::Voice)
        };
        assert!(muted.is_locked(everyone()));

        let text = ChannelAccess {
            deny: Permissions::SPEAK,
            ..ChannelAccess::open(ChannelKind::Text)
        };
        assert!(!text.is_locked(everyone()));
    }

    #[test]
    fn test_channel_lines() {
        let mut guild = snapshot();
        guild.channels = vec![
            ChannelAccess::open(ChannelKind::Text),
            hidden(ChannelKind::Text),
            ChannelAccess::open(ChannelKind::Voice),
            hidden(ChannelKind::Other),
        ];
        let embed = guild.render();
        assert_eq!(
            embed.field_value("Channels"),
            Some(format!("{TEXT_CHANNEL} 2 (1 locked)\n{VOICE_CHANNEL} 1").as_str())
        );
    }

    #[test]
    fn test_feature_labels_follow_display_order() {
        let mut guild = snapshot();
        guild.features = vec!["BANNER".into(), "PARTNERED".into(), "SOMETHING_NEW".into()];
        assert_eq!(guild.feature_labels(), ["Partnered", "Banner"]);
        assert_eq!(
            guild.render().field_value("Features"),
            Some(format!("{TICK_YES}: Partnered\n{TICK_YES}: Banner").as_str())
        );
    }

    #[test]
    fn test_no_features_no_field() {
        assert!(snapshot().render().field_value("Features").is_none());
    }

    #[test]
    fn test_boosts_hidden_without_tier() {
        assert!(snapshot().render().field_value("Boosts").is_none());
    }

    #[test]
    fn test_last_booster() {
        let mut guild = snapshot();
        guild.premium_tier = 2;
        guild.boost_count = 9;
        let early = mock_timestamp(2022, 1, 1, 0, 0, 0);
        let late = mock_timestamp(2023, 1, 1, 0, 0, 0);
        guild.members = vec![
            member(1, false, Some(early)),
            member(2, false, Some(late)),
            member(3, false, Some(late)),
            member(4, false, None),
        ];
        assert_eq!(guild.last_booster().map(|m| m.id), Some(2));
        assert_eq!(
            guild.render().field_value("Boosts"),
            Some(format!("Level 2\n9 boosts\nLast Boost: member2 ({})", format_relative(late)).as_str())
        );
    }

    #[test]
    fn test_boosts_without_boosting_member() {
        let mut guild = snapshot();
        guild.premium_tier = 1;
        guild.boost_count = 2;
        assert!(guild.last_booster().is_none());
        assert_eq!(guild.render().field_value("Boosts"), Some("Level 1\n2 boosts"));
    }

    #[test]
    fn test_members_line() {
        assert_eq!(snapshot().render().field_value("Members"), Some("Total: 3 (1 bot)"));
    }

    #[test]
    fn test_roles_neutralise_mentions() {
        assert_eq!(
            snapshot().render().field_value("Roles"),
            Some("@\u{200b}everyone, Mods")
        );

        let mut guild = snapshot();
        guild.role_names = (0..10).map(|i| format!("role{i}")).collect();
        assert_eq!(guild.render().field_value("Roles"), Some("10 roles"));
    }

    #[test]
    fn test_emoji_limit() {
        let mut guild = snapshot();
        assert_eq!(guild.emoji_limit(), 50);
        guild.premium_tier = 3;
        assert_eq!(guild.emoji_limit(), 250);
        guild.premium_tier = 1;
        guild.features.push("MORE_EMOJI".into());
        assert_eq!(guild.emoji_limit(), 200);
    }

    #[test]
    fn test_emoji_lines() {
        let mut guild = snapshot();
        guild.emojis = vec![
            EmojiInfo { animated: false, available: true },
            EmojiInfo { animated: false, available: false },
            EmojiInfo { animated: true, available: true },
        ];
        assert_eq!(
            guild.render().field_value("Emoji"),
            Some("Regular: 2/50\nAnimated: 1/50\nDisabled: 1 regular, 0 animated\nTotal Emoji: 3/100")
        );

        guild.emojis.remove(1);
        assert_eq!(
            guild.render().field_value("Emoji"),
            Some("Regular: 1/50\nAnimated: 1/50\nTotal Emoji: 2/100")
        );
    }

    #[test]
    fn test_card_frame() {
        let mut guild = snapshot();
        guild.icon_url = Some("https://cdn/icon.png".into());
        let embed = guild.render();
        assert_eq!(embed.title.as_deref(), Some("Skye HQ"));
        assert_eq!(
            embed.description,
            Some(format!("**ID**: {}\n**Owner**: sawsha", discord_fixtures::GUILD_ID))
        );
        assert_eq!(embed.thumbnail.as_deref(), Some("https://cdn/icon.png"));
        assert_eq!(embed.footer.as_deref(), Some("Created"));
        assert_eq!(embed.timestamp, Some(guild.created_at));
    }

    proptest! {
        #[test]
        fn test_locked_count_matches_hidden_channels(open in 0usize..40, locked in 0usize..40) {
            let mut guild = snapshot();
            guild.channels = std::iter::repeat(ChannelAccess::open(ChannelKind::Text))
                .take(open)
                .chain(std::iter::repeat(hidden(ChannelKind::Text)).take(locked))
                .collect();
            let totals = guild.channel_totals();
            prop_assert_eq!(totals.text, (open + locked) as u64);
            prop_assert_eq!(totals.text_locked, locked as u64);
        }
    }
}
