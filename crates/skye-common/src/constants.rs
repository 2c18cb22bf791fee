//! Emoji and link constants shared by the embeds.

/// Shown next to the source code link.
pub const GITHUB: &str = "🐙";
/// Shown next to invite links.
pub const INVITE: &str = "📨";
/// Shown next to the top.gg listing link.
pub const TOP_GG: &str = "🔝";
/// Shown on the website button.
pub const WEBSITE: &str = "🌐";
/// Prefix for text channel counts.
pub const TEXT_CHANNEL: &str = "💬";
/// Prefix for voice channel counts.
pub const VOICE_CHANNEL: &str = "🔊";

/// Tick in front of every enabled guild feature.
pub const TICK_YES: &str = "✅";

/// Default embed colour.
pub const EMBED_COLOR: u32 = 0x3867_A8;
/// Colour used by the avatar and banner cards.
pub const MEDIA_COLOR: u32 = 0x3867_A8;

/// Project website.
pub const WEBSITE_URL: &str = "https://skyebot.dev/";
/// Support server invite.
pub const SUPPORT_URL: &str = "https://discord.gg/Zwn7D78pDw";
/// OAuth2 invite for the bot.
pub const INVITE_URL: &str = "https://discord.com/api/oauth2/authorize?client_id=932462085516968027&permissions=8&scope=bot%20applications.commands";
/// top.gg listing.
pub const TOP_GG_URL: &str = "https://top.gg/bot/932462085516968027";
/// Source repository of the bot.
pub const SOURCE_REPOSITORY: &str = "https://github.com/SkyeBot/Skye";
/// Branch linked to by the source command.
pub const SOURCE_BRANCH: &str = "rewrite";
/// Repository of the command framework, used for builtin commands.
pub const LIBRARY_REPOSITORY: &str = "https://github.com/serenity-rs/poise";
/// Branch of the command framework repository.
pub const LIBRARY_BRANCH: &str = "current";

/// Author line of the bot info card.
pub const AUTHOR_NAME: &str = "I was made by: Sawsha#0598!";
/// Icon next to [`AUTHOR_NAME`].
pub const AUTHOR_ICON_URL: &str =
    "https://cdn.discordapp.com/avatars/894794517079793704/02fc9ee15032b33756ba9829f00449d9.png?size=1024";
/// Footer of the bot info card.
pub const BOTINFO_FOOTER: &str = "Made with love ❤️ by Sawsha#0598 :))";

