//! The user an info card is about.

use crate::embed::to_utc;
use chrono::{DateTime, Utc};
use poise::serenity_prelude::{self as serenity, Mentionable};

const CDN: &str = "https://cdn.discordapp.com";
const SIZE: &str = "size=1024";

/// Avatar of a subject, able to produce every static format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    base: Option<String>,
    url: String,
}

impl Avatar {
    /// A custom avatar at `base` (CDN url without extension).
    pub fn custom(base: impl Into<String>, animated: bool) -> Self {
        let base = base.into();
        let extension = if animated { "gif" } else { "png" };
        let url = format!("{base}.{extension}?{SIZE}");
        Self {
            base: Some(base),
            url,
        }
    }

    /// One of Discord's default avatars, only served as PNG.
    pub fn fixed(url: impl Into<String>) -> Self {
        Self {
            base: None,
            url: url.into(),
        }
    }

    /// Url shown in the card.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Url of the avatar converted to `format` (`png`, `jpg`, `jpeg`, `webp`).
    pub fn with_static_format(&self, format: &str) -> String {
        match &self.base {
            Some(base) => format!("{base}.{format}?{SIZE}"),
            None => self.url.clone(),
        }
    }
}

/// Snapshot of the inspected user, taken from a `User` or guild `Member`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    /// User id.
    pub id: u64,
    /// Display tag (`name` or `name#1234`).
    pub tag: String,
    /// Avatar shown in the card (guild avatar for members that have one).
    pub avatar: Avatar,
    /// Profile banner, when known.
    pub banner_url: Option<String>,
    /// Account creation time.
    pub created_at: DateTime<Utc>,
    /// Guild join time; `None` for users outside the guild.
    pub joined_at: Option<DateTime<Utc>>,
    /// Role mentions; empty for plain users.
    pub role_mentions: Vec<String>,
}

impl Subject {
    /// `<@id>` mention.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }

    /// Builds a subject for a user that is not (known to be) a guild member.
    pub fn from_user(user: &serenity::User) -> Self {
        Self {
            id: user.id.get(),
            tag: user.tag(),
            avatar: user_avatar(user),
            banner_url: user.banner_url(),
            created_at: to_utc(user.id.created_at()),
            joined_at: None,
            role_mentions: Vec::new(),
        }
    }

    /// Builds a subject for a guild member.
    pub fn from_member(member: &serenity::Member) -> Self {
        let avatar = member.avatar.as_ref().map_or_else(
            || user_avatar(&member.user),
            |hash| {
                Avatar::custom(
                    format!(
                        "{CDN}/guilds/{}/users/{}/avatars/{hash}",
                        member.guild_id, member.user.id
                    ),
                    hash.is_animated(),
                )
            },
        );
        Self {
            avatar,
            joined_at: member.joined_at.map(to_utc),
            role_mentions: member
                .roles
                .iter()
                .map(|role| role.mention().to_string())
                .collect(),
            ..Self::from_user(&member.user)
        }
    }

    /// Replaces the banner with a freshly fetched value.
    pub fn set_banner(&mut self, banner_url: Option<String>) {
        self.banner_url = banner_url;
    }
}

fn user_avatar(user: &serenity::User) -> Avatar {
    user.avatar.as_ref().map_or_else(
        || Avatar::fixed(user.default_avatar_url()),
        |hash| Avatar::custom(format!("{CDN}/avatars/{}/{hash}", user.id), hash.is_animated()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_avatar_formats() {
        let avatar = Avatar::custom("https://cdn.discordapp.com/avatars/1/abc", false);
        assert_eq!(avatar.url(), "https://cdn.discordapp.com/avatars/1/abc.png?size=1024");
        assert_eq!(
            avatar.with_static_format("webp"),
            "https://cdn.discordapp.com/avatars/1/abc.webp?size=1024"
        );
    }

    #[test]
    fn test_animated_avatar_displays_gif() {
        let avatar = Avatar::custom("https://cdn.discordapp.com/avatars/1/a_abc", true);
        assert!(avatar.url().ends_with(".gif?size=1024"));
        assert!(avatar.with_static_format("jpg").ends_with(".jpg?size=1024"));
    }

    #[test]
    fn test_default_avatar_has_single_format() {
        let avatar = Avatar::fixed("https://cdn.discordapp.com/embed/avatars/0.png");
        assert_eq!(avatar.with_static_format("jpeg"), avatar.url());
    }
}
