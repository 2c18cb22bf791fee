//! Plain embed description rendered by the pure parts of the commands.
//!
//! Renderers return an [`EmbedSpec`], a fresh value per render, which is
//! converted into serenity's builder only when a reply is sent.

use chrono::{DateTime, Utc};
use poise::serenity_prelude as serenity;

/// One embed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    /// Field title.
    pub name: String,
    /// Field body.
    pub value: String,
    /// Whether the field may share a row with its neighbours.
    pub inline: bool,
}

/// Author line of an embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedAuthor {
    /// Author name.
    pub name: String,
    /// Small icon next to the name.
    pub icon_url: Option<String>,
}

/// Everything an embed can show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmbedSpec {
    /// Title line.
    pub title: Option<String>,
    /// Main body.
    pub description: Option<String>,
    /// Side colour.
    pub color: Option<u32>,
    /// Fields, in display order.
    pub fields: Vec<EmbedField>,
    /// Author line.
    pub author: Option<EmbedAuthor>,
    /// Small image in the top right.
    pub thumbnail: Option<String>,
    /// Large image below the body.
    pub image: Option<String>,
    /// Footer text.
    pub footer: Option<String>,
    /// Footer timestamp.
    pub timestamp: Option<DateTime<Utc>>,
}

impl EmbedSpec {
    /// Creates an empty embed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the colour.
    #[must_use]
    pub const fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Sets the author line.
    #[must_use]
    pub fn author(mut self, name: impl Into<String>, icon_url: Option<String>) -> Self {
        self.author = Some(EmbedAuthor {
            name: name.into(),
            icon_url,
        });
        self
    }

    /// Sets the thumbnail.
    #[must_use]
    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    /// Sets the large image.
    #[must_use]
    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    /// Sets the footer text.
    #[must_use]
    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }

    /// Sets the footer timestamp.
    #[must_use]
    pub const fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Looks up a field by name.
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }
}

impl From<EmbedSpec> for serenity::CreateEmbed {
    fn from(spec: EmbedSpec) -> Self {
        let mut embed = Self::new();
        if let Some(title) = spec.title {
            embed = embed.title(title);
        }
        if let Some(description) = spec.description {
            embed = embed.description(description);
        }
        if let Some(color) = spec.color {
            embed = embed.colour(color);
        }
        for field in spec.fields {
            embed = embed.field(field.name, field.value, field.inline);
        }
        if let Some(author) = spec.author {
            let mut builder = serenity::CreateEmbedAuthor::new(author.name);
            if let Some(icon_url) = author.icon_url {
                builder = builder.icon_url(icon_url);
            }
            embed = embed.author(builder);
        }
        if let Some(url) = spec.thumbnail {
            embed = embed.thumbnail(url);
        }
        if let Some(url) = spec.image {
            embed = embed.image(url);
        }
        if let Some(text) = spec.footer {
            embed = embed.footer(serenity::CreateEmbedFooter::new(text));
        }
        if let Some(timestamp) = spec
            .timestamp
            .and_then(|ts| serenity::Timestamp::from_unix_timestamp(ts.timestamp()).ok())
        {
            embed = embed.timestamp(timestamp);
        }
        embed
    }
}

/// Converts a Discord timestamp into a chrono UTC datetime.
pub fn to_utc(timestamp: serenity::Timestamp) -> DateTime<Utc> {
    DateTime::from_timestamp(timestamp.unix_timestamp(), 0).unwrap_or_default()
}
