//! Pure rendering of one info card view.

use super::subject::Subject;
use super::view::InfoView;
use crate::embed::EmbedSpec;
use skye_common::{constants::MEDIA_COLOR, date, join_or_count};

/// Static formats offered as download links in the avatar view.
pub const AVATAR_FORMATS: [(&str, &str); 4] =
    [("PNG", "png"), ("JPG", "jpg"), ("JPEG", "jpeg"), ("WEBP", "webp")];

/// Shown instead of an image when the subject has no banner.
pub const NO_BANNER: &str = "User does not have a banner!";

/// Shown by the roles view for plain users and role-less members.
pub const NO_ROLES: &str = "Member has no roles or is a User";

/// Renders `view` of `subject`. `color` is the bot's default embed colour.
pub fn render(view: InfoView, subject: &Subject, color: u32) -> EmbedSpec {
    match view {
        InfoView::Avatar => render_avatar(subject),
        InfoView::Banner => render_banner(subject),
        InfoView::Info => render_info(subject, color),
        InfoView::Roles => render_roles(subject, color),
    }
}

fn render_avatar(subject: &Subject) -> EmbedSpec {
    let links = AVATAR_FORMATS
        .iter()
        .map(|(label, format)| format!("[{label}]({})", subject.avatar.with_static_format(format)))
        .collect::<Vec<_>>()
        .join(" | ");

    EmbedSpec::new()
        .description(links)
        .color(MEDIA_COLOR)
        .image(subject.avatar.url())
}

fn render_banner(subject: &Subject) -> EmbedSpec {
    let embed = EmbedSpec::new().color(MEDIA_COLOR);
    match &subject.banner_url {
        Some(url) => embed
            .description(format!("{} Banner", subject.mention()))
            .image(url),
        None => embed.description(NO_BANNER),
    }
}

fn render_info(subject: &Subject, color: u32) -> EmbedSpec {
    let mut embed = EmbedSpec::new()
        .description(format!("**Info About {}**", subject.mention()))
        .color(color)
        .field("Joined At", date(subject.joined_at, true), true);

    if !subject.role_mentions.is_empty() {
        embed = embed.field("Roles", join_or_count(&subject.role_mentions, "roles"), true);
    }

    embed
        .field("ID", subject.id.to_string(), true)
        .field("Created At", date(Some(subject.created_at), true), true)
        .author(subject.tag.clone(), Some(subject.avatar.url().to_string()))
        .thumbnail(subject.avatar.url())
}

fn render_roles(subject: &Subject, color: u32) -> EmbedSpec {
    let description = if subject.role_mentions.is_empty() {
        NO_ROLES.to_string()
    } else {
        subject.role_mentions.join(", ")
    };

    EmbedSpec::new()
        .title(format!("{}'s Roles", subject.tag))
        .description(description)
        .color(color)
}
