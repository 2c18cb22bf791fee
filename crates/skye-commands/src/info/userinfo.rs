//! `/userinfo`: the interactive user card.

use super::menu::{custom_id, select_row};
use super::session::{IdleDeadline, InfoError, InfoSession};
use super::subject::Subject;
use super::view::InfoView;
use crate::framework::{Context, Error};
use poise::serenity_prelude as serenity;
use poise::CreateReply;
use std::fmt::Display;
use std::time::Instant;
use tracing::{debug, warn};

/// Discord's "Unknown Member" error code.
const UNKNOWN_MEMBER: isize = 10007;

/// Shows information about a member, switchable through a dropdown.
#[poise::command(slash_command, prefix_command, category = "Misc", aliases("ui", "whois"))]
pub async fn userinfo(
    ctx: Context<'_>,
    #[description = "Member to inspect, defaults to you"] member: Option<serenity::User>,
) -> Result<(), Error> {
    let user = member.as_ref().unwrap_or_else(|| ctx.author());
    let subject = match resolve_subject(ctx, user).await {
        Ok(subject) => subject,
        Err(e) => {
            ctx.say(e.to_string()).await?;
            return Ok(());
        }
    };
    let config = &ctx.data().config;

    let mut session = InfoSession::new(ctx.author().id.get(), subject, config.appearance.embed_color);
    let id = custom_id(ctx.id());
    let reply = ctx
        .send(
            CreateReply::default()
                .embed(session.rendered().clone().into())
                .components(vec![select_row(&id, session.selected(), false)]),
        )
        .await?;

    let mut deadline = IdleDeadline::new(config.interaction_timeout(), Instant::now());
    loop {
        let remaining = deadline.remaining(Instant::now());
        if remaining.is_zero() {
            break;
        }
        let filter_id = id.clone();
        let press = serenity::ComponentInteractionCollector::new(ctx.serenity_context())
            .filter(move |press| press.data.custom_id == filter_id)
            .timeout(remaining)
            .await;
        let Some(press) = press else { break };
        handle_selection(ctx, &mut session, &mut deadline, &id, &press).await?;
    }

    session.expire();
    debug!(invoker = session.invoker(), "Info card expired");
    reply
        .edit(
            ctx,
            CreateReply::default()
                .embed(session.rendered().clone().into())
                .components(vec![select_row(&id, session.selected(), true)]),
        )
        .await?;
    Ok(())
}

/// Prefers the guild member so joined-at, roles and guild avatar are known.
async fn resolve_subject(ctx: Context<'_>, user: &serenity::User) -> Result<Subject, InfoError> {
    if let Some(guild_id) = ctx.guild_id() {
        match guild_id.member(ctx.serenity_context(), user.id).await {
            Ok(member) => return Ok(Subject::from_member(&member)),
            Err(e) => {
                if let Some(failure) = member_lookup_failure(discord_code(&e), &e) {
                    warn!(user = %user.id, guild = %guild_id, "Failed to fetch member: {e}");
                    return Err(failure);
                }
                debug!(user = %user.id, "Not a member, showing plain user");
            }
        }
    }
    Ok(Subject::from_user(user))
}

/// The error to show for a failed member lookup, or `None` when the user
/// simply is not in the guild.
pub fn member_lookup_failure(code: Option<isize>, error: &impl Display) -> Option<InfoError> {
    (code != Some(UNKNOWN_MEMBER)).then(|| InfoError::Fetch(error.to_string()))
}

fn discord_code(error: &::serenity::Error) -> Option<isize> {
    match error {
        ::serenity::Error::Http(::serenity::http::HttpError::UnsuccessfulRequest(response)) => {
            Some(response.error.code)
        }
        _ => None,
    }
}

async fn handle_selection(
    ctx: Context<'_>,
    session: &mut InfoSession,
    deadline: &mut IdleDeadline,
    id: &str,
    press: &serenity::ComponentInteraction,
) -> Result<(), Error> {
    let actor = press.user.id.get();
    if let Err(denied) = deadline.refresh(session, actor, Instant::now()) {
        debug!(actor, invoker = session.invoker(), "Rejected info card selection");
        return respond(ctx, press, denied.to_string(), true).await;
    }

    let view = match selected_view(&press.data.kind) {
        Ok(view) => view,
        Err(e) => return respond(ctx, press, e.to_string(), true).await,
    };

    if view == InfoView::Banner {
        let user_id = serenity::UserId::new(session.subject().id);
        match ctx.http().get_user(user_id).await {
            Ok(user) => session.refresh_banner(actor, user.banner_url())?,
            Err(e) => {
                warn!(user = %user_id, "Failed to fetch user for banner: {e}");
                return respond(ctx, press, InfoError::Fetch(e.to_string()).to_string(), false).await;
            }
        }
    }

    let embed = session.select(actor, view)?.clone();
    press
        .create_response(
            ctx.serenity_context(),
            serenity::CreateInteractionResponse::UpdateMessage(
                serenity::CreateInteractionResponseMessage::new()
                    .embed(embed.into())
                    .components(vec![select_row(id, view, false)]),
            ),
        )
        .await?;
    Ok(())
}

async fn respond(
    ctx: Context<'_>,
    press: &serenity::ComponentInteraction,
    content: String,
    ephemeral: bool,
) -> Result<(), Error> {
    press
        .create_response(
            ctx.serenity_context(),
            serenity::CreateInteractionResponse::Message(
                serenity::CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(ephemeral),
            ),
        )
        .await?;
    Ok(())
}

/// The view picked in a dropdown interaction.
pub fn selected_view(kind: &serenity::ComponentInteractionDataKind) -> Result<InfoView, InfoError> {
    match kind {
        serenity::ComponentInteractionDataKind::StringSelect { values } => values
            .first()
            .ok_or_else(|| InfoError::UnknownView(String::new()))?
            .parse(),
        _ => Err(InfoError::UnknownView(String::new())),
    }
}
