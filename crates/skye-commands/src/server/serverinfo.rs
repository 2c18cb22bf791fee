//! `/serverinfo`: statistics about a guild.

use super::snapshot::GuildSnapshot;
use crate::framework::{Context, Error};
use futures::TryStreamExt;
use poise::serenity_prelude as serenity;
use thiserror::Error;
use std::fmt::Display;
use tracing::{debug, warn};

/// Why no guild could be inspected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    /// An owner asked for a guild the bot is not in.
    #[error("Invalid Guild ID given.")]
    InvalidGuildId,

    /// Invoked outside a guild.
    #[error("This command can only be used in a server.")]
    NotInGuild,

    /// The guild is not in the cache yet.
    #[error("Something went wrong while fetching that: server is not cached")]
    Uncached,

    /// Loading the member list from Discord failed.
    #[error("Something went wrong while fetching that: {0}")]
    Fetch(String),
}

/// Picks the guild to inspect.
///
/// Only bot owners may name another guild; `known` tells whether the bot can
/// see a guild. Everyone else always gets the current guild.
pub fn resolve_target(
    requested: Option<&str>,
    is_owner: bool,
    current: Option<serenity::GuildId>,
    known: impl Fn(serenity::GuildId) -> bool,
) -> Result<serenity::GuildId, TargetError> {
    match requested {
        Some(raw) if is_owner => raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|id| *id != 0)
            .map(serenity::GuildId::new)
            .filter(|id| known(*id))
            .ok_or(TargetError::InvalidGuildId),
        _ => current.ok_or(TargetError::NotInGuild),
    }
}

/// Keeps a complete member list; a failed fetch replaces the card entirely.
pub fn members_or_failure<M, E: Display>(fetched: Result<Vec<M>, E>) -> Result<Vec<M>, TargetError> {
    fetched.map_err(|e| TargetError::Fetch(e.to_string()))
}

/// Shows info about the current server.
#[poise::command(slash_command, prefix_command, category = "Misc", aliases("si", "guildinfo"))]
pub async fn serverinfo(
    ctx: Context<'_>,
    #[description = "Guild to inspect (bot owners only)"] guild_id: Option<String>,
) -> Result<(), Error> {
    let is_owner = ctx.framework().options().owners.contains(&ctx.author().id);
    let cache = ctx.cache();
    let target = match resolve_target(guild_id.as_deref(), is_owner, ctx.guild_id(), |id| {
        cache.guild(id).is_some()
    }) {
        Ok(id) => id,
        Err(e) => {
            ctx.say(e.to_string()).await?;
            return Ok(());
        }
    };

    let Some(guild) = cache.guild(target).map(|guild| guild.clone()) else {
        ctx.say(TargetError::Uncached.to_string()).await?;
        return Ok(());
    };

    let members = match members_or_failure(load_members(ctx, &guild).await) {
        Ok(members) => members,
        Err(e) => {
            warn!(guild = %target, "Failed to load members: {e}");
            ctx.say(e.to_string()).await?;
            return Ok(());
        }
    };
    let snapshot = GuildSnapshot::from_guild(&guild, &members);
    debug!(guild = %target, members = members.len(), "Built server snapshot");

    ctx.send(poise::CreateReply::default().embed(snapshot.render().into()))
        .await?;
    Ok(())
}

/// Every member of the guild, paging through HTTP when the cache is incomplete.
async fn load_members(
    ctx: Context<'_>,
    guild: &serenity::Guild,
) -> Result<Vec<serenity::Member>, ::serenity::Error> {
    let cached: Vec<serenity::Member> = guild.members.values().cloned().collect();
    if cached.len() as u64 >= guild.member_count {
        return Ok(cached);
    }

    debug!(guild = %guild.id, cached = cached.len(), total = guild.member_count, "Loading member list");
    guild
        .id
        .members_iter(ctx.serenity_context())
        .try_collect::<Vec<_>>()
        .await
}
