//! `source`: links to the code behind a command.
//!
//! The build script records where every `#[poise::command]` function lives
//! in this crate. Commands implemented by poise itself link into the
//! framework repository instead.

use crate::framework::{Context, Data, Error};
use skye_config::schema::LinksConfig;
use thiserror::Error;
use tracing::warn;

/// Location of one command function in the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceEntry {
    /// Rust function name.
    pub function: &'static str,
    /// Path relative to the repository root.
    pub path: &'static str,
    /// First line, 1-based, attribute included.
    pub first_line: usize,
    /// Last line, 1-based.
    pub last_line: usize,
}

include!(concat!(env!("OUT_DIR"), "/source_index.rs"));

/// Commands whose behaviour lives in poise, with the file implementing it.
pub const LIBRARY_COMMANDS: [(&str, &str); 2] = [
    ("help", "src/builtins/help.rs"),
    ("register", "src/builtins/register.rs"),
];

/// Reply for names that match no command.
pub const NOT_FOUND: &str = "Could not find command.";

/// A registered command whose source could not be located.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    /// The function is missing from the build-time index.
    #[error("no source recorded for `{0}`")]
    NotIndexed(String),
}

impl SourceError {
    /// Short name of the error, shown before the message.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotIndexed(_) => "NotIndexed",
        }
    }
}

/// Finds a command by qualified name; dots or spaces separate subcommands.
pub fn find_command<'a>(
    commands: &'a [poise::Command<Data, Error>],
    query: &str,
) -> Option<&'a poise::Command<Data, Error>> {
    let mut segments = query
        .split(|c: char| c == '.' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let mut current = find_named(commands, segments.next()?)?;
    for segment in segments {
        current = find_named(&current.subcommands, segment)?;
    }
    Some(current)
}

fn find_named<'a>(
    commands: &'a [poise::Command<Data, Error>],
    name: &str,
) -> Option<&'a poise::Command<Data, Error>> {
    commands
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name) || c.aliases.iter().any(|a| a.eq_ignore_ascii_case(name)))
}

/// Link to the source of the command function named `function`.
pub fn source_link(function: &str, links: &LinksConfig, index: &[SourceEntry]) -> Result<String, SourceError> {
    if let Some((_, path)) = LIBRARY_COMMANDS.iter().find(|(name, _)| *name == function) {
        return Ok(format!(
            "<{}/blob/{}/{path}>",
            links.library_repository, links.library_branch
        ));
    }
    let entry = index
        .iter()
        .find(|entry| entry.function == function)
        .ok_or_else(|| SourceError::NotIndexed(function.to_string()))?;
    Ok(format!(
        "<{}/blob/{}/{}#L{}-L{}>",
        links.source_repository, links.source_branch, entry.path, entry.first_line, entry.last_line
    ))
}

/// The whole reply of the `source` command.
pub fn source_reply(
    commands: &[poise::Command<Data, Error>],
    query: Option<&str>,
    links: &LinksConfig,
    index: &[SourceEntry],
) -> String {
    let Some(query) = query.map(str::trim).filter(|q| !q.is_empty()) else {
        return format!("<{}>", links.source_repository);
    };
    let Some(command) = find_command(commands, query) else {
        return NOT_FOUND.to_string();
    };
    match source_link(&command.source_code_name, links, index) {
        Ok(link) => link,
        Err(e) => {
            warn!(command = %command.qualified_name, "Source lookup failed: {e}");
            format!("**Could not retrieve source:**\n{}:{e}", e.kind())
        }
    }
}

/// Displays my full source code or for a specific command.
#[poise::command(slash_command, prefix_command, category = "Bot Info", aliases("src"))]
pub async fn source(
    ctx: Context<'_>,
    #[description = "The command to display the source code for"]
    #[rest]
    command: Option<String>,
) -> Result<(), Error> {
    let reply = source_reply(
        &ctx.framework().options().commands,
        command.as_deref(),
        &ctx.data().config.links,
        SOURCE_INDEX,
    );
    ctx.say(reply).await?;
    Ok(())
}
