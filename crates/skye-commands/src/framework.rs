//! Poise framework setup and command registration logic.

use crate::stats::ProcessStats;
use poise::serenity_prelude as serenity;
use skye_config::Config;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Application data accessible in all commands.
#[derive(Debug)]
pub struct Data {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Start time and memory sampling, created before anything else.
    pub process: ProcessStats,
}

impl Data {
    /// Bundles configuration and process statistics.
    pub const fn new(config: Arc<Config>, process: ProcessStats) -> Self {
        Self { config, process }
    }
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Every command the bot registers.
pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        crate::info::userinfo(),
        crate::server::serverinfo(),
        crate::botinfo::botinfo(),
        crate::uptime::uptime(),
        crate::source::source(),
        crate::fun::coinflip(),
        crate::fun::choose(),
        crate::help::help(),
        crate::help::register(),
    ]
}

/// Framework options derived from `config`.
pub fn framework_options(config: &Config) -> poise::FrameworkOptions<Data, Error> {
    poise::FrameworkOptions {
        commands: commands(),
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(config.discord.prefix.clone()),
            mention_as_prefix: true,
            ..Default::default()
        },
        owners: owners(&config.discord.owner_ids),
        on_error: |error| Box::pin(on_error(error)),
        pre_command: |ctx| {
            Box::pin(async move {
                debug!(
                    command = %ctx.command().qualified_name,
                    author = %ctx.author().id,
                    "Executing command"
                );
            })
        },
        ..Default::default()
    }
}

/// Creates a new Poise framework.
pub fn create_framework(config: &Config) -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(framework_options(config))
}

fn owners(ids: &[u64]) -> HashSet<serenity::UserId> {
    ids.iter()
        .filter(|id| **id != 0)
        .map(|id| serenity::UserId::new(*id))
        .collect()
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(command = %ctx.command().qualified_name, "Command failed: {error}");
            if let Err(e) = ctx.say(format!("Something went wrong while running that: {error}")).await {
                warn!("Failed to report command error: {e}");
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!("Error while handling error: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skye_common::test_utils::discord_fixtures::INVOKER_ID;
    use std::collections::BTreeSet;

    #[test]
    fn test_command_names_are_unique() {
        let commands = commands();
        let mut names = HashSet::new();
        for command in &commands {
            assert!(names.insert(command.name.clone()), "duplicate {}", command.name);
            for alias in &command.aliases {
                assert!(names.insert(alias.clone()), "duplicate alias {alias}");
            }
        }
    }

    #[test]
    fn test_every_command_has_a_category() {
        let categories: BTreeSet<String> = commands()
            .iter()
            .map(|c| c.category.clone().unwrap_or_default())
            .collect();
        let expected: BTreeSet<String> = ["Bot Info", "Fun", "Meta", "Misc"].map(String::from).into();
        assert_eq!(categories, expected);
    }

    #[test]
    fn test_options_follow_config() {
        let mut config = Config::default();
        config.discord.prefix = "?".to_string();
        config.discord.owner_ids = vec![INVOKER_ID, 0];
        let options = framework_options(&config);
        assert_eq!(options.prefix_options.prefix.as_deref(), Some("?"));
        assert_eq!(options.owners.len(), 1);
        assert!(options.owners.contains(&serenity::UserId::new(INVOKER_ID)));
    }
}
