//! Help and slash command registration, both backed by poise builtins.

use crate::framework::{Context, Error};

const EXTRA_TEXT: &str = "Type /help <command> for more info on a command.";

/// Shows the command list or help for one command.
#[poise::command(slash_command, prefix_command, category = "Meta", track_edits)]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Command to show help for"]
    #[rest]
    command: Option<String>,
) -> Result<(), Error> {
    let config = poise::builtins::HelpConfiguration {
        extra_text_at_bottom: EXTRA_TEXT,
        ephemeral: true,
        ..Default::default()
    };
    poise::builtins::help(ctx, command.as_deref(), config).await?;
    Ok(())
}

/// Registers or removes application commands.
#[poise::command(prefix_command, owners_only, hide_in_help, category = "Meta")]
pub async fn register(ctx: Context<'_>) -> Result<(), Error> {
    poise::builtins::register_application_commands_buttons(ctx).await?;
    Ok(())
}
