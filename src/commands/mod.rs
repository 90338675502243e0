//! Slash commands.
//!
//! Every command is guild only and hidden from members without `KICK_MEMBERS` by default.
//! Errors returned by a command are logged and answered with a generic reply by `on_error`.

use poise::CreateReply;

use crate::{error::AppError, state::AppState};

pub mod leaderboard;
pub mod purge;
pub mod scrub;

pub type Context<'a> = poise::Context<'a, AppState, AppError>;

/// Every slash command the bot registers.
pub fn commands() -> Vec<poise::Command<AppState, AppError>> {
    vec![
        leaderboard::show_top_emojis(),
        leaderboard::show_top_users(),
        scrub::scrub_enable(),
        scrub::scrub_disable(),
        purge::purge_reactions(),
    ]
}

/// Replies that the command needs a guild. Returns `None` in that case.
async fn require_guild(ctx: Context<'_>) -> Result<Option<u64>, AppError> {
    match ctx.guild_id() {
        Some(guild_id) => Ok(Some(guild_id.get())),
        None => {
            ctx.send(
                CreateReply::default()
                    .content("This command can only be used in a server.")
                    .ephemeral(true),
            )
            .await?;
            Ok(None)
        }
    }
}

/// Handles errors raised while running commands.
pub async fn on_error(error: poise::FrameworkError<'_, AppState, AppError>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!(
                command = %ctx.command().qualified_name,
                guild_id = ctx.guild_id().map(|id| id.get()),
                user_id = ctx.author().id.get(),
                "Error running command: {}",
                error
            );

            if let Err(e) = ctx
                .send(
                    CreateReply::default()
                        .content("Something went wrong, please try again later.")
                        .ephemeral(true),
                )
                .await
            {
                tracing::error!("Failed to send error reply: {}", e);
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!("Failed to handle framework error: {}", e);
            }
        }
    }
}
