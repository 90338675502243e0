use poise::CreateReply;
use serenity::all::CreateAllowedMentions;

use super::{require_guild, Context};
use crate::{
    error::AppError,
    service::leaderboard::{
        render_top_emojis, render_top_users, split_message, LeaderboardService, DEFAULT_AMOUNT,
        MESSAGE_LIMIT,
    },
};

/// Show the most used emojis in this server
#[poise::command(
    slash_command,
    rename = "show-top-emojis",
    guild_only,
    default_member_permissions = "KICK_MEMBERS"
)]
pub async fn show_top_emojis(
    ctx: Context<'_>,
    #[description = "Number of emojis to show (default 5)"]
    #[min = 1]
    #[max = 20]
    amount: Option<u64>,
) -> Result<(), AppError> {
    let Some(guild_id) = require_guild(ctx).await? else {
        return Ok(());
    };

    ctx.defer().await?;

    let entries = LeaderboardService::new(&ctx.data().db)
        .top_emojis(guild_id, amount.unwrap_or(DEFAULT_AMOUNT))
        .await?;

    send_without_mentions(ctx, &render_top_emojis(&entries)).await
}

/// Show the members who react the most in this server
#[poise::command(
    slash_command,
    rename = "show-top-users",
    guild_only,
    default_member_permissions = "KICK_MEMBERS"
)]
pub async fn show_top_users(
    ctx: Context<'_>,
    #[description = "Number of users to show (default 5)"]
    #[min = 1]
    #[max = 20]
    amount: Option<u64>,
) -> Result<(), AppError> {
    let Some(guild_id) = require_guild(ctx).await? else {
        return Ok(());
    };

    ctx.defer().await?;

    let entries = LeaderboardService::new(&ctx.data().db)
        .top_users(guild_id, amount.unwrap_or(DEFAULT_AMOUNT))
        .await?;

    send_without_mentions(ctx, &render_top_users(&entries)).await
}

/// Sends the leaderboard, split across messages if needed, without pinging anyone listed.
async fn send_without_mentions(ctx: Context<'_>, text: &str) -> Result<(), AppError> {
    for message in split_message(text, MESSAGE_LIMIT) {
        ctx.send(
            CreateReply::default()
                .content(message)
                .allowed_mentions(CreateAllowedMentions::new()),
        )
        .await?;
    }

    Ok(())
}
