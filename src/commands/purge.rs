use poise::CreateReply;
use serenity::all::{CreateAllowedMentions, Mentionable, User};

use super::{require_guild, Context};
use crate::{error::AppError, service::purge::PurgeService};

/// Remove a member's recorded reactions from the server
#[poise::command(
    slash_command,
    rename = "purge-reactions",
    guild_only,
    ephemeral,
    default_member_permissions = "KICK_MEMBERS"
)]
pub async fn purge_reactions(
    ctx: Context<'_>,
    #[description = "Member whose reactions are removed"] user: User,
    #[description = "Only reactions from the last N hours (default: all)"]
    #[min = 1]
    #[max = 720]
    hours: Option<i64>,
) -> Result<(), AppError> {
    let Some(guild_id) = require_guild(ctx).await? else {
        return Ok(());
    };

    // Removal is one API call per reaction and can outlive the interaction deadline
    ctx.defer_ephemeral().await?;

    let summary = PurgeService::new(&ctx.data().db, ctx.http())
        .purge(guild_id, user.id.get(), hours)
        .await?;

    let window = match hours {
        Some(hours) => format!(" from the last {} hours", hours),
        None => String::new(),
    };
    let mut content = format!(
        "Removed {} reactions by {}{}.",
        summary.removed,
        user.mention(),
        window
    );
    if summary.discord_failures > 0 {
        content.push_str(&format!(
            "\n{} could not be removed from Discord (message or emoji gone).",
            summary.discord_failures
        ));
    }
    if summary.store_failures > 0 {
        content.push_str(&format!(
            "\n{} could not be deleted from the database.",
            summary.store_failures
        ));
    }

    ctx.send(
        CreateReply::default()
            .content(content)
            .allowed_mentions(CreateAllowedMentions::new()),
    )
    .await?;

    Ok(())
}
