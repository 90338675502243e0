use poise::CreateReply;
use serenity::all::{CreateAllowedMentions, Mentionable, User};

use super::{require_guild, Context};
use crate::error::AppError;

/// Automatically remove every reaction a member adds
#[poise::command(
    slash_command,
    rename = "scrub-enable",
    guild_only,
    ephemeral,
    default_member_permissions = "KICK_MEMBERS"
)]
pub async fn scrub_enable(
    ctx: Context<'_>,
    #[description = "Member whose reactions are removed"] user: User,
) -> Result<(), AppError> {
    let Some(guild_id) = require_guild(ctx).await? else {
        return Ok(());
    };

    ctx.data().scrubs.enable(guild_id, user.id.get()).await?;

    let content = format!("Reactions from {} will now be removed.", user.mention());

    reply(ctx, guild_id, content).await
}

/// Stop removing a member's reactions
#[poise::command(
    slash_command,
    rename = "scrub-disable",
    guild_only,
    ephemeral,
    default_member_permissions = "KICK_MEMBERS"
)]
pub async fn scrub_disable(
    ctx: Context<'_>,
    #[description = "Member whose reactions are kept again"] user: User,
) -> Result<(), AppError> {
    let Some(guild_id) = require_guild(ctx).await? else {
        return Ok(());
    };

    let was_scrubbed = ctx.data().scrubs.disable(guild_id, user.id.get()).await?;

    let content = if was_scrubbed {
        format!("Reactions from {} are no longer removed.", user.mention())
    } else {
        format!("Reactions from {} were not being removed.", user.mention())
    };

    reply(ctx, guild_id, content).await
}

/// Replies with the outcome followed by everyone currently scrubbed in the guild.
async fn reply(ctx: Context<'_>, guild_id: u64, mut content: String) -> Result<(), AppError> {
    let scrubbed = ctx.data().scrubs.scrubbing_in_guild(guild_id).await;
    if scrubbed.is_empty() {
        content.push_str("\nNobody is being scrubbed in this server.");
    } else {
        let mentions: Vec<String> = scrubbed.iter().map(|id| format!("<@{}>", id)).collect();
        content.push_str(&format!("\nCurrently scrubbed: {}", mentions.join(", ")));
    }

    ctx.send(
        CreateReply::default()
            .content(content)
            .allowed_mentions(CreateAllowedMentions::new()),
    )
    .await?;

    Ok(())
}
