//! Reaction event handlers.
//!
//! Converts gateway payloads into `ReactionEvent`s and hands them to `ReactionService`.
//! Reactions in DMs have no guild and are ignored, as is anything without a user id.

use serenity::all::{Channel, ChannelId, Context, MessageId, Reaction};

use crate::{
    model::reaction::ReactionEvent,
    service::reaction::{ReactionOutcome, ReactionService},
    state::AppState,
};

fn service<'a>(state: &'a AppState, ctx: &'a Context) -> ReactionService<'a> {
    ReactionService::new(
        &state.db,
        &state.scrubs,
        &*ctx.http,
        state.system_account_id,
    )
}

/// Handles a reaction being added to a message.
///
/// # Arguments
/// - `state` - Shared state holding the database and scrub registry
/// - `ctx` - Discord context, used to remove reactions of scrubbed members
/// - `reaction` - The added reaction
pub async fn handle_reaction_add(state: &AppState, ctx: Context, reaction: Reaction) {
    let Some(event) = ReactionEvent::from_reaction(&reaction) else {
        return;
    };

    let outcome = service(state, &ctx).on_reaction_added(&event).await;

    tracing::trace!(
        guild_id = event.guild_id,
        message_id = event.message_id,
        user_id = event.user_id,
        ?outcome,
        "Handled reaction add"
    );
}

/// Handles a single reaction being removed from a message.
pub async fn handle_reaction_remove(state: &AppState, ctx: Context, reaction: Reaction) {
    let Some(event) = ReactionEvent::from_reaction(&reaction) else {
        return;
    };

    let outcome = service(state, &ctx).on_reaction_removed(&event).await;

    tracing::trace!(
        guild_id = event.guild_id,
        message_id = event.message_id,
        user_id = event.user_id,
        ?outcome,
        "Handled reaction remove"
    );
}

/// Handles every reaction being cleared from a message.
///
/// The gateway event carries no guild id, so it is resolved from the channel (cache first,
/// then the API). Messages outside guild channels are ignored.
pub async fn handle_reaction_remove_all(
    state: &AppState,
    ctx: Context,
    channel_id: ChannelId,
    message_id: MessageId,
) {
    let guild_id = match channel_id.to_channel(&ctx).await {
        Ok(Channel::Guild(channel)) => channel.guild_id.get(),
        Ok(_) => return,
        Err(e) => {
            tracing::error!(
                channel_id = channel_id.get(),
                message_id = message_id.get(),
                "Failed to resolve guild for cleared reactions: {}",
                e
            );
            return;
        }
    };

    let outcome = service(state, &ctx)
        .on_all_reactions_removed(guild_id, channel_id.get(), message_id.get())
        .await;

    if let ReactionOutcome::Removed(removed) = outcome {
        tracing::debug!(
            guild_id,
            message_id = message_id.get(),
            removed,
            "Cleared emoji usage for message"
        );
    }
}

/// Handles every reaction of one emoji being cleared from a message.
pub async fn handle_reaction_remove_emoji(state: &AppState, ctx: Context, reaction: Reaction) {
    let Some(guild_id) = reaction.guild_id else {
        return;
    };

    let outcome = service(state, &ctx)
        .on_emoji_removed(
            guild_id.get(),
            reaction.channel_id.get(),
            reaction.message_id.get(),
            &reaction.emoji,
        )
        .await;

    if let ReactionOutcome::Removed(removed) = outcome {
        tracing::debug!(
            guild_id = guild_id.get(),
            message_id = reaction.message_id.get(),
            emoji = %reaction.emoji,
            removed,
            "Cleared emoji from message"
        );
    }
}
