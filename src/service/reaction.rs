//! Reaction ingestion.
//!
//! Decides, per gateway event, whether a reaction is recorded, removed from the store, or
//! scrubbed off Discord. Every failure here is logged and swallowed: a reaction event has no
//! caller to report to, and nothing is retried.

use sea_orm::DatabaseConnection;
use serenity::all::ReactionType;

use crate::{
    data::emoji_usage::EmojiUsageRepository,
    model::reaction::{emoji_identity, ReactionEvent},
    service::{gateway::ReactionGateway, scrub::ScrubRegistry},
};

/// What handling a reaction event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionOutcome {
    /// Event came from the system account and was dropped.
    Ignored,
    /// Reaction belonged to a scrubbed member and was removed from Discord.
    Scrubbed,
    /// Reaction belonged to a scrubbed member but removing it failed; nothing was recorded.
    ScrubFailed,
    /// Reaction was recorded.
    Recorded,
    /// Matching usage rows were deleted.
    Removed(u64),
    /// The store operation failed.
    Failed,
}

pub struct ReactionService<'a> {
    db: &'a DatabaseConnection,
    scrubs: &'a ScrubRegistry,
    gateway: &'a dyn ReactionGateway,
    system_account_id: u64,
}

impl<'a> ReactionService<'a> {
    /// Creates a new ReactionService.
    ///
    /// # Arguments
    /// - `db` - Database connection for the usage store
    /// - `scrubs` - Registry consulted on every reaction-add
    /// - `gateway` - Used to remove reactions of scrubbed members
    /// - `system_account_id` - Account whose add/remove events are ignored
    pub fn new(
        db: &'a DatabaseConnection,
        scrubs: &'a ScrubRegistry,
        gateway: &'a dyn ReactionGateway,
        system_account_id: u64,
    ) -> Self {
        Self {
            db,
            scrubs,
            gateway,
            system_account_id,
        }
    }

    /// Handles a reaction being added.
    ///
    /// Scrubbed members get their reaction removed and nothing is recorded, even when the
    /// removal fails. Everyone else gets a usage row.
    pub async fn on_reaction_added(&self, event: &ReactionEvent) -> ReactionOutcome {
        if event.user_id == self.system_account_id {
            return ReactionOutcome::Ignored;
        }

        if self.scrubs.should_scrub(event.guild_id, event.user_id).await {
            return match self
                .gateway
                .remove_reaction(
                    event.channel_id,
                    event.message_id,
                    event.user_id,
                    &event.emoji,
                )
                .await
            {
                Ok(()) => {
                    tracing::debug!(
                        guild_id = event.guild_id,
                        user_id = event.user_id,
                        message_id = event.message_id,
                        "Scrubbed reaction"
                    );
                    ReactionOutcome::Scrubbed
                }
                Err(e) => {
                    tracing::error!(
                        guild_id = event.guild_id,
                        channel_id = event.channel_id,
                        message_id = event.message_id,
                        user_id = event.user_id,
                        emoji = %event.emoji,
                        "Failed to remove emoji reaction: {}",
                        e
                    );
                    ReactionOutcome::ScrubFailed
                }
            };
        }

        match EmojiUsageRepository::new(self.db)
            .record(event.to_record_param())
            .await
        {
            Ok(_) => ReactionOutcome::Recorded,
            Err(e) => {
                tracing::error!(
                    guild_id = event.guild_id,
                    message_id = event.message_id,
                    user_id = event.user_id,
                    "Failed to log emoji usage: {}",
                    e
                );
                ReactionOutcome::Failed
            }
        }
    }

    /// Handles a single reaction being removed.
    pub async fn on_reaction_removed(&self, event: &ReactionEvent) -> ReactionOutcome {
        if event.user_id == self.system_account_id {
            return ReactionOutcome::Ignored;
        }

        match EmojiUsageRepository::new(self.db)
            .remove(&event.to_key())
            .await
        {
            Ok(removed) => ReactionOutcome::Removed(removed),
            Err(e) => {
                tracing::error!(
                    guild_id = event.guild_id,
                    message_id = event.message_id,
                    user_id = event.user_id,
                    "Failed to delete single emoji usage: {}",
                    e
                );
                ReactionOutcome::Failed
            }
        }
    }

    /// Handles every reaction being cleared from a message.
    pub async fn on_all_reactions_removed(
        &self,
        guild_id: u64,
        channel_id: u64,
        message_id: u64,
    ) -> ReactionOutcome {
        match EmojiUsageRepository::new(self.db)
            .remove_all_for_message(guild_id, channel_id, message_id)
            .await
        {
            Ok(removed) => ReactionOutcome::Removed(removed),
            Err(e) => {
                tracing::error!(
                    guild_id,
                    channel_id,
                    message_id,
                    "Failed to delete all emoji usage for message: {}",
                    e
                );
                ReactionOutcome::Failed
            }
        }
    }

    /// Handles every reaction of one emoji being cleared from a message.
    pub async fn on_emoji_removed(
        &self,
        guild_id: u64,
        channel_id: u64,
        message_id: u64,
        emoji: &ReactionType,
    ) -> ReactionOutcome {
        let (emoji_id, _) = emoji_identity(emoji);

        match EmojiUsageRepository::new(self.db)
            .remove_emoji_for_message(guild_id, channel_id, message_id, &emoji_id)
            .await
        {
            Ok(removed) => ReactionOutcome::Removed(removed),
            Err(e) => {
                tracing::error!(
                    guild_id,
                    message_id,
                    emoji = %emoji,
                    "Failed to delete emoji usage for message: {}",
                    e
                );
                ReactionOutcome::Failed
            }
        }
    }
}
