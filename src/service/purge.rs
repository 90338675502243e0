//! Bulk removal of a member's reactions.
//!
//! Each recorded reaction is handled on its own: it is deleted from Discord, then from the
//! store. A failure on one row is logged and the purge moves on to the next.

use sea_orm::DatabaseConnection;

use crate::{
    data::emoji_usage::EmojiUsageRepository, error::AppError,
    service::gateway::ReactionGateway,
};

/// Widest purge window, in hours (30 days); longer windows are clamped.
pub const MAX_PURGE_HOURS: i64 = 720;

/// Result of a purge run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurgeSummary {
    /// Rows deleted from the store.
    pub removed: usize,
    /// Reactions Discord refused to delete (their rows are still dropped).
    pub discord_failures: usize,
    /// Rows that could not be deleted from the store.
    pub store_failures: usize,
}

pub struct PurgeService<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a dyn ReactionGateway,
}

impl<'a> PurgeService<'a> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a dyn ReactionGateway) -> Self {
        Self { db, gateway }
    }

    /// Removes a member's recorded reactions from Discord and from the store.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to purge in
    /// - `user_id` - Member whose reactions are removed
    /// - `max_age_hours` - Only reactions recorded within this window, clamped to
    ///   `1..=MAX_PURGE_HOURS`; `None` purges all
    ///
    /// # Returns
    /// - `Ok(PurgeSummary)` - Counts of removed rows and per-row failures
    /// - `Err(AppError::DbErr)` - Loading the member's reactions failed; nothing was removed
    pub async fn purge(
        &self,
        guild_id: u64,
        user_id: u64,
        max_age_hours: Option<i64>,
    ) -> Result<PurgeSummary, AppError> {
        let repo = EmojiUsageRepository::new(self.db);

        let usages = match max_age_hours {
            Some(hours) => {
                repo.recent_for_user(guild_id, user_id, hours.clamp(1, MAX_PURGE_HOURS))
                    .await?
            }
            None => repo.all_for_user(guild_id, user_id).await?,
        };

        let mut summary = PurgeSummary::default();
        for usage in usages {
            // Likely stale data (message or emoji gone), the row is dropped regardless
            if let Err(e) = self
                .gateway
                .remove_reaction(
                    usage.channel_id,
                    usage.message_id,
                    usage.user_id,
                    &usage.reaction_type(),
                )
                .await
            {
                tracing::error!(
                    guild_id,
                    user_id,
                    emoji_id = %usage.emoji_id,
                    message_id = usage.message_id,
                    "Error removing emoji reaction: {}",
                    e
                );
                summary.discord_failures += 1;
            }

            match repo.remove_by_id(usage.id).await {
                Ok(_) => summary.removed += 1,
                Err(e) => {
                    tracing::error!(usage_id = usage.id, "Error deleting emoji usage: {}", e);
                    summary.store_failures += 1;
                }
            }
        }

        tracing::info!(
            guild_id,
            user_id,
            removed = summary.removed,
            discord_failures = summary.discord_failures,
            store_failures = summary.store_failures,
            "Purged reactions"
        );

        Ok(summary)
    }
}
