//! Outbound reaction removal.
//!
//! Scrubbing and purging both delete reactions on Discord. They go through `ReactionGateway`
//! so the services can run against `serenity::http::Http` in production and a recording double
//! in tests.

use serenity::all::{ChannelId, MessageId, ReactionType, UserId};
use serenity::async_trait;
use serenity::http::Http;

/// Removes a single user's reaction from a message.
#[async_trait]
pub trait ReactionGateway: Send + Sync {
    /// Deletes `user_id`'s `emoji` reaction from the message.
    ///
    /// # Returns
    /// - `Ok(())` - Reaction removed
    /// - `Err(serenity::Error)` - Discord rejected the request or the request failed
    async fn remove_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        user_id: u64,
        emoji: &ReactionType,
    ) -> Result<(), serenity::Error>;
}

#[async_trait]
impl ReactionGateway for Http {
    async fn remove_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        user_id: u64,
        emoji: &ReactionType,
    ) -> Result<(), serenity::Error> {
        self.delete_reaction(
            ChannelId::new(channel_id),
            MessageId::new(message_id),
            UserId::new(user_id),
            emoji,
        )
        .await
    }
}
