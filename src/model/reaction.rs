//! Reaction events as seen by the ingestion service.
//!
//! Gateway payloads are converted into `ReactionEvent` by the bot handler so the service layer
//! can be driven the same way from Discord and from tests.

use serenity::all::{Reaction, ReactionType};

use super::emoji_usage::{EmojiUsageKey, RecordEmojiUsageParam};

/// A reaction added to or removed from a guild message.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionEvent {
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub user_id: u64,
    pub emoji: ReactionType,
}

impl ReactionEvent {
    /// Converts a gateway reaction payload.
    ///
    /// # Returns
    /// - `Some(ReactionEvent)` - Reaction on a guild message by a known user
    /// - `None` - Reaction in a DM or without a user id
    pub fn from_reaction(reaction: &Reaction) -> Option<Self> {
        Some(Self {
            guild_id: reaction.guild_id?.get(),
            channel_id: reaction.channel_id.get(),
            message_id: reaction.message_id.get(),
            user_id: reaction.user_id?.get(),
            emoji: reaction.emoji.clone(),
        })
    }

    /// Id stored for the emoji: the custom emoji id, or the unicode text for stock emoji.
    pub fn emoji_id(&self) -> String {
        emoji_identity(&self.emoji).0
    }

    /// Parameters for recording this event as a usage row.
    pub fn to_record_param(&self) -> RecordEmojiUsageParam {
        let (emoji_id, emoji_name) = emoji_identity(&self.emoji);
        RecordEmojiUsageParam {
            guild_id: self.guild_id,
            channel_id: self.channel_id,
            message_id: self.message_id,
            user_id: self.user_id,
            emoji_id,
            emoji_name,
        }
    }

    /// Exact key of the usage row this event refers to.
    pub fn to_key(&self) -> EmojiUsageKey {
        EmojiUsageKey {
            guild_id: self.guild_id,
            channel_id: self.channel_id,
            message_id: self.message_id,
            user_id: self.user_id,
            emoji_id: self.emoji_id(),
        }
    }
}

/// Splits a reaction type into the (id, name) pair stored per usage row.
pub fn emoji_identity(emoji: &ReactionType) -> (String, String) {
    match emoji {
        ReactionType::Custom { id, name, .. } => {
            (id.get().to_string(), name.clone().unwrap_or_default())
        }
        ReactionType::Unicode(name) => (name.clone(), name.clone()),
        _ => (String::new(), String::new()),
    }
}
