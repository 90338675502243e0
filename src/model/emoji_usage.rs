//! Domain models for recorded reaction usage.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serenity::all::{EmojiId, ReactionType};

use super::parse_snowflake;

/// One recorded reaction-add event.
#[derive(Debug, Clone, PartialEq)]
pub struct EmojiUsage {
    /// Store-assigned surrogate key.
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub user_id: u64,
    /// Numeric id for custom emoji, the unicode text for stock emoji, empty when unknown.
    pub emoji_id: String,
    /// Display name; equal to `emoji_id` for stock emoji.
    pub emoji_name: String,
    /// Time the row was recorded.
    pub timestamp: DateTime<Utc>,
}

impl EmojiUsage {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(EmojiUsage)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - One of the stored snowflakes failed to parse
    pub fn from_entity(entity: entity::emoji_usage::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake("guild_id", &entity.guild_id)?,
            channel_id: parse_snowflake("channel_id", &entity.channel_id)?,
            message_id: parse_snowflake("message_id", &entity.message_id)?,
            user_id: parse_snowflake("user_id", &entity.user_id)?,
            emoji_id: entity.emoji_id,
            emoji_name: entity.emoji_name,
            timestamp: entity.timestamp,
        })
    }

    /// Rebuilds the reaction type needed to delete this reaction through the Discord API.
    pub fn reaction_type(&self) -> ReactionType {
        match self.emoji_id.parse::<u64>() {
            Ok(id) if id != 0 && self.emoji_id != self.emoji_name => ReactionType::Custom {
                animated: false,
                id: EmojiId::new(id),
                name: (!self.emoji_name.is_empty()).then(|| self.emoji_name.clone()),
            },
            _ => ReactionType::Unicode(self.emoji_name.clone()),
        }
    }
}

/// Parameters for recording a reaction.
#[derive(Debug, Clone)]
pub struct RecordEmojiUsageParam {
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub user_id: u64,
    pub emoji_id: String,
    pub emoji_name: String,
}

/// Exact key identifying one live reaction.
#[derive(Debug, Clone)]
pub struct EmojiUsageKey {
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub user_id: u64,
    pub emoji_id: String,
}

/// Aggregated count of one emoji.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiCount {
    pub emoji_id: String,
    pub emoji_name: String,
    pub count: i64,
}

impl EmojiCount {
    /// Renders the emoji for a Discord message.
    ///
    /// Stock emoji (id equal to name) render as plain text, custom emoji as a
    /// `<:name:id>` markup token, and custom emoji without a known name as their id.
    pub fn display(&self) -> String {
        if self.emoji_id == self.emoji_name || self.emoji_id.is_empty() {
            self.emoji_name.clone()
        } else if self.emoji_name.is_empty() {
            self.emoji_id.clone()
        } else {
            format!("<:{}:{}>", self.emoji_name, self.emoji_id)
        }
    }
}

/// Aggregated count of one user's reactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCount {
    pub user_id: u64,
    pub count: i64,
}

impl UserCount {
    /// Renders the user as a mention.
    pub fn display(&self) -> String {
        format!("<@{}>", self.user_id)
    }
}
