//! Emoji usage factory for creating test reaction rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test emoji usage rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::emoji_usage::EmojiUsageFactory;
///
/// let usage = EmojiUsageFactory::new(&db)
///     .guild_id(1)
///     .user_id(42)
///     .custom_emoji(900, "pepe")
///     .build()
///     .await?;
/// ```
pub struct EmojiUsageFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    channel_id: u64,
    message_id: u64,
    user_id: u64,
    emoji_id: String,
    emoji_name: String,
    timestamp: DateTime<Utc>,
}

impl<'a> EmojiUsageFactory<'a> {
    /// Creates a new EmojiUsageFactory with default values.
    ///
    /// Defaults:
    /// - guild, channel, message and user ids: unique auto-incremented values
    /// - emoji: the stock `👍` emoji (id and name equal)
    /// - timestamp: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id(),
            channel_id: next_id(),
            message_id: next_id(),
            user_id: next_id(),
            emoji_id: "👍".to_string(),
            emoji_name: "👍".to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn channel_id(mut self, channel_id: u64) -> Self {
        self.channel_id = channel_id;
        self
    }

    pub fn message_id(mut self, message_id: u64) -> Self {
        self.message_id = message_id;
        self
    }

    pub fn user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets a stock (unicode) emoji, whose id and name are the same text.
    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        let emoji = emoji.into();
        self.emoji_id = emoji.clone();
        self.emoji_name = emoji;
        self
    }

    /// Sets a custom guild emoji with a numeric id and a display name.
    pub fn custom_emoji(mut self, emoji_id: u64, name: impl Into<String>) -> Self {
        self.emoji_id = emoji_id.to_string();
        self.emoji_name = name.into();
        self
    }

    /// Sets the recorded timestamp, for age-window tests.
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builds and inserts the usage row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::emoji_usage::Model)` - Created usage row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::emoji_usage::Model, DbErr> {
        entity::emoji_usage::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id.to_string()),
            channel_id: ActiveValue::Set(self.channel_id.to_string()),
            message_id: ActiveValue::Set(self.message_id.to_string()),
            user_id: ActiveValue::Set(self.user_id.to_string()),
            emoji_id: ActiveValue::Set(self.emoji_id),
            emoji_name: ActiveValue::Set(self.emoji_name),
            timestamp: ActiveValue::Set(self.timestamp),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an emoji usage row with default values.
///
/// Shorthand for `EmojiUsageFactory::new(db).build().await`.
pub async fn create_emoji_usage(
    db: &DatabaseConnection,
) -> Result<entity::emoji_usage::Model, DbErr> {
    EmojiUsageFactory::new(db).build().await
}
