//! Emoji usage repository for recording reactions and aggregating leaderboards.
//!
//! Each row of `emoji_usage` is one live reaction. Rows are inserted when a reaction is added
//! and deleted when it is removed, so aggregate counts always describe reactions that are still
//! visible on Discord (minus whatever was scrubbed or purged).

use chrono::{Duration, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::{
    emoji_usage::{EmojiCount, EmojiUsage, EmojiUsageKey, RecordEmojiUsageParam, UserCount},
    parse_snowflake,
};

use entity::emoji_usage::Column;

/// Raw aggregate row for per-emoji counts.
#[derive(Debug, FromQueryResult)]
struct EmojiCountRow {
    emoji_id: String,
    emoji_name: String,
    count: i64,
}

impl From<EmojiCountRow> for EmojiCount {
    fn from(row: EmojiCountRow) -> Self {
        Self {
            emoji_id: row.emoji_id,
            emoji_name: row.emoji_name,
            count: row.count,
        }
    }
}

/// Raw aggregate row for per-user counts.
#[derive(Debug, FromQueryResult)]
struct UserCountRow {
    user_id: String,
    count: i64,
}

impl UserCountRow {
    fn into_user_count(self) -> Result<UserCount, DbErr> {
        Ok(UserCount {
            user_id: parse_snowflake("user_id", &self.user_id)?,
            count: self.count,
        })
    }
}

/// Repository providing database operations for recorded reactions.
pub struct EmojiUsageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmojiUsageRepository<'a> {
    /// Creates a new EmojiUsageRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records one reaction with the current time as its timestamp.
    ///
    /// No uniqueness check is done here; the gateway delivers one add event per reaction.
    ///
    /// # Returns
    /// - `Ok(EmojiUsage)` - The inserted row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn record(&self, param: RecordEmojiUsageParam) -> Result<EmojiUsage, DbErr> {
        let entity = entity::emoji_usage::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            message_id: ActiveValue::Set(param.message_id.to_string()),
            user_id: ActiveValue::Set(param.user_id.to_string()),
            emoji_id: ActiveValue::Set(param.emoji_id),
            emoji_name: ActiveValue::Set(param.emoji_name),
            timestamp: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        EmojiUsage::from_entity(entity)
    }

    /// Deletes every row matching the exact reaction key (normally zero or one).
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn remove(&self, key: &EmojiUsageKey) -> Result<u64, DbErr> {
        let result = entity::prelude::EmojiUsage::delete_many()
            .filter(Column::GuildId.eq(key.guild_id.to_string()))
            .filter(Column::ChannelId.eq(key.channel_id.to_string()))
            .filter(Column::MessageId.eq(key.message_id.to_string()))
            .filter(Column::UserId.eq(key.user_id.to_string()))
            .filter(Column::EmojiId.eq(key.emoji_id.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes one row by its surrogate key.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when the id no longer exists)
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn remove_by_id(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::EmojiUsage::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every row for a message, used when all of its reactions are cleared.
    pub async fn remove_all_for_message(
        &self,
        guild_id: u64,
        channel_id: u64,
        message_id: u64,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::EmojiUsage::delete_many()
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::ChannelId.eq(channel_id.to_string()))
            .filter(Column::MessageId.eq(message_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every row for one emoji on a message, used when that emoji is cleared.
    pub async fn remove_emoji_for_message(
        &self,
        guild_id: u64,
        channel_id: u64,
        message_id: u64,
        emoji_id: &str,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::EmojiUsage::delete_many()
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::ChannelId.eq(channel_id.to_string()))
            .filter(Column::MessageId.eq(message_id.to_string()))
            .filter(Column::EmojiId.eq(emoji_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every row recorded for a user, across all guilds.
    ///
    /// Used on startup to drop rows recorded for the system account by older builds.
    pub async fn remove_all_for_user(&self, user_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::EmojiUsage::delete_many()
            .filter(Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the most used emojis in a guild.
    ///
    /// Rows are grouped by emoji id only, so a renamed custom emoji stays one entry; the
    /// greatest recorded name is reported.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to aggregate
    /// - `limit` - Maximum number of emojis returned
    ///
    /// # Returns
    /// - `Ok(Vec<EmojiCount>)` - Emojis ordered by count, highest first; tie order unspecified
    /// - `Err(DbErr)` - Database error during query
    pub async fn top_emojis(&self, guild_id: u64, limit: u64) -> Result<Vec<EmojiCount>, DbErr> {
        let rows = entity::prelude::EmojiUsage::find()
            .select_only()
            .column(Column::EmojiId)
            .column_as(Expr::cust("MAX(emoji_name)"), "emoji_name")
            .column_as(Expr::cust("COUNT(*)"), "count")
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .group_by(Column::EmojiId)
            .order_by_desc(Expr::cust("COUNT(*)"))
            .limit(limit)
            .into_model::<EmojiCountRow>()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(EmojiCount::from).collect())
    }

    /// Gets the users who reacted the most in a guild.
    ///
    /// # Returns
    /// - `Ok(Vec<UserCount>)` - Users ordered by count, highest first; tie order unspecified
    /// - `Err(DbErr)` - Database error during query or an unparsable stored user id
    pub async fn top_users(&self, guild_id: u64, limit: u64) -> Result<Vec<UserCount>, DbErr> {
        let rows = entity::prelude::EmojiUsage::find()
            .select_only()
            .column(Column::UserId)
            .column_as(Expr::cust("COUNT(*)"), "count")
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .group_by(Column::UserId)
            .order_by_desc(Expr::cust("COUNT(*)"))
            .limit(limit)
            .into_model::<UserCountRow>()
            .all(self.db)
            .await?;

        rows.into_iter().map(UserCountRow::into_user_count).collect()
    }

    /// Gets the users who reacted with one emoji the most in a guild.
    pub async fn top_users_for_emoji(
        &self,
        guild_id: u64,
        emoji_id: &str,
        limit: u64,
    ) -> Result<Vec<UserCount>, DbErr> {
        let rows = entity::prelude::EmojiUsage::find()
            .select_only()
            .column(Column::UserId)
            .column_as(Expr::cust("COUNT(*)"), "count")
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::EmojiId.eq(emoji_id))
            .group_by(Column::UserId)
            .order_by_desc(Expr::cust("COUNT(*)"))
            .limit(limit)
            .into_model::<UserCountRow>()
            .all(self.db)
            .await?;

        rows.into_iter().map(UserCountRow::into_user_count).collect()
    }

    /// Gets the emojis one user reacted with the most in a guild.
    pub async fn top_emojis_for_user(
        &self,
        guild_id: u64,
        user_id: u64,
        limit: u64,
    ) -> Result<Vec<EmojiCount>, DbErr> {
        let rows = entity::prelude::EmojiUsage::find()
            .select_only()
            .column(Column::EmojiId)
            .column_as(Expr::cust("MAX(emoji_name)"), "emoji_name")
            .column_as(Expr::cust("COUNT(*)"), "count")
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::UserId.eq(user_id.to_string()))
            .group_by(Column::EmojiId)
            .order_by_desc(Expr::cust("COUNT(*)"))
            .limit(limit)
            .into_model::<EmojiCountRow>()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(EmojiCount::from).collect())
    }

    /// Gets a user's reactions recorded within the last `max_age_hours`, newest first.
    pub async fn recent_for_user(
        &self,
        guild_id: u64,
        user_id: u64,
        max_age_hours: i64,
    ) -> Result<Vec<EmojiUsage>, DbErr> {
        let cutoff = Utc::now() - Duration::hours(max_age_hours);

        let entities = entity::prelude::EmojiUsage::find()
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::UserId.eq(user_id.to_string()))
            .filter(Column::Timestamp.gte(cutoff))
            .order_by_desc(Column::Timestamp)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(EmojiUsage::from_entity).collect()
    }

    /// Gets every reaction recorded for a user in a guild, newest first.
    pub async fn all_for_user(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Vec<EmojiUsage>, DbErr> {
        let entities = entity::prelude::EmojiUsage::find()
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::UserId.eq(user_id.to_string()))
            .order_by_desc(Column::Timestamp)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(EmojiUsage::from_entity).collect()
    }
}
