//! Scrub repository for the persisted (guild, user) scrub entries.
//!
//! The table is the source of truth for who is being scrubbed; the in-memory index in
//! `service::scrub::ScrubRegistry` is rebuilt from it on startup.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::scrub::Scrub;

use entity::scrub::Column;

/// Repository providing database operations for scrub entries.
pub struct ScrubRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScrubRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a scrub entry, keeping the existing row if the pair is already present.
    ///
    /// # Returns
    /// - `Ok(Scrub)` - The created or existing entry
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn create(&self, guild_id: u64, user_id: u64) -> Result<Scrub, DbErr> {
        let existing = entity::prelude::Scrub::find()
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(entity) => entity,
            None => {
                entity::scrub::ActiveModel {
                    id: ActiveValue::NotSet,
                    guild_id: ActiveValue::Set(guild_id.to_string()),
                    user_id: ActiveValue::Set(user_id.to_string()),
                }
                .insert(self.db)
                .await?
            }
        };

        Scrub::from_entity(entity)
    }

    /// Deletes the scrub entry for a guild member.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 if the user was not being scrubbed)
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, guild_id: u64, user_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::Scrub::delete_many()
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets every persisted scrub entry.
    pub async fn get_all(&self) -> Result<Vec<Scrub>, DbErr> {
        let entities = entity::prelude::Scrub::find().all(self.db).await?;

        entities.into_iter().map(Scrub::from_entity).collect()
    }
}
