//! Scrub factory for creating test scrub entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating persisted scrub entries.
///
/// Inserts rows directly, bypassing the in-memory registry, which is what tests
/// exercising `load()` and `refresh()` need.
pub struct ScrubFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    user_id: u64,
}

impl<'a> ScrubFactory<'a> {
    /// Creates a new ScrubFactory with unique guild and user ids.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id(),
            user_id: next_id(),
        }
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Builds and inserts the scrub entry into the database.
    pub async fn build(self) -> Result<entity::scrub::Model, DbErr> {
        entity::scrub::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id.to_string()),
            user_id: ActiveValue::Set(self.user_id.to_string()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scrub entry for the given guild and user.
pub async fn create_scrub(
    db: &DatabaseConnection,
    guild_id: u64,
    user_id: u64,
) -> Result<entity::scrub::Model, DbErr> {
    ScrubFactory::new(db)
        .guild_id(guild_id)
        .user_id(user_id)
        .build()
        .await
}
