//! Domain model for persisted scrub entries.

use sea_orm::DbErr;

use super::parse_snowflake;

/// A (guild, user) pair whose reactions are removed as soon as they are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scrub {
    pub guild_id: u64,
    pub user_id: u64,
}

impl Scrub {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::scrub::Model) -> Result<Self, DbErr> {
        Ok(Self {
            guild_id: parse_snowflake("guild_id", &entity.guild_id)?,
            user_id: parse_snowflake("user_id", &entity.user_id)?,
        })
    }
}
