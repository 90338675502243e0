//! Shared state handed to the event handler and slash commands.
//!
//! Built once in `main` and cloned into serenity's handler and poise's user data. Every
//! field is cheap to clone: the connection is a pool and the scrub registry shares its map.

use sea_orm::DatabaseConnection;

use crate::service::scrub::ScrubRegistry;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for the usage and scrub tables.
    pub db: DatabaseConnection,

    /// In-memory scrub index consulted on every reaction-add.
    pub scrubs: ScrubRegistry,

    /// Account whose reaction events are ignored.
    pub system_account_id: u64,
}

impl AppState {
    pub fn new(db: DatabaseConnection, scrubs: ScrubRegistry, system_account_id: u64) -> Self {
        Self {
            db,
            scrubs,
            system_account_id,
        }
    }
}
