//! In-memory scrub index.
//!
//! `ScrubRegistry` answers "is this member being scrubbed?" for every reaction-add event, so
//! lookups must not touch the database. The `scrub` table stays the source of truth: the map
//! is rebuilt from it on startup (and on demand through `refresh`), and every mutation is
//! written to storage before it is applied to memory.

use sea_orm::{DatabaseConnection, DbErr};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::data::scrub::ScrubRepository;

/// guild id -> users being scrubbed in that guild
type ScrubMap = HashMap<u64, HashSet<u64>>;

/// Process-wide index of scrubbed members, shared by the event handler and commands.
///
/// Cloning is cheap; clones share the same map and connection pool.
#[derive(Clone)]
pub struct ScrubRegistry {
    db: DatabaseConnection,
    scrubs: Arc<RwLock<ScrubMap>>,
    /// Serializes enable/disable so storage and memory apply mutations in the same order.
    mutation: Arc<Mutex<()>>,
}

impl ScrubRegistry {
    /// Creates an empty registry. Call `refresh` before wiring it to the gateway.
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            scrubs: Arc::new(RwLock::new(HashMap::new())),
            mutation: Arc::new(Mutex::new(())),
        }
    }

    /// Creates a registry populated from the persisted scrub entries.
    ///
    /// # Returns
    /// - `Ok(ScrubRegistry)` - Registry mirroring the `scrub` table
    /// - `Err(DbErr)` - Failed to read the persisted entries
    pub async fn load(db: DatabaseConnection) -> Result<Self, DbErr> {
        let registry = Self::new(db);
        let count = registry.refresh().await?;

        tracing::info!(scrubs = count, "Loaded scrub registry");

        Ok(registry)
    }

    /// Rebuilds the in-memory map from storage, discarding the current contents.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of entries loaded
    /// - `Err(DbErr)` - Failed to read the persisted entries; memory is left untouched
    pub async fn refresh(&self) -> Result<usize, DbErr> {
        let _guard = self.mutation.lock().await;

        let entries = ScrubRepository::new(&self.db).get_all().await?;

        let mut rebuilt = ScrubMap::new();
        for entry in &entries {
            rebuilt
                .entry(entry.guild_id)
                .or_default()
                .insert(entry.user_id);
        }

        *self.scrubs.write().await = rebuilt;

        Ok(entries.len())
    }

    /// Checks whether a member's reactions should be removed.
    pub async fn should_scrub(&self, guild_id: u64, user_id: u64) -> bool {
        self.scrubs
            .read()
            .await
            .get(&guild_id)
            .is_some_and(|users| users.contains(&user_id))
    }

    /// Starts scrubbing a member.
    ///
    /// Persists the entry first; the in-memory map is only updated once storage succeeded.
    ///
    /// # Returns
    /// - `Ok(())` - Member is now scrubbed (also when they already were)
    /// - `Err(DbErr)` - Failed to persist; the member is not scrubbed
    pub async fn enable(&self, guild_id: u64, user_id: u64) -> Result<(), DbErr> {
        let _guard = self.mutation.lock().await;

        ScrubRepository::new(&self.db)
            .create(guild_id, user_id)
            .await?;

        self.scrubs
            .write()
            .await
            .entry(guild_id)
            .or_default()
            .insert(user_id);

        tracing::info!(guild_id, user_id, "Enabled scrub");

        Ok(())
    }

    /// Stops scrubbing a member.
    ///
    /// Deletes the persisted entry first; the in-memory map is only updated once storage
    /// succeeded, so a failed delete leaves the member scrubbed in both places.
    ///
    /// # Returns
    /// - `Ok(true)` - Member was scrubbed and no longer is
    /// - `Ok(false)` - Member was not being scrubbed
    /// - `Err(DbErr)` - Failed to delete; the member is still scrubbed
    pub async fn disable(&self, guild_id: u64, user_id: u64) -> Result<bool, DbErr> {
        let _guard = self.mutation.lock().await;

        let deleted = ScrubRepository::new(&self.db)
            .delete(guild_id, user_id)
            .await?;

        let mut scrubs = self.scrubs.write().await;
        let was_present = match scrubs.get_mut(&guild_id) {
            Some(users) => {
                let removed = users.remove(&user_id);
                if users.is_empty() {
                    scrubs.remove(&guild_id);
                }
                removed
            }
            None => false,
        };
        drop(scrubs);

        tracing::info!(guild_id, user_id, "Disabled scrub");

        Ok(was_present || deleted > 0)
    }

    /// Checks whether nobody is being scrubbed in any guild.
    pub async fn is_empty(&self) -> bool {
        self.scrubs.read().await.is_empty()
    }

    /// Lists the members currently scrubbed in a guild, sorted by id.
    pub async fn scrubbing_in_guild(&self, guild_id: u64) -> Vec<u64> {
        let mut users: Vec<u64> = self
            .scrubs
            .read()
            .await
            .get(&guild_id)
            .map(|users| users.iter().copied().collect())
            .unwrap_or_default();
        users.sort_unstable();
        users
    }
}
