//! Leaderboard queries and their rendering.
//!
//! Every call re-queries the usage store; there is no caching. A leaderboard is built in two
//! passes: the top-N primary entities, then the top few secondary entities for each one.

use sea_orm::DatabaseConnection;

use crate::{
    data::emoji_usage::EmojiUsageRepository,
    error::AppError,
    model::leaderboard::{EmojiLeaderboardEntry, UserLeaderboardEntry},
};

/// Number of entries shown when the command's amount is omitted.
pub const DEFAULT_AMOUNT: u64 = 5;

/// Upper bound on leaderboard entries; larger amounts are clamped.
pub const MAX_AMOUNT: u64 = 20;

/// Secondary entities listed next to each leaderboard entry.
pub const DRILL_DOWN_LIMIT: u64 = 3;

pub struct LeaderboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the most used emojis in a guild, each with its top reacting users.
    ///
    /// `amount` is clamped to `1..=MAX_AMOUNT`. An emoji whose user drill-down fails is
    /// logged and left out rather than failing the whole leaderboard.
    ///
    /// # Returns
    /// - `Ok(Vec<EmojiLeaderboardEntry>)` - Entries ordered by count, highest first
    /// - `Err(AppError::DbErr)` - The top emoji query itself failed
    pub async fn top_emojis(
        &self,
        guild_id: u64,
        amount: u64,
    ) -> Result<Vec<EmojiLeaderboardEntry>, AppError> {
        let repo = EmojiUsageRepository::new(self.db);
        let top = repo
            .top_emojis(guild_id, amount.clamp(1, MAX_AMOUNT))
            .await?;

        let mut entries = Vec::with_capacity(top.len());
        for emoji in top {
            match repo
                .top_users_for_emoji(guild_id, &emoji.emoji_id, DRILL_DOWN_LIMIT)
                .await
            {
                Ok(top_users) => entries.push(EmojiLeaderboardEntry { emoji, top_users }),
                Err(e) => {
                    tracing::error!(
                        guild_id,
                        emoji_id = %emoji.emoji_id,
                        "Error getting top users for guild emoji: {}",
                        e
                    );
                }
            }
        }

        Ok(entries)
    }

    /// Gets the users who reacted the most in a guild, each with their top emojis.
    ///
    /// `amount` is clamped to `1..=MAX_AMOUNT`.
    ///
    /// # Returns
    /// - `Ok(Vec<UserLeaderboardEntry>)` - Entries ordered by count, highest first
    /// - `Err(AppError::DbErr)` - The top user query itself failed
    pub async fn top_users(
        &self,
        guild_id: u64,
        amount: u64,
    ) -> Result<Vec<UserLeaderboardEntry>, AppError> {
        let repo = EmojiUsageRepository::new(self.db);
        let top = repo
            .top_users(guild_id, amount.clamp(1, MAX_AMOUNT))
            .await?;

        let mut entries = Vec::with_capacity(top.len());
        for user in top {
            match repo
                .top_emojis_for_user(guild_id, user.user_id, DRILL_DOWN_LIMIT)
                .await
            {
                Ok(top_emojis) => entries.push(UserLeaderboardEntry { user, top_emojis }),
                Err(e) => {
                    tracing::error!(
                        guild_id,
                        user_id = user.user_id,
                        "Error getting top emojis for guild user: {}",
                        e
                    );
                }
            }
        }

        Ok(entries)
    }
}

/// Renders the emoji leaderboard as a Discord message.
pub fn render_top_emojis(entries: &[EmojiLeaderboardEntry]) -> String {
    if entries.is_empty() {
        return "No emoji reactions have been recorded in this server yet.".to_string();
    }

    let mut msg = String::from("Most used emojis:\n");
    for entry in entries {
        let users: Vec<String> = entry
            .top_users
            .iter()
            .map(|user| format!("{}: {}", user.display(), user.count))
            .collect();

        msg.push_str(&format!(
            "{}: {}  ({})\n",
            entry.emoji.display(),
            entry.emoji.count,
            users.join(", ")
        ));
    }

    msg
}

/// Renders the user leaderboard as a Discord message.
pub fn render_top_users(entries: &[UserLeaderboardEntry]) -> String {
    if entries.is_empty() {
        return "No emoji reactions have been recorded in this server yet.".to_string();
    }

    let mut msg = String::from("Users who use the most emojis:\n");
    for entry in entries {
        let emojis: Vec<String> = entry
            .top_emojis
            .iter()
            .map(|emoji| format!("{}: {}", emoji.display(), emoji.count))
            .collect();

        msg.push_str(&format!(
            "{}: {}  ({})\n",
            entry.user.display(),
            entry.user.count,
            emojis.join(", ")
        ));
    }

    msg
}

/// Discord's maximum message length, in characters.
pub const MESSAGE_LIMIT: usize = 2000;

/// Splits rendered text into messages no longer than `limit` characters, on line boundaries.
///
/// A single line longer than `limit` is sent on its own and left to Discord to reject.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let mut messages = Vec::new();
    let mut current = String::new();

    for line in text.split_inclusive('\n') {
        if !current.is_empty() && current.chars().count() + line.chars().count() > limit {
            messages.push(std::mem::take(&mut current));
        }
        current.push_str(line);
    }

    if !current.is_empty() {
        messages.push(current);
    }

    messages
}
