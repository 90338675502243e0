//! Leaderboard rows combining a ranked entity with its top sub-entities.

use super::emoji_usage::{EmojiCount, UserCount};

/// A top emoji together with the users who reacted with it the most.
#[derive(Debug, Clone, PartialEq)]
pub struct EmojiLeaderboardEntry {
    pub emoji: EmojiCount,
    pub top_users: Vec<UserCount>,
}

/// A top user together with the emojis they reacted with the most.
#[derive(Debug, Clone, PartialEq)]
pub struct UserLeaderboardEntry {
    pub user: UserCount,
    pub top_emojis: Vec<EmojiCount>,
}
