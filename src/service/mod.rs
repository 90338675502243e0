//! Business logic between the bot handlers and the data layer.
//!
//! - `scrub` - in-memory scrub index backed by the `scrub` table
//! - `reaction` - reaction ingestion and the scrub decision
//! - `leaderboard` - top emoji / top user queries and their text rendering
//! - `purge` - bulk removal of a member's recorded reactions
//! - `gateway` - the outbound "delete this reaction" call, behind a trait

pub mod gateway;
pub mod leaderboard;
pub mod purge;
pub mod reaction;
pub mod scrub;
