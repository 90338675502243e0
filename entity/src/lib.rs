//! SeaORM entity models for the reaction tracking tables.

pub mod prelude;

pub mod emoji_usage;
pub mod scrub;
