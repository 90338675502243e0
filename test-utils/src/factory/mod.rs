//! Factory methods for creating test data.
//!
//! Each table has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let usage = factory::create_emoji_usage(&db).await?;
//!
//!     // Customize the fields a test cares about
//!     let usage = factory::emoji_usage::EmojiUsageFactory::new(&db)
//!         .guild_id(1)
//!         .user_id(2)
//!         .emoji("👍")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `emoji_usage` - Create reaction usage rows
//! - `scrub` - Create scrub entries
//! - `helpers` - Unique id generation

pub mod emoji_usage;
pub mod helpers;
pub mod scrub;

pub use emoji_usage::create_emoji_usage;
pub use scrub::create_scrub;
