//! Discmoji Test Utils
//!
//! Shared testing utilities for the discmoji bot. Provides a builder for test contexts backed by
//! in-memory SQLite databases, plus factories for inserting reaction usage rows and scrub
//! entries with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::EmojiUsage;
//!
//! #[tokio::test]
//! async fn test_usage_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(EmojiUsage)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
