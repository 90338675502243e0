//! Database repository layer.
//!
//! Repositories hold a borrowed `DatabaseConnection`, run SeaORM queries against the entity
//! models, and return domain models from `crate::model`. Every failure is returned as
//! `sea_orm::DbErr`; nothing here retries or logs.

pub mod emoji_usage;
pub mod scrub;
