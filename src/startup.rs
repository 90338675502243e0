use sea_orm::DatabaseConnection;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{config::Config, data::emoji_usage::EmojiUsageRepository, error::AppError};

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` and defaults to `info`.
///
/// # Arguments
/// - `json` - Emit JSON lines instead of the human readable format
pub fn init_tracing(json: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_target(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(true))
            .init();
    }
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// The pool is kept small: reaction events are short single-statement writes.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(5).min_connections(2).sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Deletes usage rows recorded for the system account.
///
/// Its events are ignored while running, but rows may remain from before it was excluded.
///
/// # Returns
/// - `Ok(u64)` - Number of rows deleted
/// - `Err(AppError::DbErr)` - Delete failed
pub async fn purge_system_account_rows(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<u64, AppError> {
    let removed = EmojiUsageRepository::new(db)
        .remove_all_for_user(config.system_account_id)
        .await?;

    if removed > 0 {
        tracing::info!(
            user_id = config.system_account_id,
            removed,
            "Removed emoji usage recorded for the system account"
        );
    }

    Ok(removed)
}
