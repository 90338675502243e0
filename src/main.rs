mod bot;
mod commands;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod state;

use crate::{
    config::Config, error::AppError, service::scrub::ScrubRegistry, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(config.json_logs);

    let db = startup::connect_to_database(&config).await?;
    startup::purge_system_account_rows(&db, &config).await?;

    // Loaded before the client connects so no reaction is checked against an empty registry
    let scrubs = ScrubRegistry::load(db.clone()).await?;

    let state = AppState::new(db.clone(), scrubs, config.system_account_id);

    let client = bot::start::init_bot(&config, state).await?;
    bot::start::start_bot(client).await?;

    tracing::info!("Closing database connection");
    db.close().await?;

    Ok(())
}
