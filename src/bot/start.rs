use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::handler::Handler,
    commands::{self, on_error},
    config::Config,
    error::AppError,
    state::AppState,
};

/// Builds the Discord client with the reaction handler and slash commands attached.
///
/// Slash commands are registered globally once the client is ready.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Shared state cloned into the event handler and command data
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started with `start_bot`
/// - `Err(AppError::DiscordErr)` - Failed to build the client
pub async fn init_bot(config: &Config, state: AppState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let handler = Handler::new(state.clone());

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::commands(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                tracing::info!(
                    commands = framework.options().commands.len(),
                    "Registered slash commands"
                );
                Ok(state)
            })
        })
        .build();

    let client = Client::builder(&config.discord_token, intents)
        .framework(framework)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Runs the Discord client until ctrl-c or until the client stops on its own.
///
/// On ctrl-c every shard is shut down and the client task awaited before returning, so
/// the caller can close the database afterwards. In-flight event handlers are not awaited.
///
/// # Returns
/// - `Ok(())` - Client shut down
/// - `Err(AppError::DiscordErr)` - Client failed to connect or lost the gateway
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();

    tracing::info!("Starting Discord bot...");

    let mut bot = tokio::spawn(async move { client.start().await });

    tokio::select! {
        result = &mut bot => {
            return match result {
                Ok(result) => result.map_err(AppError::from),
                Err(e) => {
                    tracing::error!("Discord client task failed: {}", e);
                    Ok(())
                }
            };
        }
        signal = tokio::signal::ctrl_c() => {
            if let Err(e) = signal {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
        }
    }

    tracing::info!("Shutting down Discord bot");
    shard_manager.shutdown_all().await;

    match bot.await {
        Ok(result) => result?,
        Err(e) => tracing::error!("Discord client task failed: {}", e),
    }

    Ok(())
}
