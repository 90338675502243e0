//! Ready event handler.
//!
//! Fired once per gateway connection after the handshake. Reaction events may arrive right
//! after it, so the scrub registry has already been loaded by the time this runs.

use serenity::all::{ActivityData, Context, Ready};

use crate::state::AppState;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared state, used to report whether any scrub is active
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    let scrubs_active = !state.scrubs.is_empty().await;

    tracing::info!(
        guilds = ready.guilds.len(),
        scrubs_active,
        "{} is connected to Discord",
        ready.user.name
    );

    ctx.set_activity(Some(ActivityData::watching("your reactions")));
}
