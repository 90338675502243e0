//! Discord gateway integration.
//!
//! The bot subscribes to `GUILDS | GUILD_MESSAGE_REACTIONS` only. Reaction events are
//! forwarded to the reaction service, slash commands are dispatched by poise.

pub mod handler;
pub mod start;
