use super::{custom, unicode, RecordingGateway, RemovalCall};
use crate::{
    error::AppError,
    model::reaction::ReactionEvent,
    service::{
        reaction::{ReactionOutcome, ReactionService},
        scrub::ScrubRegistry,
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};
use serenity::all::ReactionType;
use test_utils::{builder::TestBuilder, factory::emoji_usage::EmojiUsageFactory};


const SYSTEM_ACCOUNT_ID: u64 = 155149108183695360;

fn event(guild_id: u64, user_id: u64, emoji: ReactionType) -> ReactionEvent {
    ReactionEvent {
        guild_id,
        channel_id: 10,
        message_id: 100,
        user_id,
        emoji,
    }
}
