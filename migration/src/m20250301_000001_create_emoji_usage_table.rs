use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmojiUsage::Table)
                    .if_not_exists()
                    .col(pk_auto(EmojiUsage::Id))
                    .col(string(EmojiUsage::GuildId))
                    .col(string(EmojiUsage::ChannelId))
                    .col(string(EmojiUsage::MessageId))
                    .col(string(EmojiUsage::UserId))
                    .col(string(EmojiUsage::EmojiId))
                    .col(string(EmojiUsage::EmojiName))
                    .col(timestamp(EmojiUsage::Timestamp))
                    .to_owned(),
            )
            .await?;

        // Per-user leaderboard and purge lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_emoji_usage_guild_id_user_id")
                    .table(EmojiUsage::Table)
                    .col(EmojiUsage::GuildId)
                    .col(EmojiUsage::UserId)
                    .col(EmojiUsage::EmojiId)
                    .to_owned(),
            )
            .await?;

        // Exact tuple deletes on reaction removal
        manager
            .create_index(
                Index::create()
                    .name("idx_emoji_usage_message_id_user_id_emoji_id")
                    .table(EmojiUsage::Table)
                    .col(EmojiUsage::MessageId)
                    .col(EmojiUsage::UserId)
                    .col(EmojiUsage::GuildId)
                    .col(EmojiUsage::EmojiId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_emoji_usage_guild_id_emoji_id")
                    .table(EmojiUsage::Table)
                    .col(EmojiUsage::GuildId)
                    .col(EmojiUsage::EmojiId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_emoji_usage_guild_id_emoji_id",
            "idx_emoji_usage_message_id_user_id_emoji_id",
            "idx_emoji_usage_guild_id_user_id",
        ] {
            manager
                .drop_index(Index::drop().name(name).table(EmojiUsage::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(EmojiUsage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EmojiUsage {
    Table,
    Id,
    GuildId,
    ChannelId,
    MessageId,
    UserId,
    EmojiId,
    EmojiName,
    Timestamp,
}
