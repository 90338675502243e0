use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scrub::Table)
                    .if_not_exists()
                    .col(pk_auto(Scrub::Id))
                    .col(string(Scrub::GuildId))
                    .col(string(Scrub::UserId))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_scrub_guild_id_user_id")
                            .col(Scrub::GuildId)
                            .col(Scrub::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scrub::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Scrub {
    Table,
    Id,
    GuildId,
    UserId,
}
