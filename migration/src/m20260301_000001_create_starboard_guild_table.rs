use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StarboardGuild::Table)
                    .if_not_exists()
                    .col(string(StarboardGuild::GuildId).primary_key())
                    .col(string_null(StarboardGuild::ChannelId))
                    .col(integer(StarboardGuild::MinStars).default(1))
                    .col(boolean(StarboardGuild::AllowSelfstar).default(false))
                    .col(string(StarboardGuild::Emoji))
                    .col(timestamp(StarboardGuild::CreatedAt))
                    .col(timestamp(StarboardGuild::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StarboardGuild::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StarboardGuild {
    Table,
    GuildId,
    ChannelId,
    MinStars,
    AllowSelfstar,
    Emoji,
    CreatedAt,
    UpdatedAt,
}
