use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StarboardMessage::Table)
                    .if_not_exists()
                    .col(string(StarboardMessage::MessageId).primary_key())
                    .col(string(StarboardMessage::GuildId))
                    .col(string(StarboardMessage::ChannelId))
                    .col(string(StarboardMessage::AuthorId))
                    .col(boolean(StarboardMessage::AuthorBot).default(false))
                    .col(boolean(StarboardMessage::Hidden).default(false))
                    .col(string_null(StarboardMessage::MirrorChannelId))
                    .col(string_null(StarboardMessage::MirrorMessageId))
                    .col(timestamp(StarboardMessage::CreatedAt))
                    .col(timestamp(StarboardMessage::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_starboard_message_guild_id")
                    .table(StarboardMessage::Table)
                    .col(StarboardMessage::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_starboard_message_guild_id")
                    .table(StarboardMessage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StarboardMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StarboardMessage {
    Table,
    MessageId,
    GuildId,
    ChannelId,
    AuthorId,
    AuthorBot,
    Hidden,
    MirrorChannelId,
    MirrorMessageId,
    CreatedAt,
    UpdatedAt,
}
