use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000003_create_starboard_message_table::StarboardMessage;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StarboardStarrer::Table)
                    .if_not_exists()
                    .col(pk_auto(StarboardStarrer::Id))
                    .col(string(StarboardStarrer::MessageId))
                    .col(string(StarboardStarrer::UserId))
                    .col(
                        timestamp(StarboardStarrer::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_starboard_starrer_message_id")
                            .from(StarboardStarrer::Table, StarboardStarrer::MessageId)
                            .to(StarboardMessage::Table, StarboardMessage::MessageId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A user stars a message at most once
        manager
            .create_index(
                Index::create()
                    .name("idx_starboard_starrer_unique")
                    .table(StarboardStarrer::Table)
                    .col(StarboardStarrer::MessageId)
                    .col(StarboardStarrer::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_starboard_starrer_unique")
                    .table(StarboardStarrer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StarboardStarrer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum StarboardStarrer {
    Table,
    Id,
    MessageId,
    UserId,
    CreatedAt,
}
