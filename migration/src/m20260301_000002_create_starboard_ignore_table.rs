use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StarboardIgnore::Table)
                    .if_not_exists()
                    .col(pk_auto(StarboardIgnore::Id))
                    .col(string(StarboardIgnore::GuildId))
                    .col(string(StarboardIgnore::TargetId))
                    .col(string(StarboardIgnore::Kind))
                    .col(
                        timestamp(StarboardIgnore::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // One entry per target and kind in a guild
        manager
            .create_index(
                Index::create()
                    .name("idx_starboard_ignore_unique")
                    .table(StarboardIgnore::Table)
                    .col(StarboardIgnore::GuildId)
                    .col(StarboardIgnore::TargetId)
                    .col(StarboardIgnore::Kind)
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
                    .name("idx_starboard_ignore_unique")
                    .table(StarboardIgnore::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StarboardIgnore::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StarboardIgnore {
    Table,
    Id,
    GuildId,
    TargetId,
    Kind,
    CreatedAt,
}
