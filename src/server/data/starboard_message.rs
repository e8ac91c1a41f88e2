//! Message state repository.
//!
//! A tracked message is stored as one `starboard_message` row plus one
//! `starboard_starrer` row per user who starred it. Saves replace the starrer rows
//! wholesale inside a transaction so a reader never observes a half-written set.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, TransactionTrait,
};
use serenity::all::{GuildId, MessageId};

use crate::server::{
    error::AppError, model::starboard_message::StarboardMessage,
    util::parse::parse_u64_from_string,
};

/// Repository providing database operations for tracked starboard messages.
pub struct StarboardMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarboardMessageRepository<'a> {
    /// Creates a new StarboardMessageRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StarboardMessageRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a tracked message of a guild along with its starrers.
    ///
    /// Messages tracked by another guild are never returned.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the message must belong to
    /// - `message_id` - Source message id
    ///
    /// # Returns
    /// - `Ok(Some(StarboardMessage))` - Message is tracked, without a source snapshot
    /// - `Ok(None)` - Message has never been starred in this guild
    /// - `Err(AppError)` - Database error or corrupt stored id
    pub async fn find(
        &self,
        guild_id: GuildId,
        message_id: MessageId,
    ) -> Result<Option<StarboardMessage>, AppError> {
        let Some(entity) = entity::prelude::StarboardMessage::find_by_id(message_id.to_string())
            .filter(entity::starboard_message::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let starrers = entity::prelude::StarboardStarrer::find()
            .filter(entity::starboard_starrer::Column::MessageId.eq(message_id.to_string()))
            .all(self.db)
            .await?;

        Ok(Some(StarboardMessage::from_entity(entity, starrers)?))
    }

    /// Finds the guild tracking a message, whichever guild that is.
    ///
    /// # Returns
    /// - `Ok(Some(GuildId))` - Guild owning the stored row
    /// - `Ok(None)` - Message isn't tracked anywhere
    /// - `Err(AppError)` - Database error or corrupt stored id
    pub async fn find_owner(&self, message_id: MessageId) -> Result<Option<GuildId>, AppError> {
        let entity = entity::prelude::StarboardMessage::find_by_id(message_id.to_string())
            .one(self.db)
            .await?;

        entity
            .map(|entity| parse_u64_from_string(entity.guild_id).map(GuildId::new))
            .transpose()
    }

    /// Persists the full state of a tracked message.
    ///
    /// Upserts the message row and replaces its starrer rows in one transaction.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the message belongs to
    /// - `message` - State to persist
    ///
    /// # Returns
    /// - `Ok(())` - State persisted
    /// - `Err(DbErr)` - Database error, the transaction is rolled back
    pub async fn save(&self, guild_id: GuildId, message: &StarboardMessage) -> Result<(), DbErr> {
        let now = Utc::now();
        let message_id = message.message_id.to_string();
        let txn = self.db.begin().await?;

        entity::prelude::StarboardMessage::insert(entity::starboard_message::ActiveModel {
            message_id: ActiveValue::Set(message_id.clone()),
            guild_id: ActiveValue::Set(guild_id.to_string()),
            channel_id: ActiveValue::Set(message.channel_id.to_string()),
            author_id: ActiveValue::Set(message.author_id.to_string()),
            author_bot: ActiveValue::Set(message.author_bot),
            hidden: ActiveValue::Set(message.hidden),
            mirror_channel_id: ActiveValue::Set(
                message.mirror.map(|mirror| mirror.channel_id.to_string()),
            ),
            mirror_message_id: ActiveValue::Set(
                message.mirror.map(|mirror| mirror.message_id.to_string()),
            ),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::starboard_message::Column::MessageId)
                .update_columns([
                    entity::starboard_message::Column::Hidden,
                    entity::starboard_message::Column::MirrorChannelId,
                    entity::starboard_message::Column::MirrorMessageId,
                    entity::starboard_message::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

        entity::prelude::StarboardStarrer::delete_many()
            .filter(entity::starboard_starrer::Column::MessageId.eq(message_id.clone()))
            .exec(&txn)
            .await?;

        if !message.starrers.is_empty() {
            let rows = message
                .starrers
                .iter()
                .map(|user_id| entity::starboard_starrer::ActiveModel {
                    message_id: ActiveValue::Set(message_id.clone()),
                    user_id: ActiveValue::Set(user_id.to_string()),
                    created_at: ActiveValue::Set(now),
                    ..Default::default()
                });

            entity::prelude::StarboardStarrer::insert_many(rows)
                .exec(&txn)
                .await?;
        }

        txn.commit().await
    }

    /// Counts the tracked messages of a guild.
    ///
    /// # Returns
    /// - `Ok((tracked, mirrored))` - All tracked messages and those with a live mirror
    /// - `Err(DbErr)` - Database error during query
    pub async fn count_by_guild(&self, guild_id: GuildId) -> Result<(u64, u64), DbErr> {
        let tracked = entity::prelude::StarboardMessage::find()
            .filter(entity::starboard_message::Column::GuildId.eq(guild_id.to_string()))
            .count(self.db)
            .await?;

        let mirrored = entity::prelude::StarboardMessage::find()
            .filter(entity::starboard_message::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::starboard_message::Column::MirrorMessageId.is_not_null())
            .count(self.db)
            .await?;

        Ok((tracked, mirrored))
    }
}
