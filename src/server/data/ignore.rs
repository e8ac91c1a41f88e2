//! Ignore list repository for blocked members and ignored channels.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use serenity::all::GuildId;

use crate::server::model::settings::IgnoreTarget;

/// Repository providing database operations for starboard ignore entries.
pub struct IgnoreRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IgnoreRepository<'a> {
    /// Creates a new IgnoreRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `IgnoreRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every ignore entry of a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to list entries for
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Member and channel entries, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_guild(
        &self,
        guild_id: GuildId,
    ) -> Result<Vec<entity::starboard_ignore::Model>, DbErr> {
        entity::prelude::StarboardIgnore::find()
            .filter(entity::starboard_ignore::Column::GuildId.eq(guild_id.to_string()))
            .all(self.db)
            .await
    }

    /// Adds an ignore entry.
    ///
    /// Callers check the in-memory lists first, duplicate entries are not rejected here.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the entry belongs to
    /// - `target` - Member or channel to ignore
    ///
    /// # Returns
    /// - `Ok(Model)` - The created entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        guild_id: GuildId,
        target: IgnoreTarget,
    ) -> Result<entity::starboard_ignore::Model, DbErr> {
        entity::starboard_ignore::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            target_id: ActiveValue::Set(target.target_id().to_string()),
            kind: ActiveValue::Set(target.kind().as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Removes an ignore entry.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the entry belongs to
    /// - `target` - Member or channel to stop ignoring
    ///
    /// # Returns
    /// - `Ok(true)` - An entry was removed
    /// - `Ok(false)` - No matching entry existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, guild_id: GuildId, target: IgnoreTarget) -> Result<bool, DbErr> {
        let result = entity::prelude::StarboardIgnore::delete_many()
            .filter(entity::starboard_ignore::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::starboard_ignore::Column::TargetId.eq(target.target_id().to_string()))
            .filter(entity::starboard_ignore::Column::Kind.eq(target.kind().as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
