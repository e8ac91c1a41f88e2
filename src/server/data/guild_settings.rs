//! Guild settings repository.
//!
//! Settings live in `starboard_guild`, the ignore lists in `starboard_ignore`. Reads
//! combine both into a single `GuildSettings`, writes only touch the settings row since
//! ignore entries are managed through `IgnoreRepository`.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};
use serenity::all::GuildId;

use crate::server::{data::ignore::IgnoreRepository, error::AppError, model::settings::GuildSettings};

/// Repository providing database operations for per-guild starboard settings.
pub struct GuildSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsRepository<'a> {
    /// Creates a new GuildSettingsRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GuildSettingsRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the settings of a guild together with its ignore lists.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to look up
    ///
    /// # Returns
    /// - `Ok(Some(GuildSettings))` - Guild has been configured before
    /// - `Ok(None)` - No settings row exists for the guild
    /// - `Err(AppError)` - Database error or corrupt stored id
    pub async fn find(&self, guild_id: GuildId) -> Result<Option<GuildSettings>, AppError> {
        let Some(entity) = entity::prelude::StarboardGuild::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let ignores = IgnoreRepository::new(self.db)
            .get_by_guild(guild_id)
            .await?;

        Ok(Some(GuildSettings::from_entity(entity, ignores)?))
    }

    /// Loads the settings of a guild, creating the default row on first access.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to load
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Stored or freshly created default settings
    /// - `Err(AppError)` - Database error or corrupt stored id
    pub async fn get_or_create(&self, guild_id: GuildId) -> Result<GuildSettings, AppError> {
        if let Some(settings) = self.find(guild_id).await? {
            return Ok(settings);
        }

        let settings = GuildSettings::new(guild_id);
        self.upsert(&settings).await?;

        Ok(settings)
    }

    /// Creates or updates the settings row of a guild.
    ///
    /// Ignore lists carried by `settings` are not written.
    ///
    /// # Arguments
    /// - `settings` - Settings to persist
    ///
    /// # Returns
    /// - `Ok(entity::starboard_guild::Model)` - The stored row
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        settings: &GuildSettings,
    ) -> Result<entity::starboard_guild::Model, DbErr> {
        let now = Utc::now();

        entity::prelude::StarboardGuild::insert(entity::starboard_guild::ActiveModel {
            guild_id: ActiveValue::Set(settings.guild_id.to_string()),
            channel_id: ActiveValue::Set(settings.channel_id.map(|id| id.to_string())),
            min_stars: ActiveValue::Set(settings.min_stars.min(i32::MAX as u32) as i32),
            allow_selfstar: ActiveValue::Set(settings.allow_selfstar),
            emoji: ActiveValue::Set(settings.emoji.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::starboard_guild::Column::GuildId)
                .update_columns([
                    entity::starboard_guild::Column::ChannelId,
                    entity::starboard_guild::Column::MinStars,
                    entity::starboard_guild::Column::AllowSelfstar,
                    entity::starboard_guild::Column::Emoji,
                    entity::starboard_guild::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }
}
