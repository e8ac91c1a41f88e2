//! Starboard guild settings factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating starboard settings rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::starboard_guild::StarboardGuildFactory;
///
/// let settings = StarboardGuildFactory::new(&db)
///     .channel_id("987654321")
///     .min_stars(3)
///     .build()
///     .await?;
/// ```
pub struct StarboardGuildFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    channel_id: Option<String>,
    min_stars: i32,
    allow_selfstar: bool,
    emoji: String,
}

impl<'a> StarboardGuildFactory<'a> {
    /// Creates a new StarboardGuildFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented id
    /// - channel_id: `None`
    /// - min_stars: `1`
    /// - allow_selfstar: `false`
    /// - emoji: `"⭐"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `StarboardGuildFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            channel_id: None,
            min_stars: 1,
            allow_selfstar: false,
            emoji: "⭐".to_string(),
        }
    }

    /// Sets the guild ID.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the starboard channel.
    ///
    /// # Arguments
    /// - `channel_id` - Channel mirrors are posted to
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    /// Sets the star threshold.
    pub fn min_stars(mut self, min_stars: i32) -> Self {
        self.min_stars = min_stars;
        self
    }

    /// Sets whether authors may star their own messages.
    pub fn allow_selfstar(mut self, allow_selfstar: bool) -> Self {
        self.allow_selfstar = allow_selfstar;
        self
    }

    /// Sets the reaction emoji that counts as a star.
    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    /// Builds and inserts the settings row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::starboard_guild::Model)` - Created settings row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::starboard_guild::Model, DbErr> {
        let now = Utc::now();
        entity::starboard_guild::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            min_stars: ActiveValue::Set(self.min_stars),
            allow_selfstar: ActiveValue::Set(self.allow_selfstar),
            emoji: ActiveValue::Set(self.emoji),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a settings row with default values.
///
/// Shorthand for `StarboardGuildFactory::new(db).build().await`.
pub async fn create_guild_settings(
    db: &DatabaseConnection,
) -> Result<entity::starboard_guild::Model, DbErr> {
    StarboardGuildFactory::new(db).build().await
}
