//! Tracked starboard message factory.
//!
//! Inserts a `starboard_message` row along with one `starboard_starrer` row per starrer,
//! so tests can seed a message in any state the coordinator would persist.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Factory for creating tracked messages with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::starboard_message::StarboardMessageFactory;
///
/// let message = StarboardMessageFactory::new(&db, "123")
///     .author_id("77")
///     .starrers(vec![1, 2])
///     .hidden(true)
///     .build()
///     .await?;
/// ```
pub struct StarboardMessageFactory<'a> {
    db: &'a DatabaseConnection,
    message_id: String,
    guild_id: String,
    channel_id: String,
    author_id: String,
    author_bot: bool,
    hidden: bool,
    mirror: Option<(String, String)>,
    starrers: Vec<u64>,
}

impl<'a> StarboardMessageFactory<'a> {
    /// Creates a new StarboardMessageFactory with default values.
    ///
    /// Defaults:
    /// - message_id, channel_id, author_id: auto-incremented ids
    /// - author_bot: `false`
    /// - hidden: `false`
    /// - mirror: `None`
    /// - starrers: none
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Guild the message belongs to
    ///
    /// # Returns
    /// - `StarboardMessageFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            message_id: next_id().to_string(),
            guild_id: guild_id.into(),
            channel_id: next_id().to_string(),
            author_id: next_id().to_string(),
            author_bot: false,
            hidden: false,
            mirror: None,
            starrers: Vec::new(),
        }
    }

    /// Sets the source message ID.
    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    /// Sets the channel the source message was posted in.
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    /// Sets the author of the source message.
    ///
    /// # Arguments
    /// - `author_id` - Discord user ID of the author
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn author_id(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = author_id.into();
        self
    }

    /// Marks the author as a bot account.
    pub fn author_bot(mut self, author_bot: bool) -> Self {
        self.author_bot = author_bot;
        self
    }

    /// Sets the moderator hidden flag.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Records an existing mirror post for the message.
    ///
    /// # Arguments
    /// - `channel_id` - Starboard channel holding the mirror
    /// - `message_id` - ID of the mirror post
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn mirror(mut self, channel_id: impl Into<String>, message_id: impl Into<String>) -> Self {
        self.mirror = Some((channel_id.into(), message_id.into()));
        self
    }

    /// Sets the users who starred the message.
    ///
    /// # Arguments
    /// - `starrers` - Discord user IDs, one starrer row is inserted for each
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn starrers(mut self, starrers: Vec<u64>) -> Self {
        self.starrers = starrers;
        self
    }

    /// Builds and inserts the message and its starrers into the database.
    ///
    /// # Returns
    /// - `Ok(entity::starboard_message::Model)` - Created message row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::starboard_message::Model, DbErr> {
        let now = Utc::now();
        let (mirror_channel_id, mirror_message_id) = match self.mirror {
            Some((channel_id, message_id)) => (Some(channel_id), Some(message_id)),
            None => (None, None),
        };

        let message = entity::starboard_message::ActiveModel {
            message_id: ActiveValue::Set(self.message_id),
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            author_id: ActiveValue::Set(self.author_id),
            author_bot: ActiveValue::Set(self.author_bot),
            hidden: ActiveValue::Set(self.hidden),
            mirror_channel_id: ActiveValue::Set(mirror_channel_id),
            mirror_message_id: ActiveValue::Set(mirror_message_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        if !self.starrers.is_empty() {
            let rows = self
                .starrers
                .iter()
                .map(|user_id| entity::starboard_starrer::ActiveModel {
                    message_id: ActiveValue::Set(message.message_id.clone()),
                    user_id: ActiveValue::Set(user_id.to_string()),
                    created_at: ActiveValue::Set(now),
                    ..Default::default()
                });

            entity::prelude::StarboardStarrer::insert_many(rows)
                .exec(self.db)
                .await?;
        }

        Ok(message)
    }
}

/// Creates a tracked message with default values and no starrers.
///
/// Shorthand for `StarboardMessageFactory::new(db, guild_id).build().await`.
pub async fn create_starboard_message(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::starboard_message::Model, DbErr> {
    StarboardMessageFactory::new(db, guild_id).build().await
}
