//! Ignore list factory for members and channels.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an ignore row of the given kind.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild the ignore applies to
/// - `target_id` - Member or channel ID being ignored
/// - `kind` - Either `"member"` or `"channel"`
///
/// # Returns
/// - `Ok(entity::starboard_ignore::Model)` - Created ignore row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_ignore(
    db: &DatabaseConnection,
    guild_id: &str,
    target_id: &str,
    kind: &str,
) -> Result<entity::starboard_ignore::Model, DbErr> {
    entity::starboard_ignore::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        target_id: ActiveValue::Set(target_id.to_string()),
        kind: ActiveValue::Set(kind.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Blocks a member from the starboard of a guild.
pub async fn create_ignored_member(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
) -> Result<entity::starboard_ignore::Model, DbErr> {
    create_ignore(db, guild_id, user_id, "member").await
}

/// Ignores a channel for the starboard of a guild.
pub async fn create_ignored_channel(
    db: &DatabaseConnection,
    guild_id: &str,
    channel_id: &str,
) -> Result<entity::starboard_ignore::Model, DbErr> {
    create_ignore(db, guild_id, channel_id, "channel").await
}
