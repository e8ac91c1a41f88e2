use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that first access creates a default settings row.
///
/// Expected: Ok with defaults, exactly one row stored after two calls
#[tokio::test]
async fn creates_defaults_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let first = repo.get_or_create(GuildId::new(7)).await?;
    let second = repo.get_or_create(GuildId::new(7)).await?;

    assert_eq!(first, GuildSettings::new(GuildId::new(7)));
    assert_eq!(first, second);

    let count = entity::prelude::StarboardGuild::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that existing settings are returned instead of defaults.
///
/// Expected: Ok with stored values
#[tokio::test]
async fn returns_existing_settings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::starboard_guild::StarboardGuildFactory::new(db)
        .guild_id("7")
        .allow_selfstar(true)
        .emoji("🔥")
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let settings = repo.get_or_create(GuildId::new(7)).await?;

    assert!(settings.allow_selfstar);
    assert_eq!(settings.emoji, "🔥");

    Ok(())
}
