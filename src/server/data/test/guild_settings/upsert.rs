use super::*;

/// Tests that upserting overwrites every settings column.
///
/// Expected: Ok with updated values visible through find
#[tokio::test]
async fn updates_existing_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let mut settings = repo.get_or_create(GuildId::new(9)).await?;

    settings.channel_id = Some(ChannelId::new(90));
    settings.min_stars = 3;
    settings.allow_selfstar = true;
    settings.emoji = "🌟".to_string();
    let stored = repo.upsert(&settings).await?;

    assert_eq!(stored.channel_id.as_deref(), Some("90"));
    assert_eq!(stored.min_stars, 3);

    let reloaded = repo.find(GuildId::new(9)).await?.unwrap();
    assert_eq!(reloaded, settings);

    Ok(())
}

/// Tests that clearing the channel is persisted as NULL.
///
/// Expected: Ok with no channel after reload
#[tokio::test]
async fn clears_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::starboard_guild::StarboardGuildFactory::new(db)
        .guild_id("9")
        .channel_id("90")
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let mut settings = repo.find(GuildId::new(9)).await?.unwrap();
    settings.channel_id = None;
    repo.upsert(&settings).await?;

    let reloaded = repo.find(GuildId::new(9)).await?.unwrap();
    assert!(reloaded.channel_id.is_none());

    Ok(())
}
