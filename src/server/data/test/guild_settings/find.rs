use super::*;

/// Tests finding settings for a guild that was never configured.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let result = repo.find(GuildId::new(1)).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that stored settings are combined with the guild's ignore entries.
///
/// Verifies that ignore rows of other guilds are not picked up.
///
/// Expected: Ok(Some) with both ignore lists populated
#[tokio::test]
async fn loads_settings_with_ignore_lists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::starboard_guild::StarboardGuildFactory::new(db)
        .guild_id("100")
        .channel_id("200")
        .min_stars(4)
        .build()
        .await?;
    factory::create_ignored_member(db, "100", "300").await?;
    factory::create_ignored_channel(db, "100", "400").await?;
    factory::create_ignored_member(db, "101", "500").await?;

    let repo = GuildSettingsRepository::new(db);
    let settings = repo.find(GuildId::new(100)).await?.unwrap();

    assert_eq!(settings.channel_id, Some(ChannelId::new(200)));
    assert_eq!(settings.min_stars, 4);
    assert!(settings.ignored_members.contains(&UserId::new(300)));
    assert!(!settings.ignored_members.contains(&UserId::new(500)));
    assert!(settings.ignored_channels.contains(&ChannelId::new(400)));

    Ok(())
}
