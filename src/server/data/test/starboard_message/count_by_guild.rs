use super::*;

/// Tests counting tracked and mirrored messages per guild.
///
/// Expected: Ok((2, 1)) for the guild, messages of other guilds excluded
#[tokio::test]
async fn counts_tracked_and_mirrored() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_starboard_message(db, "1").await?;
    factory::starboard_message::StarboardMessageFactory::new(db, "1")
        .mirror("40", "41")
        .build()
        .await?;
    factory::create_starboard_message(db, "2").await?;

    let repo = StarboardMessageRepository::new(db);

    assert_eq!(repo.count_by_guild(GuildId::new(1)).await?, (2, 1));

    Ok(())
}
