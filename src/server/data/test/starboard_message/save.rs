use super::*;

/// Tests saving a new message and reading it back.
///
/// Expected: Ok with the same starrers and mirror after reload
#[tokio::test]
async fn inserts_new_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::starboard_message::StarboardMessageFactory::new(db, "1")
        .message_id("10")
        .starrers(vec![2])
        .build()
        .await?;

    let repo = StarboardMessageRepository::new(db);
    let mut message = repo.find(GuildId::new(1), MessageId::new(10)).await?.unwrap();
    message.message_id = MessageId::new(11);
    message.mirror = Some(MirrorRef {
        channel_id: ChannelId::new(40),
        message_id: MessageId::new(41),
    });
    repo.save(GuildId::new(1), &message).await?;

    let reloaded = repo.find(GuildId::new(1), MessageId::new(11)).await?.unwrap();
    assert_eq!(reloaded.starrers, message.starrers);
    assert_eq!(reloaded.mirror, message.mirror);

    Ok(())
}

/// Tests that saving replaces the stored starrer set and mirror.
///
/// Expected: Ok with removed starrers gone and the mirror cleared
#[tokio::test]
async fn replaces_starrers_and_clears_mirror() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::starboard_message::StarboardMessageFactory::new(db, "1")
        .message_id("10")
        .mirror("40", "41")
        .starrers(vec![2, 3, 4])
        .build()
        .await?;

    let repo = StarboardMessageRepository::new(db);
    let mut message: StarboardMessage = repo.find(GuildId::new(1), MessageId::new(10)).await?.unwrap();
    message.starrers.remove(&UserId::new(3));
    message.starrers.insert(UserId::new(5));
    message.mirror = None;
    message.hidden = true;
    repo.save(GuildId::new(1), &message).await?;

    let reloaded = repo.find(GuildId::new(1), MessageId::new(10)).await?.unwrap();
    assert_eq!(reloaded.stars(), 3);
    assert!(!reloaded.starrers.contains(&UserId::new(3)));
    assert!(reloaded.starrers.contains(&UserId::new(5)));
    assert!(reloaded.mirror.is_none());
    assert!(reloaded.hidden);

    Ok(())
}

/// Tests saving a message whose stars were all removed.
///
/// Expected: Ok with the row kept and no starrers
#[tokio::test]
async fn keeps_row_without_starrers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::starboard_message::StarboardMessageFactory::new(db, "1")
        .message_id("10")
        .starrers(vec![2])
        .build()
        .await?;

    let repo = StarboardMessageRepository::new(db);
    let mut message = repo.find(GuildId::new(1), MessageId::new(10)).await?.unwrap();
    message.clear_stars();
    repo.save(GuildId::new(1), &message).await?;

    let reloaded = repo.find(GuildId::new(1), MessageId::new(10)).await?.unwrap();
    assert_eq!(reloaded.stars(), 0);

    Ok(())
}
