use super::*;

/// Tests finding a message that was never tracked.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_untracked_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StarboardMessageRepository::new(db);

    assert!(repo.find(GuildId::new(1), MessageId::new(1)).await?.is_none());

    Ok(())
}

/// Tests loading a tracked message with starrers and a mirror.
///
/// Expected: Ok(Some) with starrers, mirror and flags restored, no source snapshot
#[tokio::test]
async fn loads_starrers_and_mirror() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::starboard_message::StarboardMessageFactory::new(db, "1")
        .message_id("10")
        .channel_id("20")
        .author_id("30")
        .hidden(true)
        .mirror("40", "50")
        .starrers(vec![2, 3])
        .build()
        .await?;

    let repo = StarboardMessageRepository::new(db);
    let message = repo.find(GuildId::new(1), MessageId::new(10)).await?.unwrap();

    assert_eq!(message.channel_id, ChannelId::new(20));
    assert_eq!(message.author_id, UserId::new(30));
    assert!(message.hidden);
    assert_eq!(
        message.mirror,
        Some(MirrorRef {
            channel_id: ChannelId::new(40),
            message_id: MessageId::new(50),
        })
    );
    assert_eq!(message.stars(), 2);
    assert!(message.starrers.contains(&UserId::new(2)));
    assert!(message.source.is_none());
    assert!(!message.in_queue);

    Ok(())
}

/// Tests that a message tracked by one guild is invisible to another.
///
/// Expected: Ok(None) for the other guild, the owner reported by `find_owner`
#[tokio::test]
async fn scopes_lookup_to_guild() -> Result<(), AppError> {
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

    assert!(repo.find(GuildId::new(2), MessageId::new(10)).await?.is_none());
    assert!(repo.find(GuildId::new(1), MessageId::new(10)).await?.is_some());
    assert_eq!(repo.find_owner(MessageId::new(10)).await?, Some(GuildId::new(1)));
    assert_eq!(repo.find_owner(MessageId::new(11)).await?, None);

    Ok(())
}
