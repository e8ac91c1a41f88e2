use super::*;

/// Tests deleting an entry only removes the matching kind.
///
/// A member and a channel sharing the same id are separate entries.
///
/// Expected: Ok(true) once, then Ok(false), channel entry kept
#[tokio::test]
async fn deletes_matching_entry_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = IgnoreRepository::new(db);
    repo.create(GuildId::new(1), IgnoreTarget::member(UserId::new(5)))
        .await?;
    repo.create(GuildId::new(1), IgnoreTarget::Channel(ChannelId::new(5)))
        .await?;

    let target = IgnoreTarget::member(UserId::new(5));
    assert!(repo.delete(GuildId::new(1), target).await?);
    assert!(!repo.delete(GuildId::new(1), target).await?);

    let entries = repo.get_by_guild(GuildId::new(1)).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, "channel");

    Ok(())
}
