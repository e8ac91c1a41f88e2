use super::*;

/// Tests creating member and channel entries.
///
/// Expected: Ok with the kind discriminator stored for each target
#[tokio::test]
async fn stores_kind_and_target() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = IgnoreRepository::new(db);
    let member = repo
        .create(GuildId::new(1), IgnoreTarget::member(UserId::new(2)))
        .await?;
    let channel = repo
        .create(GuildId::new(1), IgnoreTarget::Channel(ChannelId::new(3)))
        .await?;

    assert_eq!(member.kind, "member");
    assert_eq!(member.target_id, "2");
    assert_eq!(channel.kind, "channel");
    assert_eq!(channel.target_id, "3");

    let entries = repo.get_by_guild(GuildId::new(1)).await?;
    assert_eq!(entries.len(), 2);

    Ok(())
}
