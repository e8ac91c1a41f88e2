use super::*;
use crate::server::data::guild_settings::GuildSettingsRepository;

/// Tests that settings changes are persisted immediately.
///
/// Expected: reloaded settings match the in-memory ones
#[tokio::test]
async fn persists_setting_changes() -> Result<(), AppError> {
    let h = setup(1).await;

    h.starboard.set_min_stars(4).await?;
    h.starboard.set_allow_selfstar(true).await?;
    h.starboard.set_emoji("🔥".to_string()).await?;

    let stored = GuildSettingsRepository::new(h.db())
        .find(GuildId::new(GUILD))
        .await?
        .unwrap();
    assert_eq!(stored, h.starboard.settings().await);
    assert_eq!(stored.min_stars, 4);
    assert!(stored.allow_selfstar);
    assert_eq!(stored.emoji, "🔥");

    Ok(())
}

/// Tests rejecting a zero threshold.
///
/// Expected: InvalidMinStars and the old threshold kept
#[tokio::test]
async fn rejects_zero_min_stars() -> Result<(), AppError> {
    let h = setup(2).await;

    let result = h.starboard.set_min_stars(0).await;

    assert!(matches!(
        result,
        Err(AppError::StarboardErr(StarboardError::InvalidMinStars))
    ));
    assert_eq!(h.starboard.settings().await.min_stars, 2);

    Ok(())
}

/// Tests ignoring and unignoring members and channels.
///
/// Expected: redundant calls rejected, lists persisted
#[tokio::test]
async fn ignores_and_unignores_targets() -> Result<(), AppError> {
    let h = setup(1).await;
    let member = IgnoreTarget::member(user(7));
    let channel_target = IgnoreTarget::Channel(ChannelId::new(8));

    h.starboard.ignore(member).await?;
    h.starboard.ignore(channel_target).await?;
    assert!(matches!(
        h.starboard.ignore(member).await,
        Err(AppError::StarboardErr(StarboardError::AlreadyIgnored))
    ));
    assert!(h.starboard.is_ignored(member).await);
    assert!(h.starboard.is_ignored(channel_target).await);

    let stored = GuildSettingsRepository::new(h.db())
        .find(GuildId::new(GUILD))
        .await?
        .unwrap();
    assert!(stored.ignored_members.contains(&user(7)));
    assert!(stored.ignored_channels.contains(&ChannelId::new(8)));

    h.starboard.unignore(channel_target).await?;
    assert!(matches!(
        h.starboard.unignore(channel_target).await,
        Err(AppError::StarboardErr(StarboardError::NotIgnored))
    ));
    assert!(!h.starboard.is_ignored(channel_target).await);

    Ok(())
}

/// Tests the implicit ignore rules.
///
/// Expected: bots and the starboard channel ignored without being listed
#[tokio::test]
async fn ignores_bots_and_starboard_channel() -> Result<(), AppError> {
    let h = setup(1).await;

    assert!(
        h.starboard
            .is_ignored(IgnoreTarget::Member {
                id: user(3),
                bot: true
            })
            .await
    );
    assert!(
        h.starboard
            .is_ignored(IgnoreTarget::Channel(ChannelId::new(STARBOARD)))
            .await
    );
    assert!(matches!(
        h.starboard
            .unignore(IgnoreTarget::Channel(ChannelId::new(STARBOARD)))
            .await,
        Err(AppError::StarboardErr(StarboardError::NotIgnored))
    ));

    Ok(())
}

/// Tests that bot accounts can't star messages.
///
/// Expected: BlockedUser
#[tokio::test]
async fn rejects_bot_starrers() -> Result<(), AppError> {
    let h = setup(1).await;
    let id = h.with_message(100);

    let result = h.starboard.add_star(id, channel(), user(3), true).await;

    assert!(matches!(
        result,
        Err(AppError::StarboardErr(StarboardError::BlockedUser))
    ));

    Ok(())
}
