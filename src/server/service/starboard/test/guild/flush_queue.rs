use sea_orm::{ConnectionTrait, DbBackend, Schema};

use super::*;

/// Tests the mirror lifecycle around a threshold of three stars.
///
/// Expected: no mirror at two stars, exactly one at three, deleted when back at two
#[tokio::test]
async fn mirror_follows_threshold() -> Result<(), AppError> {
    let h = setup(3).await;
    let id = h.with_message(100);

    h.starboard.add_star(id, channel(), user(1), false).await?;
    h.starboard.add_star(id, channel(), user(2), false).await?;
    h.starboard.flush_queue().await?;
    assert_eq!(h.gateway.mirror_count(), 0);

    h.starboard.add_star(id, channel(), user(3), false).await?;
    h.starboard.flush_queue().await?;
    assert_eq!(h.gateway.mirror_count(), 1);
    assert_eq!(h.gateway.calls().sends, 1);

    let record = h.starboard.get_or_load(id, None, false).await?.unwrap();
    let mirror = record.mirror.unwrap();
    assert_eq!(mirror.channel_id, ChannelId::new(STARBOARD));
    assert_eq!(
        stored_mirror(h.db(), id).await?,
        Some(mirror.message_id.to_string())
    );
    let (_, post) = h.gateway.mirror(mirror.message_id).unwrap();
    assert_eq!(post.content, format!("⭐ **3** <#{}>", CHANNEL));

    h.starboard.remove_star(id, channel(), user(3), false).await?;
    h.starboard.flush_queue().await?;
    assert_eq!(h.gateway.mirror_count(), 0);
    assert!(stored_mirror(h.db(), id).await?.is_none());

    Ok(())
}

/// Tests that further stars edit the existing mirror.
///
/// Expected: one send, one edit, header updated
#[tokio::test]
async fn edits_existing_mirror() -> Result<(), AppError> {
    let h = setup(1).await;
    let id = h.with_message(100);

    h.starboard.add_star(id, channel(), user(1), false).await?;
    h.starboard.flush_queue().await?;
    h.starboard.add_star(id, channel(), user(2), false).await?;
    h.starboard.flush_queue().await?;

    let calls = h.gateway.calls();
    assert_eq!(calls.sends, 1);
    assert_eq!(calls.edits, 1);

    let record = h.starboard.get_or_load(id, None, false).await?.unwrap();
    let (_, post) = h.gateway.mirror(record.mirror.unwrap().message_id).unwrap();
    assert!(post.content.starts_with("⭐ **2**"));

    Ok(())
}

/// Tests flushing while no starboard channel is configured.
///
/// Expected: queue emptied without Discord calls, mirror posted once a channel is set
#[tokio::test]
async fn skips_unconfigured_guild() -> Result<(), AppError> {
    let h = setup_without_channel().await;
    let id = h.with_message(100);

    h.starboard.add_star(id, channel(), user(1), false).await?;
    assert_eq!(h.starboard.flush_queue().await?, 1);

    assert_eq!(h.starboard.queue_len().await, 0);
    assert_eq!(h.gateway.calls().sends, 0);

    h.starboard.set_channel(Some(ChannelId::new(STARBOARD))).await?;
    h.starboard.add_star(id, channel(), user(2), false).await?;
    h.starboard.flush_queue().await?;
    assert_eq!(h.gateway.mirror_count(), 1);

    h.starboard.shutdown_janitor().await?;

    Ok(())
}

/// Tests that several queued messages are synchronized in one flush.
///
/// Expected: flush reports every message and posts one mirror each
#[tokio::test]
async fn flushes_every_queued_message() -> Result<(), AppError> {
    let h = setup(1).await;
    for id in 100..105 {
        let id = h.with_message(id);
        h.starboard.add_star(id, channel(), user(1), false).await?;
    }

    assert_eq!(h.starboard.flush_queue().await?, 5);
    assert_eq!(h.gateway.mirror_count(), 5);

    Ok(())
}

/// Tests a flush whose mirror change can't be persisted.
///
/// The reposted mirror already exists on Discord, so the message stays queued and the
/// next flush persists it without posting again.
///
/// Expected: Err with the message still queued, then the new mirror stored after recovery
#[tokio::test]
async fn keeps_unsaved_mirror_queued() -> Result<(), AppError> {
    let mut h = setup(1).await;
    let id = h.with_message(100);
    h.starboard.add_star(id, channel(), user(1), false).await?;
    h.starboard.flush_queue().await?;
    let original = h.starboard.get_or_load(id, None, false).await?.unwrap().mirror.unwrap();

    h.db().execute_unprepared("DROP TABLE starboard_starrer").await?;
    h.gateway.remove_mirror(original.message_id);
    assert!(h.starboard.enqueue(id).await);

    assert!(h.starboard.flush_queue().await.is_err());
    assert_eq!(h.starboard.queue_len().await, 1);
    let cached = h.starboard.get_or_load(id, None, false).await?.unwrap();
    let reposted = cached.mirror.unwrap();
    assert_ne!(reposted, original);
    assert_eq!(
        stored_mirror(h.db(), id).await?,
        Some(original.message_id.to_string())
    );

    h.test
        .with_tables(vec![Schema::new(DbBackend::Sqlite)
            .create_table_from_entity(entity::prelude::StarboardStarrer)])
        .await
        .unwrap();
    assert_eq!(h.starboard.flush_queue().await?, 1);

    assert_eq!(h.starboard.queue_len().await, 0);
    assert_eq!(
        stored_mirror(h.db(), id).await?,
        Some(reposted.message_id.to_string())
    );
    assert_eq!(h.gateway.calls().sends, 2);
    assert_eq!(h.gateway.mirror_count(), 1);

    Ok(())
}
