use super::*;

/// Tests that purging flushes the queue and evicts idle entries.
///
/// Expected: queued update synchronized first, then the entry evicted
#[tokio::test]
async fn flushes_before_evicting() -> Result<(), AppError> {
    let h = setup(1).await;
    let id = h.with_message(100);
    h.starboard.add_star(id, channel(), user(1), false).await?;

    let evicted = h.starboard.purge_cache(Duration::ZERO).await?;

    assert_eq!(evicted, 1);
    assert_eq!(h.starboard.cache_len().await, 0);
    assert_eq!(h.gateway.mirror_count(), 1);
    assert!(stored_mirror(h.db(), id).await?.is_some());

    Ok(())
}

/// Tests that recently touched entries survive a purge.
///
/// Expected: nothing evicted with a long idle limit
#[tokio::test]
async fn keeps_recent_entries() -> Result<(), AppError> {
    let h = setup(1).await;
    let id = h.with_message(100);
    h.starboard.add_star(id, channel(), user(1), false).await?;

    let evicted = h.starboard.purge_cache(Duration::from_secs(600)).await?;

    assert_eq!(evicted, 0);
    assert_eq!(h.starboard.cache_len().await, 1);

    Ok(())
}

/// Tests that an evicted message is reloaded from the database with its mirror.
///
/// Expected: next star edits the existing mirror instead of posting a new one
#[tokio::test]
async fn evicted_message_keeps_its_mirror() -> Result<(), AppError> {
    let h = setup(1).await;
    let id = h.with_message(100);
    h.starboard.add_star(id, channel(), user(1), false).await?;
    h.starboard.purge_cache(Duration::ZERO).await?;

    h.starboard.add_star(id, channel(), user(2), false).await?;
    h.starboard.flush_queue().await?;

    let calls = h.gateway.calls();
    assert_eq!(calls.sends, 1);
    assert_eq!(calls.edits, 1);
    assert_eq!(h.gateway.mirror_count(), 1);

    Ok(())
}
