use super::*;

/// Tests that adding then removing a star restores the displayed state.
///
/// The mirror created by the first star is deleted again once it is withdrawn.
///
/// Expected: one mirror after the add, none after the remove, nothing persisted
#[tokio::test]
async fn add_then_remove_deletes_fresh_mirror() -> Result<(), AppError> {
    let h = setup(1).await;
    let id = h.with_message(100);

    h.starboard.add_star(id, channel(), user(1), false).await?;
    h.starboard.flush_queue().await?;
    assert_eq!(h.gateway.mirror_count(), 1);
    assert!(stored_mirror(h.db(), id).await?.is_some());

    h.starboard.remove_star(id, channel(), user(1), false).await?;
    h.starboard.flush_queue().await?;

    assert_eq!(h.gateway.mirror_count(), 0);
    assert!(stored_mirror(h.db(), id).await?.is_none());
    let record = h.starboard.get_or_load(id, None, false).await?.unwrap();
    assert_eq!(record.stars(), 0);
    assert!(record.mirror.is_none());

    Ok(())
}

/// Tests removing a star that was never given.
///
/// Expected: NotStarred
#[tokio::test]
async fn rejects_missing_star() -> Result<(), AppError> {
    let h = setup(1).await;
    let id = h.with_message(100);
    h.starboard.add_star(id, channel(), user(1), false).await?;

    let result = h.starboard.remove_star(id, channel(), user(2), false).await;

    assert!(matches!(
        result,
        Err(AppError::StarboardErr(StarboardError::NotStarred))
    ));

    Ok(())
}

/// Tests that blocking a member keeps their existing stars.
///
/// Expected: star count unchanged, further attempts raise BlockedUser
#[tokio::test]
async fn block_keeps_stars_and_rejects_next_attempt() -> Result<(), AppError> {
    let h = setup(1).await;
    let first = h.with_message(100);
    let second = h.with_message(101);
    h.starboard.add_star(first, channel(), user(1), false).await?;

    h.starboard.block(user(1)).await?;

    let record = h.starboard.get_or_load(first, None, false).await?.unwrap();
    assert_eq!(record.stars(), 1);

    let add = h.starboard.add_star(second, channel(), user(1), false).await;
    assert!(matches!(
        add,
        Err(AppError::StarboardErr(StarboardError::BlockedUser))
    ));

    let remove = h.starboard.remove_star(first, channel(), user(1), false).await;
    assert!(matches!(
        remove,
        Err(AppError::StarboardErr(StarboardError::BlockedUser))
    ));

    Ok(())
}

/// Tests unstarring a message nobody starred yet.
///
/// Expected: NotStarred without fetching or tracking the message
#[tokio::test]
async fn rejects_untracked_message_without_fetch() -> Result<(), AppError> {
    let h = setup(1).await;
    let id = h.with_message(100);

    let result = h.starboard.remove_star(id, channel(), user(1), false).await;

    assert!(matches!(
        result,
        Err(AppError::StarboardErr(StarboardError::NotStarred))
    ));
    assert_eq!(h.gateway.calls().fetches, 0);
    assert_eq!(h.starboard.cache_len().await, 0);
    assert!(stored_mirror(h.db(), id).await?.is_none());

    Ok(())
}
