use super::*;

/// Tests clearing every star of a mirrored message.
///
/// Expected: stars dropped, message queued and its mirror deleted on flush
#[tokio::test]
async fn clears_stars_and_removes_mirror() -> Result<(), AppError> {
    let h = setup(1).await;
    let id = h.with_message(100);
    h.starboard.add_star(id, channel(), user(1), false).await?;
    h.starboard.add_star(id, channel(), user(2), false).await?;
    h.starboard.flush_queue().await?;

    assert!(h.starboard.clear_stars(id).await?);
    h.starboard.flush_queue().await?;

    let record = h.starboard.get_or_load(id, None, false).await?.unwrap();
    assert_eq!(record.stars(), 0);
    assert_eq!(h.gateway.mirror_count(), 0);

    Ok(())
}

/// Tests clearing stars of an untracked message.
///
/// Expected: Ok(false) and no queue entry
#[tokio::test]
async fn ignores_untracked_message() -> Result<(), AppError> {
    let h = setup(1).await;

    assert!(!h.starboard.clear_stars(message_id(100)).await?);
    assert_eq!(h.starboard.queue_len().await, 0);

    Ok(())
}
