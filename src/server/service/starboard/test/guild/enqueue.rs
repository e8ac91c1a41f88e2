use super::*;

/// Tests that a message is queued at most once until it is flushed.
///
/// Expected: one queue entry after repeated mutations and enqueues
#[tokio::test]
async fn double_enqueue_keeps_one_entry() -> Result<(), AppError> {
    let h = setup(1).await;
    let id = h.with_message(100);

    h.starboard.add_star(id, channel(), user(1), false).await?;
    assert!(!h.starboard.enqueue(id).await);
    h.starboard.add_star(id, channel(), user(2), false).await?;

    assert_eq!(h.starboard.queue_len().await, 1);

    h.starboard.flush_queue().await?;
    assert_eq!(h.starboard.queue_len().await, 0);
    assert!(h.starboard.enqueue(id).await);
    assert_eq!(h.starboard.queue_len().await, 1);

    Ok(())
}

/// Tests enqueueing a message that isn't cached.
///
/// Expected: false and an empty queue
#[tokio::test]
async fn ignores_uncached_message() -> Result<(), AppError> {
    let h = setup(1).await;

    assert!(!h.starboard.enqueue(message_id(100)).await);
    assert_eq!(h.starboard.queue_len().await, 0);

    Ok(())
}
