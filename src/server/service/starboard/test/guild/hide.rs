use super::*;

/// Tests that hiding a mirrored message deletes its mirror on the next pass.
///
/// Expected: mirror gone, starrers untouched, mirror restored after unhide
#[tokio::test]
async fn hide_deletes_mirror_and_keeps_starrers() -> Result<(), AppError> {
    let h = setup(1).await;
    let id = h.with_message(100);
    h.starboard.add_star(id, channel(), user(1), false).await?;
    h.starboard.flush_queue().await?;
    assert_eq!(h.gateway.mirror_count(), 1);

    h.starboard.hide(id, channel()).await?;
    // hiding never deletes synchronously
    assert_eq!(h.gateway.mirror_count(), 1);
    h.starboard.flush_queue().await?;

    assert_eq!(h.gateway.mirror_count(), 0);
    let record = h.starboard.get_or_load(id, None, false).await?.unwrap();
    assert!(record.hidden);
    assert!(record.starrers.contains(&user(1)));
    assert!(stored_mirror(h.db(), id).await?.is_none());

    h.starboard.unhide(id, channel()).await?;
    h.starboard.flush_queue().await?;
    assert_eq!(h.gateway.mirror_count(), 1);

    Ok(())
}

/// Tests redundant hide and unhide calls.
///
/// Expected: AlreadyHidden and NotHidden
#[tokio::test]
async fn rejects_redundant_calls() -> Result<(), AppError> {
    let h = setup(1).await;
    let id = h.with_message(100);

    let unhide = h.starboard.unhide(id, channel()).await;
    assert!(matches!(
        unhide,
        Err(AppError::StarboardErr(StarboardError::NotHidden))
    ));

    h.starboard.hide(id, channel()).await?;
    let hide = h.starboard.hide(id, channel()).await;
    assert!(matches!(
        hide,
        Err(AppError::StarboardErr(StarboardError::AlreadyHidden))
    ));

    Ok(())
}
