use super::*;

/// Tests that users can only mark their own notifications read.
///
/// Expected: Ok(None) for another user's notification, Ok(Some) for the owner
#[tokio::test]
async fn marks_only_own_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_partnership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let notification = factory::create_notification(db, owner.id).await?;

    let repo = NotificationRepository::new(db);
    assert!(repo.mark_read(notification.id, stranger.id).await?.is_none());

    let read = repo.mark_read(notification.id, owner.id).await?.unwrap();
    assert!(read.read_at.is_some());

    Ok(())
}

/// Tests marking every notification read and the unread filter.
///
/// Expected: two updated, none left unread, other users untouched
#[tokio::test]
async fn mark_all_read_clears_unread() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_partnership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_notification(db, user.id).await?;
    factory::create_notification(db, user.id).await?;
    factory::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    let (_, unread_before) = repo.get_by_user_paginated(user.id, true, 0, 10).await?;
    assert_eq!(unread_before, 2);

    assert_eq!(repo.mark_all_read(user.id).await?, 2);

    let (_, unread_after) = repo.get_by_user_paginated(user.id, true, 0, 10).await?;
    assert_eq!(unread_after, 0);
    let (_, all) = repo.get_by_user_paginated(user.id, false, 0, 10).await?;
    assert_eq!(all, 2);
    let (_, other_unread) = repo.get_by_user_paginated(other.id, true, 0, 10).await?;
    assert_eq!(other_unread, 1);

    Ok(())
}
