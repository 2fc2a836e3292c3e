use super::*;
use crate::server::service::reaction::ReactionService;
use entity::sea_orm_active_enums::{GroupPrivacy, ReactionKind, ReactionTarget};
use test_utils::factory::group::GroupFactory;
use uuid::Uuid;

/// Tests reacting to content that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let member = user(db).await?;

    let result = ReactionService::new(db)
        .set(&member, ReactionTarget::ForumComment, Uuid::new_v4(), ReactionKind::Like)
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests replacing a reaction.
///
/// Verifies that the author is notified once, that changing the kind keeps a single
/// reaction, and that the summary reflects the latest kind.
///
/// Expected: one notification, counts `[(Love, 1)]`
#[tokio::test]
async fn replaces_kind_and_notifies_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let author = user(db).await?;
    let reader = user(db).await?;
    let post = factory::create_forum_post(db, author.id).await?;
    let service = ReactionService::new(db);

    service
        .set(&reader, ReactionTarget::ForumComment, post.id, ReactionKind::Like)
        .await?;
    service
        .set(&reader, ReactionTarget::ForumComment, post.id, ReactionKind::Love)
        .await?;

    let summary = service
        .summary(ReactionTarget::ForumComment, post.id, Some(&reader))
        .await?;
    assert_eq!(summary.counts, vec![(ReactionKind::Love, 1)]);
    assert_eq!(notification_count(db, author.id).await?, 1);

    service
        .remove(&reader, ReactionTarget::ForumComment, post.id)
        .await?;
    let result = service
        .remove(&reader, ReactionTarget::ForumComment, post.id)
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests reacting to your own content.
///
/// Expected: reaction stored, no notification
#[tokio::test]
async fn own_content_does_not_notify() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, listing) = factory::helpers::create_service_with_owner(db).await?;
    let owner = User::from_entity(owner);

    ReactionService::new(db)
        .set(&owner, ReactionTarget::Service, listing.id, ReactionKind::Laugh)
        .await?;
    assert_eq!(notification_count(db, owner.id).await?, 0);

    Ok(())
}

/// Tests reacting to a comment in a private group.
///
/// Verifies that an outsider can neither react to nor count reactions on content the
/// group hides, and that the owner still can.
///
/// Expected: Err(NotFound) for the outsider, no notification, owner sees counts
#[tokio::test]
async fn hides_comments_in_private_groups() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = user(db).await?;
    let outsider = user(db).await?;
    let group = GroupFactory::new(db, owner.id)
        .privacy(GroupPrivacy::Private)
        .build()
        .await?;
    let comment = factory::create_group_comment(db, group.id, owner.id).await?;
    let service = ReactionService::new(db);

    let result = service
        .set(&outsider, ReactionTarget::GroupComment, comment.id, ReactionKind::Like)
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(notification_count(db, owner.id).await?, 0);

    for viewer in [None, Some(&outsider)] {
        let result = service
            .summary(ReactionTarget::GroupComment, comment.id, viewer)
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    service
        .set(&owner, ReactionTarget::GroupComment, comment.id, ReactionKind::Love)
        .await?;
    let summary = service
        .summary(ReactionTarget::GroupComment, comment.id, Some(&owner))
        .await?;
    assert_eq!(summary.counts, vec![(ReactionKind::Love, 1)]);

    Ok(())
}
