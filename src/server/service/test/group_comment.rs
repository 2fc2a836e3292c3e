use super::*;
use crate::server::{
    model::comment::CreateGroupCommentParams, service::group_comment::GroupCommentService,
};
use entity::sea_orm_active_enums::GroupPrivacy;
use test_utils::factory::group::GroupFactory;

fn comment(
    group_id: uuid::Uuid,
    user_id: uuid::Uuid,
    parent_id: Option<uuid::Uuid>,
) -> CreateGroupCommentParams {
    CreateGroupCommentParams {
        group_id,
        user_id,
        parent_id,
        body: "Count me in".to_string(),
    }
}

/// Tests replying across groups.
///
/// Expected: Err(BadRequest) when the parent belongs to another group
#[tokio::test]
async fn reply_parent_must_be_in_same_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, group) = factory::helpers::create_group_with_owner(db).await?;
    let other_group = factory::create_group(db, owner.id).await?;
    let member = user(db).await?;
    let service = GroupCommentService::new(db);

    let parent = service
        .create(&member, comment(other_group.id, member.id, None))
        .await?;

    let result = service
        .create(&member, comment(group.id, member.id, Some(parent.id)))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let reply = service
        .create(&member, comment(other_group.id, member.id, Some(parent.id)))
        .await?;
    assert_eq!(reply.parent_id, Some(parent.id));

    Ok(())
}

/// Tests private group comments.
///
/// Verifies that comments in a private group can only be read and written by the owner.
///
/// Expected: NotFound for other users, Ok for the owner
#[tokio::test]
async fn private_group_is_owner_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = user(db).await?;
    let stranger = user(db).await?;
    let group = GroupFactory::new(db, owner.id)
        .privacy(GroupPrivacy::Private)
        .build()
        .await?;
    let service = GroupCommentService::new(db);

    let result = service
        .create(&stranger, comment(group.id, stranger.id, None))
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let result = service.list(group.id, Some(&stranger), 0, 10).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    service
        .create(&owner, comment(group.id, owner.id, None))
        .await?;
    let page = service.list(group.id, Some(&owner), 0, 10).await?;
    assert_eq!(page.total, 1);

    Ok(())
}
