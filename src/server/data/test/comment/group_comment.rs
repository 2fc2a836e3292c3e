use super::*;

/// Tests listing comments of one group.
///
/// Expected: comments of other groups are not included
#[tokio::test]
async fn lists_only_the_groups_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, group) = factory::helpers::create_group_with_owner(db).await?;
    let other_group = factory::create_group(db, owner.id).await?;

    let repo = GroupCommentRepository::new(db);
    for body in ["first", "second"] {
        repo.create(CreateGroupCommentParams {
            group_id: group.id,
            user_id: owner.id,
            parent_id: None,
            body: body.to_string(),
        })
        .await?;
    }
    factory::create_group_comment(db, other_group.id, owner.id).await?;

    let (comments, total) = repo.get_by_group_paginated(group.id, 0, 10).await?;

    assert_eq!(total, 2);
    assert!(comments.iter().all(|comment| comment.group_id == group.id));

    Ok(())
}
