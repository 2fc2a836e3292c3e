use super::*;
use uuid::Uuid;

fn post(user_id: Uuid, parent_id: Option<Uuid>, topic: &str) -> CreateForumCommentParams {
    CreateForumCommentParams {
        user_id,
        parent_id,
        topic: topic.to_string(),
        body: "Anyone selling sourdough starter?".to_string(),
    }
}

/// Tests that top-level listing excludes replies and honours the topic filter.
///
/// Expected: only parentless posts in the requested topic
#[tokio::test]
async fn lists_top_level_posts_by_topic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = ForumCommentRepository::new(db);
    let baking = repo.create(post(user.id, None, "baking")).await?;
    repo.create(post(user.id, Some(baking.id), "baking")).await?;
    repo.create(post(user.id, None, "general")).await?;

    let (posts, total) = repo.get_top_level_paginated(Some("baking"), 0, 10).await?;
    assert_eq!(total, 1);
    assert_eq!(posts[0].id, baking.id);

    let (_, all_total) = repo.get_top_level_paginated(None, 0, 10).await?;
    assert_eq!(all_total, 2);

    Ok(())
}

/// Tests that deleting a post removes its replies.
///
/// Expected: replies listing is empty after the parent is deleted
#[tokio::test]
async fn delete_cascades_to_replies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = ForumCommentRepository::new(db);
    let parent = repo.create(post(user.id, None, "general")).await?;
    let reply = repo.create(post(user.id, Some(parent.id), "general")).await?;

    let (replies, _) = repo.get_replies_paginated(parent.id, 0, 10).await?;
    assert_eq!(replies.len(), 1);

    assert!(repo.delete(parent.id).await?);
    assert!(repo.find_by_id(reply.id).await?.is_none());

    Ok(())
}
