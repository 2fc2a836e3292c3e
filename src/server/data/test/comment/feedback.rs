use super::*;

/// Tests the per-user feedback existence check.
///
/// Expected: true only for the reviewer who left feedback
#[tokio::test]
async fn detects_existing_feedback() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, service) = factory::helpers::create_service_with_owner(db).await?;
    let reviewer = factory::create_user(db).await?;
    let bystander = factory::create_user(db).await?;

    let repo = FeedbackRepository::new(db);
    let feedback = repo
        .create(CreateFeedbackParams {
            service_id: service.id,
            user_id: reviewer.id,
            rating: 4,
            body: "Quick and friendly".to_string(),
        })
        .await?;

    assert_eq!(feedback.rating, 4);
    assert!(repo.exists_for(service.id, reviewer.id).await?);
    assert!(!repo.exists_for(service.id, bystander.id).await?);

    let (items, total) = repo.get_by_service_paginated(service.id, 0, 10).await?;
    assert_eq!(total, 1);
    assert_eq!(items[0].id, feedback.id);

    Ok(())
}
