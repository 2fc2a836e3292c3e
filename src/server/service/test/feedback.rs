use entity::sea_orm_active_enums::ServiceStatus;
use test_utils::factory::service::ServiceFactory;

use super::*;
use crate::server::{model::comment::CreateFeedbackParams, service::feedback::FeedbackService};

fn review(service_id: uuid::Uuid, user_id: uuid::Uuid) -> CreateFeedbackParams {
    CreateFeedbackParams {
        service_id,
        user_id,
        rating: 4,
        body: "Quick and friendly".to_string(),
    }
}

/// Tests the one-review-per-user rule and owner notification.
///
/// Expected: first review Ok and notifies the owner, second review Err(Conflict)
#[tokio::test]
async fn one_review_per_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, listing) = factory::helpers::create_service_with_owner(db).await?;
    let reviewer = user(db).await?;
    let service = FeedbackService::new(db);

    let feedback = service
        .create(&reviewer, review(listing.id, reviewer.id))
        .await?;
    assert_eq!(feedback.rating, 4);
    assert_eq!(notification_count(db, owner.id).await?, 1);

    let result = service
        .create(&reviewer, review(listing.id, reviewer.id))
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests reviewing your own listing.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn owner_cannot_review_own_service() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, listing) = factory::helpers::create_service_with_owner(db).await?;
    let owner = User::from_entity(owner);

    let result = FeedbackService::new(db)
        .create(&owner, review(listing.id, owner.id))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests reviewing a listing that has not been published.
///
/// Expected: Err(BadRequest) and no notification for the owner
#[tokio::test]
async fn cannot_review_unpublished_service() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = user(db).await?;
    let reviewer = user(db).await?;
    let draft = ServiceFactory::new(db, owner.id)
        .status(ServiceStatus::Draft)
        .build()
        .await?;

    let result = FeedbackService::new(db)
        .create(&reviewer, review(draft.id, reviewer.id))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(notification_count(db, owner.id).await?, 0);

    Ok(())
}
