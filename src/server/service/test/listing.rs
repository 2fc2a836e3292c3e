use super::*;
use crate::server::{model::service::CreateServiceParams, service::listing::ListingService};
use entity::sea_orm_active_enums::ServiceStatus;
use test_utils::factory::service::ServiceFactory;

/// Tests draft visibility.
///
/// Expected: NotFound for strangers and anonymous viewers, Ok for the owner and admins
#[tokio::test]
async fn drafts_are_visible_to_owner_and_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = user(db).await?;
    let stranger = user(db).await?;
    let moderator = admin(db).await?;
    let draft = ServiceFactory::new(db, owner.id)
        .status(ServiceStatus::Draft)
        .build()
        .await?;
    let service = ListingService::new(db);

    for viewer in [None, Some(&stranger)] {
        let result = service.get_by_slug(&draft.slug, viewer).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    service.get_by_slug(&draft.slug, Some(&owner)).await?;
    service.get_by_slug(&draft.slug, Some(&moderator)).await?;

    Ok(())
}

/// Tests creating a listing whose title has no slug characters.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_title_without_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = user(db).await?;

    let result = ListingService::new(db)
        .create(CreateServiceParams {
            user_id: owner.id,
            group_id: None,
            title: "!!!".to_string(),
            description: "Nothing to see".to_string(),
            category: "misc".to_string(),
            price_cents: 100,
            currency: "USD".to_string(),
            status: ServiceStatus::Published,
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests ownership checks on update and delete.
///
/// Expected: AccessDenied for a stranger, admin may delete
#[tokio::test]
async fn only_owner_updates_and_admin_may_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, listing) = factory::helpers::create_service_with_owner(db).await?;
    let stranger = user(db).await?;
    let moderator = admin(db).await?;
    let service = ListingService::new(db);

    let result = service
        .set_media(&stranger, listing.id, "/uploads/images/x.png".to_string())
        .await;
    assert!(matches!(result, Err(AppError::AuthErr(_))));

    let result = service.delete(&stranger, listing.id).await;
    assert!(matches!(result, Err(AppError::AuthErr(_))));

    service.delete(&moderator, listing.id).await?;
    let result = service.get_by_id(listing.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
