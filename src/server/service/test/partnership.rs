use super::*;
use crate::server::{
    data::opening::OpeningRepository,
    model::opening::ApplyPartnershipParams,
    service::{
        opening::{OpeningService, PartnershipGroupService},
        partnership::PartnershipService,
    },
};
use entity::sea_orm_active_enums::{OpeningStatus, PartnershipStatus};
use test_utils::factory::opening::OpeningFactory;

fn application(opening_id: uuid::Uuid, user_id: uuid::Uuid) -> ApplyPartnershipParams {
    ApplyPartnershipParams {
        opening_id,
        user_id,
        message: Some("I can cover a third".to_string()),
    }
}

/// Tests application guards.
///
/// Expected: BadRequest for the owner, Conflict for a second live application
#[tokio::test]
async fn rejects_owner_and_duplicate_applications() -> Result<(), AppError> {
    let test = TestBuilder::new().with_partnership_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, opening) = factory::helpers::create_opening_with_owner(db).await?;
    let owner = User::from_entity(owner);
    let applicant = user(db).await?;
    let service = PartnershipService::new(db);

    let result = service.apply(&owner, application(opening.id, owner.id)).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    service
        .apply(&applicant, application(opening.id, applicant.id))
        .await?;
    assert_eq!(notification_count(db, owner.id).await?, 1);

    let result = service
        .apply(&applicant, application(opening.id, applicant.id))
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests filling the last slot.
///
/// Verifies that accepting into the last slot marks the opening filled, that further
/// acceptances are refused, and that withdrawing an accepted partner reopens it.
///
/// Expected: Filled after the first accept, BadRequest for the second, Open after withdrawal
#[tokio::test]
async fn last_accept_fills_opening() -> Result<(), AppError> {
    let test = TestBuilder::new().with_partnership_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = user(db).await?;
    let opening = OpeningFactory::new(db, owner.id).slots(1).build().await?;
    let first = user(db).await?;
    let second = user(db).await?;
    let service = PartnershipService::new(db);

    let first_application = service
        .apply(&first, application(opening.id, first.id))
        .await?;
    let second_application = service
        .apply(&second, application(opening.id, second.id))
        .await?;

    let accepted = service
        .set_status(&owner, first_application.id, PartnershipStatus::Accepted, None)
        .await?;
    assert_eq!(accepted.status, PartnershipStatus::Accepted);

    let repo = OpeningRepository::new(db);
    let filled = repo.find_by_id(opening.id).await?.unwrap();
    assert_eq!(filled.status, OpeningStatus::Filled);

    let result = service
        .set_status(&owner, second_application.id, PartnershipStatus::Accepted, None)
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    service
        .set_status(&first, first_application.id, PartnershipStatus::Withdrawn, None)
        .await?;
    let reopened = repo.find_by_id(opening.id).await?.unwrap();
    assert_eq!(reopened.status, OpeningStatus::Open);

    Ok(())
}

/// Tests who may change an application.
///
/// Expected: AuthErr when the applicant accepts or a stranger withdraws
#[tokio::test]
async fn enforces_roles_on_status_changes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_partnership_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, opening) = factory::helpers::create_opening_with_owner(db).await?;
    let applicant = user(db).await?;
    let stranger = user(db).await?;
    let service = PartnershipService::new(db);

    let pending = service
        .apply(&applicant, application(opening.id, applicant.id))
        .await?;

    let result = service
        .set_status(&applicant, pending.id, PartnershipStatus::Accepted, None)
        .await;
    assert!(matches!(result, Err(AppError::AuthErr(_))));

    let result = service
        .set_status(&stranger, pending.id, PartnershipStatus::Withdrawn, None)
        .await;
    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}

/// Tests assigning a group from another opening on acceptance.
///
/// Expected: BadRequest for a foreign group, Ok for the opening's own group
#[tokio::test]
async fn accept_requires_group_of_same_opening() -> Result<(), AppError> {
    let test = TestBuilder::new().with_partnership_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = user(db).await?;
    let opening = factory::create_opening(db, owner.id).await?;
    let other_opening = factory::create_opening(db, owner.id).await?;
    let applicant = user(db).await?;

    let groups = PartnershipGroupService::new(db);
    let own_group = groups
        .create(&owner, opening.id, "Morning shift".to_string())
        .await?;
    let foreign_group = groups
        .create(&owner, other_opening.id, "Morning shift".to_string())
        .await?;
    let result = groups
        .create(&owner, opening.id, "Morning shift".to_string())
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let service = PartnershipService::new(db);
    let pending = service
        .apply(&applicant, application(opening.id, applicant.id))
        .await?;

    let result = service
        .set_status(
            &owner,
            pending.id,
            PartnershipStatus::Accepted,
            Some(foreign_group.id),
        )
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let accepted = service
        .set_status(
            &owner,
            pending.id,
            PartnershipStatus::Accepted,
            Some(own_group.id),
        )
        .await?;
    assert_eq!(accepted.partnership_group_id, Some(own_group.id));

    Ok(())
}

/// Tests listing openings with a page number far past the end.
///
/// Expected: an empty page instead of an offset overflow
#[tokio::test]
async fn huge_page_number_returns_empty_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = user(db).await?;
    factory::create_opening(db, owner.id).await?;

    let page = OpeningService::new(db).list(None, u64::MAX, 10).await?;

    assert!(page.items.is_empty());
    assert_eq!(page.total, 1);

    Ok(())
}
