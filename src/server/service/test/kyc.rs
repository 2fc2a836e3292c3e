use super::*;
use crate::server::{
    data::user::UserRepository,
    model::kyc::{ReviewKycParams, SubmitKycParams},
    service::kyc::KycService,
};
use entity::sea_orm_active_enums::{DocumentType, KycStatus};
use test_utils::factory::{user::UserFactory, verification::KycApplicationFactory};

fn submission(user_id: uuid::Uuid) -> SubmitKycParams {
    SubmitKycParams {
        user_id,
        full_name: "Ada Lovelace".to_string(),
        document_type: DocumentType::NationalId,
        document_number: "ID-998877".to_string(),
        document_front: "/uploads/images/id-front.png".to_string(),
        document_back: None,
        selfie: None,
    }
}

/// Tests submission guards.
///
/// Expected: Conflict while an application is pending and for verified users
#[tokio::test]
async fn rejects_duplicate_and_verified_submissions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let applicant = user(db).await?;
    let verified = User::from_entity(UserFactory::new(db).kyc_verified(true).build().await?);
    let service = KycService::new(db);

    service.submit(&applicant, submission(applicant.id)).await?;
    let result = service.submit(&applicant, submission(applicant.id)).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let result = service.submit(&verified, submission(verified.id)).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests approving an application.
///
/// Expected: application approved, applicant kyc_verified and notified
#[tokio::test]
async fn approval_verifies_applicant() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let applicant = user(db).await?;
    let reviewer = admin(db).await?;
    let application = factory::create_kyc_application(db, applicant.id).await?;

    let reviewed = KycService::new(db)
        .review(
            application.id,
            ReviewKycParams {
                reviewer_id: reviewer.id,
                status: KycStatus::Approved,
                rejection_reason: Some("ignored".to_string()),
            },
        )
        .await?;

    assert_eq!(reviewed.status, KycStatus::Approved);
    assert_eq!(reviewed.reviewer_id, Some(reviewer.id));
    assert_eq!(reviewed.rejection_reason, None);

    let applicant = UserRepository::new(db).find_by_id(applicant.id).await?.unwrap();
    assert!(applicant.kyc_verified);
    assert_eq!(notification_count(db, applicant.id).await?, 1);

    Ok(())
}

/// Tests rejection rules.
///
/// Expected: BadRequest without a reason, Conflict when reviewing twice
#[tokio::test]
async fn rejection_requires_reason() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let applicant = user(db).await?;
    let reviewer = admin(db).await?;
    let application = KycApplicationFactory::new(db, applicant.id).build().await?;
    let service = KycService::new(db);

    let reject = |reason: Option<&str>| ReviewKycParams {
        reviewer_id: reviewer.id,
        status: KycStatus::Rejected,
        rejection_reason: reason.map(str::to_string),
    };

    let result = service.review(application.id, reject(Some("   "))).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let reviewed = service
        .review(application.id, reject(Some("Document is blurry")))
        .await?;
    assert_eq!(reviewed.status, KycStatus::Rejected);

    let result = service
        .review(application.id, reject(Some("Again")))
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
