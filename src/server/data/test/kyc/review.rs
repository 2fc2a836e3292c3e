use super::*;

/// Tests reviewing a pending application.
///
/// Verifies that the reviewer and timestamp are recorded and the application no longer
/// counts as pending.
///
/// Expected: Ok(Some) with status rejected and reason set
#[tokio::test]
async fn records_reviewer_and_outcome() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let applicant = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let application = factory::create_kyc_application(db, applicant.id).await?;

    let repo = KycRepository::new(db);
    assert!(repo.has_pending(applicant.id).await?);

    let reviewed = repo
        .review(
            application.id,
            ReviewKycParams {
                reviewer_id: admin.id,
                status: KycStatus::Rejected,
                rejection_reason: Some("Blurry photo".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(reviewed.status, KycStatus::Rejected);
    assert_eq!(reviewed.reviewer_id, Some(admin.id));
    assert!(reviewed.reviewed_at.is_some());
    assert!(!repo.has_pending(applicant.id).await?);

    let latest = repo.find_latest_by_user(applicant.id).await?.unwrap();
    assert_eq!(latest.id, application.id);

    Ok(())
}

/// Tests that the admin queue only lists pending applications.
///
/// Expected: one pending application out of two
#[tokio::test]
async fn pending_queue_excludes_reviewed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let waiting = factory::create_user(db).await?;
    let done = factory::create_user(db).await?;
    factory::create_kyc_application(db, waiting.id).await?;
    test_utils::factory::verification::KycApplicationFactory::new(db, done.id)
        .status(KycStatus::Approved)
        .build()
        .await?;

    let repo = KycRepository::new(db);
    let (applications, total) = repo.get_pending_paginated(0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(applications[0].user_id, waiting.id);

    Ok(())
}
