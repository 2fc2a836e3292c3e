use super::*;
use test_utils::factory::opening::PartnershipFactory;

/// Tests the live-application check.
///
/// Verifies that rejected and withdrawn applications do not block reapplying.
///
/// Expected: true for pending, false after withdrawal
#[tokio::test]
async fn withdrawn_applications_are_not_live() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_partnership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, opening) = factory::helpers::create_opening_with_owner(db).await?;
    let applicant = factory::create_user(db).await?;
    let application = factory::create_partnership(db, opening.id, applicant.id).await?;

    let repo = PartnershipRepository::new(db);
    assert!(repo.has_live(opening.id, applicant.id).await?);

    repo.set_status(application.id, PartnershipStatus::Withdrawn, None)
        .await?;
    assert!(!repo.has_live(opening.id, applicant.id).await?);

    Ok(())
}

/// Tests counting accepted partnerships.
///
/// Expected: only accepted applications count toward filled slots
#[tokio::test]
async fn counts_only_accepted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_partnership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, opening) = factory::helpers::create_opening_with_owner(db).await?;

    for status in [
        PartnershipStatus::Accepted,
        PartnershipStatus::Accepted,
        PartnershipStatus::Pending,
        PartnershipStatus::Rejected,
    ] {
        let applicant = factory::create_user(db).await?;
        PartnershipFactory::new(db, opening.id, applicant.id)
            .status(status)
            .build()
            .await?;
    }

    let repo = PartnershipRepository::new(db);
    assert_eq!(repo.count_accepted(opening.id).await?, 2);

    let (_, total) = repo.get_by_opening_paginated(opening.id, 0, 10).await?;
    assert_eq!(total, 4);

    Ok(())
}

/// Tests assigning a partnership group on acceptance.
///
/// Expected: group id stored alongside the accepted status
#[tokio::test]
async fn assigns_group_on_accept() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_partnership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, opening) = factory::helpers::create_opening_with_owner(db).await?;
    let group = factory::create_partnership_group(db, opening.id).await?;
    let applicant = factory::create_user(db).await?;
    let application = factory::create_partnership(db, opening.id, applicant.id).await?;

    let repo = PartnershipRepository::new(db);
    let accepted = repo
        .set_status(application.id, PartnershipStatus::Accepted, Some(group.id))
        .await?
        .unwrap();

    assert_eq!(accepted.status, PartnershipStatus::Accepted);
    assert_eq!(accepted.partnership_group_id, Some(group.id));

    Ok(())
}
