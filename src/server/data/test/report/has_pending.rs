use super::*;

/// Tests the pending-report check used to keep one open report per target.
///
/// Verifies that resolving the report frees the reporter to file again.
///
/// Expected: true while pending, false after review
#[tokio::test]
async fn only_pending_reports_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let reporter = factory::create_user(db).await?;
    let target = factory::create_user(db).await?;
    let report = factory::create_report(db, reporter.id, ReportTarget::User, target.id).await?;

    let repo = ReportRepository::new(db);
    assert!(repo.has_pending(reporter.id, ReportTarget::User, target.id).await?);
    assert!(!repo.has_pending(reporter.id, ReportTarget::Group, target.id).await?);

    let reviewed = repo
        .set_status(report.id, ReportStatus::Dismissed)
        .await?
        .unwrap();
    assert_eq!(reviewed.status, ReportStatus::Dismissed);
    assert!(!repo.has_pending(reporter.id, ReportTarget::User, target.id).await?);

    let (pending, total) = repo.get_paginated(Some(ReportStatus::Pending), 0, 10).await?;
    assert!(pending.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
