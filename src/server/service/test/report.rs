use super::*;
use crate::server::{model::report::CreateReportParams, service::report::ReportService};
use entity::sea_orm_active_enums::{ReportStatus, ReportTarget};
use uuid::Uuid;

fn report(reporter_id: Uuid, target_type: ReportTarget, target_id: Uuid) -> CreateReportParams {
    CreateReportParams {
        reporter_id,
        target_type,
        target_id,
        reason: "Spam".to_string(),
        details: None,
    }
}

/// Tests the one-pending-report rule.
///
/// Expected: Conflict while pending, Ok again once the report is resolved
#[tokio::test]
async fn one_pending_report_per_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let reporter = user(db).await?;
    let moderator = admin(db).await?;
    let (_, group) = factory::helpers::create_group_with_owner(db).await?;
    let service = ReportService::new(db);

    let first = service
        .create(report(reporter.id, ReportTarget::Group, group.id))
        .await?;
    let result = service
        .create(report(reporter.id, ReportTarget::Group, group.id))
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    service
        .set_status(&moderator, first.id, ReportStatus::Dismissed)
        .await?;
    assert_eq!(notification_count(db, reporter.id).await?, 1);

    service
        .create(report(reporter.id, ReportTarget::Group, group.id))
        .await?;

    Ok(())
}

/// Tests reporting content that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let reporter = user(db).await?;

    let result = ReportService::new(db)
        .create(report(reporter.id, ReportTarget::User, Uuid::new_v4()))
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
