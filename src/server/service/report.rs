//! Moderation reports.

use entity::sea_orm_active_enums::{NotificationKind, ReportStatus, ReportTarget};
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{
        feedback::FeedbackRepository, forum_comment::ForumCommentRepository,
        group::GroupRepository, group_comment::GroupCommentRepository,
        report::ReportRepository, service::ServiceRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        report::{CreateReportParams, Report},
        user::User,
    },
    service::notification::notify,
    util::pagination::Paginated,
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn target_exists(
        &self,
        target_type: ReportTarget,
        target_id: Uuid,
    ) -> Result<bool, AppError> {
        let exists = match target_type {
            ReportTarget::User => UserRepository::new(self.db)
                .find_by_id(target_id)
                .await?
                .is_some(),
            ReportTarget::Group => GroupRepository::new(self.db)
                .find_by_id(target_id)
                .await?
                .is_some(),
            ReportTarget::Service => ServiceRepository::new(self.db)
                .find_by_id(target_id)
                .await?
                .is_some(),
            ReportTarget::ForumComment => ForumCommentRepository::new(self.db)
                .find_by_id(target_id)
                .await?
                .is_some(),
            ReportTarget::GroupComment => GroupCommentRepository::new(self.db)
                .find_by_id(target_id)
                .await?
                .is_some(),
            ReportTarget::FeedbackComment => FeedbackRepository::new(self.db)
                .find_by_id(target_id)
                .await?
                .is_some(),
        };

        Ok(exists)
    }

    /// Files a report against a target.
    ///
    /// # Returns
    /// - `Ok(Report)` - The pending report
    /// - `Err(AppError::NotFound)` - The target does not exist
    /// - `Err(AppError::Conflict)` - The reporter already has a pending report on it
    pub async fn create(&self, params: CreateReportParams) -> Result<Report, AppError> {
        if !self.target_exists(params.target_type, params.target_id).await? {
            return Err(AppError::NotFound("Report target not found".to_string()));
        }

        let repo = ReportRepository::new(self.db);
        if repo
            .has_pending(params.reporter_id, params.target_type, params.target_id)
            .await?
        {
            return Err(AppError::Conflict(
                "You already have a pending report for this content".to_string(),
            ));
        }

        let report = repo.create(params).await?;

        tracing::info!(
            report_id = %report.id,
            "Received report on {:?} {}",
            report.target_type,
            report.target_id
        );

        Ok(report)
    }

    pub async fn list(
        &self,
        status: Option<ReportStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Report>, AppError> {
        let (reports, total) = ReportRepository::new(self.db)
            .get_paginated(status, page, per_page)
            .await?;

        Ok(Paginated::new(reports, total, page, per_page))
    }

    /// Records a moderator's decision and tells the reporter.
    pub async fn set_status(
        &self,
        moderator: &User,
        id: Uuid,
        status: ReportStatus,
    ) -> Result<Report, AppError> {
        let txn = self.db.begin().await?;
        let report = ReportRepository::new(&txn)
            .set_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Report not found".to_string()))?;

        let outcome = match status {
            ReportStatus::Pending => None,
            ReportStatus::Reviewed => Some("reviewed"),
            ReportStatus::Dismissed => Some("dismissed"),
            ReportStatus::Actioned => Some("actioned"),
        };
        if let Some(outcome) = outcome {
            notify(
                &txn,
                report.reporter_id,
                moderator.id,
                NotificationKind::Report,
                format!("Your report was {}", outcome),
                None,
            )
            .await?;
        }
        txn.commit().await?;

        Ok(report)
    }
}
