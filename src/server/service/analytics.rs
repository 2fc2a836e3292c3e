use entity::sea_orm_active_enums::{EngagementAction, EngagementTarget};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::analytics::AnalyticsRepository,
    error::AppError,
    model::analytics::{RecordEngagementParams, RecordPageVisitParams},
};

/// Most paths returned by the page-visit report.
pub const TOP_PAGES_LIMIT: u64 = 50;

pub struct AnalyticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn record_page_visit(&self, params: RecordPageVisitParams) -> Result<Uuid, AppError> {
        Ok(AnalyticsRepository::new(self.db)
            .record_page_visit(params)
            .await?)
    }

    pub async fn record_engagement(
        &self,
        params: RecordEngagementParams,
    ) -> Result<Uuid, AppError> {
        Ok(AnalyticsRepository::new(self.db)
            .record_engagement(params)
            .await?)
    }

    /// Visit counts per path, busiest first.
    pub async fn page_visit_counts(&self) -> Result<Vec<(String, u64)>, AppError> {
        Ok(AnalyticsRepository::new(self.db)
            .page_visit_counts(TOP_PAGES_LIMIT)
            .await?)
    }

    pub async fn engagement_counts(
        &self,
        target_type: EngagementTarget,
        target_id: Uuid,
    ) -> Result<Vec<(EngagementAction, u64)>, AppError> {
        Ok(AnalyticsRepository::new(self.db)
            .engagement_counts(target_type, target_id)
            .await?)
    }
}
