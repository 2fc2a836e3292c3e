use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ReportStatus, ReportTarget};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportDto {
    pub id: Uuid,
    pub reporter_id: Uuid,
    #[schema(value_type = String)]
    pub target_type: ReportTarget,
    pub target_id: Uuid,
    pub reason: String,
    pub details: Option<String>,
    #[schema(value_type = String)]
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateReportDto {
    #[schema(value_type = String)]
    pub target_type: ReportTarget,
    pub target_id: Uuid,
    #[validate(length(min = 1, max = 120))]
    pub reason: String,
    #[validate(length(max = 2000))]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateReportStatusDto {
    #[schema(value_type = String)]
    pub status: ReportStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportFilterDto {
    pub status: Option<ReportStatus>,
}
