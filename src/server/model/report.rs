use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ReportStatus, ReportTarget};
use uuid::Uuid;

use crate::model::report::{CreateReportDto, ReportDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: Uuid,
    pub reporter_id: Uuid,
    pub target_type: ReportTarget,
    pub target_id: Uuid,
    pub reason: String,
    pub details: Option<String>,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
}

impl Report {
    pub fn from_entity(entity: entity::report::Model) -> Self {
        Self {
            id: entity.id,
            reporter_id: entity.reporter_id,
            target_type: entity.target_type,
            target_id: entity.target_id,
            reason: entity.reason,
            details: entity.details,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ReportDto {
        ReportDto {
            id: self.id,
            reporter_id: self.reporter_id,
            target_type: self.target_type,
            target_id: self.target_id,
            reason: self.reason,
            details: self.details,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReportParams {
    pub reporter_id: Uuid,
    pub target_type: ReportTarget,
    pub target_id: Uuid,
    pub reason: String,
    pub details: Option<String>,
}

impl CreateReportParams {
    pub fn from_dto(reporter_id: Uuid, dto: CreateReportDto) -> Self {
        Self {
            reporter_id,
            target_type: dto.target_type,
            target_id: dto.target_id,
            reason: dto.reason.trim().to_string(),
            details: dto.details,
        }
    }
}
