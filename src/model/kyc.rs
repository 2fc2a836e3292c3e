use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{DocumentType, KycStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct KycApplicationDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    #[schema(value_type = String)]
    pub document_type: DocumentType,
    pub document_number: String,
    pub document_front: String,
    pub document_back: Option<String>,
    pub selfie: Option<String>,
    #[schema(value_type = String)]
    pub status: KycStatus,
    pub reviewer_id: Option<Uuid>,
    pub rejection_reason: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// KYC submission. Document images are uploaded first through `/api/uploads` and
/// referenced here by their public path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct SubmitKycDto {
    #[validate(length(min = 1, max = 100))]
    pub full_name: String,
    #[schema(value_type = String)]
    pub document_type: DocumentType,
    #[validate(length(min = 1, max = 50))]
    pub document_number: String,
    #[validate(custom(function = "crate::model::validate_upload_path"))]
    pub document_front: String,
    #[validate(custom(function = "crate::model::validate_upload_path"))]
    pub document_back: Option<String>,
    #[validate(custom(function = "crate::model::validate_upload_path"))]
    pub selfie: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct ReviewKycDto {
    #[schema(value_type = String)]
    pub status: KycStatus,
    #[validate(length(min = 1, max = 2000))]
    pub rejection_reason: Option<String>,
}
