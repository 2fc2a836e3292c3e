use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{DocumentType, KycStatus};
use uuid::Uuid;

use crate::model::kyc::{KycApplicationDto, SubmitKycDto};

#[derive(Debug, Clone, PartialEq)]
pub struct KycApplication {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub document_type: DocumentType,
    pub document_number: String,
    pub document_front: String,
    pub document_back: Option<String>,
    pub selfie: Option<String>,
    pub status: KycStatus,
    pub reviewer_id: Option<Uuid>,
    pub rejection_reason: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl KycApplication {
    pub fn from_entity(entity: entity::kyc_application::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            full_name: entity.full_name,
            document_type: entity.document_type,
            document_number: entity.document_number,
            document_front: entity.document_front,
            document_back: entity.document_back,
            selfie: entity.selfie,
            status: entity.status,
            reviewer_id: entity.reviewer_id,
            rejection_reason: entity.rejection_reason,
            reviewed_at: entity.reviewed_at,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> KycApplicationDto {
        KycApplicationDto {
            id: self.id,
            user_id: self.user_id,
            full_name: self.full_name,
            document_type: self.document_type,
            document_number: self.document_number,
            document_front: self.document_front,
            document_back: self.document_back,
            selfie: self.selfie,
            status: self.status,
            reviewer_id: self.reviewer_id,
            rejection_reason: self.rejection_reason,
            reviewed_at: self.reviewed_at,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmitKycParams {
    pub user_id: Uuid,
    pub full_name: String,
    pub document_type: DocumentType,
    pub document_number: String,
    pub document_front: String,
    pub document_back: Option<String>,
    pub selfie: Option<String>,
}

impl SubmitKycParams {
    pub fn from_dto(user_id: Uuid, dto: SubmitKycDto) -> Self {
        Self {
            user_id,
            full_name: dto.full_name.trim().to_string(),
            document_type: dto.document_type,
            document_number: dto.document_number.trim().to_string(),
            document_front: dto.document_front,
            document_back: dto.document_back,
            selfie: dto.selfie,
        }
    }
}

/// Outcome of an admin review.
#[derive(Debug, Clone)]
pub struct ReviewKycParams {
    pub reviewer_id: Uuid,
    pub status: KycStatus,
    pub rejection_reason: Option<String>,
}
