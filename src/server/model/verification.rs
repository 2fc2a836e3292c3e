use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::VerificationChannel;
use uuid::Uuid;

use crate::model::verification::VerificationDto;

/// A one-time code issued to confirm a user's email or phone.
#[derive(Debug, Clone, PartialEq)]
pub struct Verification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub channel: VerificationChannel,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub verified_at: Option<DateTime<Utc>>,
}

impl Verification {
    pub fn from_entity(entity: entity::verification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            channel: entity.channel,
            code: entity.code,
            expires_at: entity.expires_at,
            verified_at: entity.verified_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Never exposes the code itself.
    pub fn into_dto(self) -> VerificationDto {
        VerificationDto {
            id: self.id,
            channel: self.channel,
            expires_at: self.expires_at,
        }
    }
}
