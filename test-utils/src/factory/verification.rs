//! Verification and KYC factories.

use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::{DocumentType, KycStatus, VerificationChannel};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for verification codes; defaults to an unconfirmed email code `"123456"`
/// expiring in 15 minutes.
pub struct VerificationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    channel: VerificationChannel,
    code: String,
    expires_at: DateTime<Utc>,
    verified_at: Option<DateTime<Utc>>,
}

impl<'a> VerificationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid) -> Self {
        Self {
            db,
            user_id,
            channel: VerificationChannel::Email,
            code: "123456".to_string(),
            expires_at: Utc::now() + Duration::minutes(15),
            verified_at: None,
        }
    }

    pub fn channel(mut self, channel: VerificationChannel) -> Self {
        self.channel = channel;
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub fn verified_at(mut self, verified_at: DateTime<Utc>) -> Self {
        self.verified_at = Some(verified_at);
        self
    }

    pub async fn build(self) -> Result<entity::verification::Model, DbErr> {
        entity::verification::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            channel: ActiveValue::Set(self.channel),
            code: ActiveValue::Set(self.code),
            expires_at: ActiveValue::Set(self.expires_at),
            verified_at: ActiveValue::Set(self.verified_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Factory for KYC applications; defaults to a pending passport application.
pub struct KycApplicationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    status: KycStatus,
}

impl<'a> KycApplicationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid) -> Self {
        Self {
            db,
            user_id,
            status: KycStatus::Pending,
        }
    }

    pub fn status(mut self, status: KycStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::kyc_application::Model, DbErr> {
        let now = Utc::now();
        entity::kyc_application::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            full_name: ActiveValue::Set("Test Applicant".to_string()),
            document_type: ActiveValue::Set(DocumentType::Passport),
            document_number: ActiveValue::Set("P1234567".to_string()),
            document_front: ActiveValue::Set("/uploads/images/front.png".to_string()),
            document_back: ActiveValue::Set(None),
            selfie: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            reviewer_id: ActiveValue::Set(None),
            rejection_reason: ActiveValue::Set(None),
            reviewed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_verification(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::verification::Model, DbErr> {
    VerificationFactory::new(db, user_id).build().await
}

pub async fn create_kyc_application(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::kyc_application::Model, DbErr> {
    KycApplicationFactory::new(db, user_id).build().await
}
