//! Email and phone verification codes.
//!
//! Delivery is out of scope: issued codes are emitted at debug level.

use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::VerificationChannel;
use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{user::UserRepository, verification::VerificationRepository},
    error::AppError,
    model::{user::User, verification::Verification},
};

/// Minutes an issued code stays valid.
pub const CODE_TTL_MINUTES: i64 = 15;

fn generate_code() -> String {
    format!("{:06}", rand::rng().random_range(0..1_000_000))
}

fn is_verified(user: &User, channel: VerificationChannel) -> bool {
    match channel {
        VerificationChannel::Email => user.email_verified,
        VerificationChannel::Phone => user.phone_verified,
    }
}

pub struct VerificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VerificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues a fresh code for the channel, replacing any pending one.
    ///
    /// # Returns
    /// - `Ok(Verification)` - The pending verification
    /// - `Err(AppError::BadRequest)` - Phone channel without a phone number
    /// - `Err(AppError::Conflict)` - The channel is already verified
    pub async fn issue(
        &self,
        user: &User,
        channel: VerificationChannel,
    ) -> Result<Verification, AppError> {
        if channel == VerificationChannel::Phone && user.phone.is_none() {
            return Err(AppError::BadRequest(
                "Add a phone number to your profile first".to_string(),
            ));
        }
        if is_verified(user, channel) {
            return Err(AppError::Conflict("Already verified".to_string()));
        }

        let code = generate_code();
        let expires_at = Utc::now() + Duration::minutes(CODE_TTL_MINUTES);

        let txn = self.db.begin().await?;
        let repo = VerificationRepository::new(&txn);
        repo.delete_pending(user.id, channel).await?;
        let verification = repo.create(user.id, channel, code, expires_at).await?;
        txn.commit().await?;

        tracing::debug!(
            user_id = %user.id,
            "Issued {:?} verification code {}",
            channel,
            verification.code
        );

        Ok(verification)
    }

    /// Confirms a code and marks the channel verified on the user.
    ///
    /// # Returns
    /// - `Ok(User)` - The user with the channel verified
    /// - `Err(AppError::BadRequest)` - No pending code, code expired, or code wrong
    pub async fn confirm(
        &self,
        user: &User,
        channel: VerificationChannel,
        code: &str,
    ) -> Result<User, AppError> {
        let Some(verification) = VerificationRepository::new(self.db)
            .find_pending(user.id, channel)
            .await?
        else {
            return Err(AppError::BadRequest("No pending verification code".to_string()));
        };

        let now = Utc::now();
        if verification.is_expired(now) {
            return Err(AppError::BadRequest("Verification code has expired".to_string()));
        }
        if verification.code != code.trim() {
            return Err(AppError::BadRequest("Invalid verification code".to_string()));
        }

        let txn = self.db.begin().await?;
        VerificationRepository::new(&txn)
            .mark_verified(verification.id, now)
            .await?;
        let user = UserRepository::new(&txn)
            .mark_verified(user.id, channel)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        txn.commit().await?;

        tracing::info!(user_id = %user.id, "Verified {:?}", channel);

        Ok(user)
    }

    /// Deletes unconfirmed codes past their expiry.
    pub async fn purge_expired(&self) -> Result<u64, AppError> {
        Ok(VerificationRepository::new(self.db)
            .delete_expired(Utc::now())
            .await?)
    }
}
