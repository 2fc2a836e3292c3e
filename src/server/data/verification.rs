//! Verification code repository.
//!
//! At most one unconfirmed code exists per user and channel. Confirmed rows are kept as
//! an audit trail; expired unconfirmed rows are purged by the scheduler.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::VerificationChannel;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::server::model::verification::Verification;

pub struct VerificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VerificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        channel: VerificationChannel,
        code: String,
        expires_at: DateTime<Utc>,
    ) -> Result<Verification, DbErr> {
        let entity = entity::verification::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            channel: ActiveValue::Set(channel),
            code: ActiveValue::Set(code),
            expires_at: ActiveValue::Set(expires_at),
            verified_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Verification::from_entity(entity))
    }

    /// Finds the unconfirmed code for a user and channel, expired or not.
    pub async fn find_pending(
        &self,
        user_id: Uuid,
        channel: VerificationChannel,
    ) -> Result<Option<Verification>, DbErr> {
        let entity = entity::prelude::Verification::find()
            .filter(entity::verification::Column::UserId.eq(user_id))
            .filter(entity::verification::Column::Channel.eq(channel))
            .filter(entity::verification::Column::VerifiedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(Verification::from_entity))
    }

    /// Removes any unconfirmed code for a user and channel.
    ///
    /// # Returns
    /// - `Ok(n)` - Number of rows removed
    pub async fn delete_pending(
        &self,
        user_id: Uuid,
        channel: VerificationChannel,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Verification::delete_many()
            .filter(entity::verification::Column::UserId.eq(user_id))
            .filter(entity::verification::Column::Channel.eq(channel))
            .filter(entity::verification::Column::VerifiedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn mark_verified(
        &self,
        id: Uuid,
        verified_at: DateTime<Utc>,
    ) -> Result<Option<Verification>, DbErr> {
        let Some(verification) = entity::prelude::Verification::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::verification::ActiveModel = verification.into();
        active_model.verified_at = ActiveValue::Set(Some(verified_at));

        let entity = active_model.update(self.db).await?;

        Ok(Some(Verification::from_entity(entity)))
    }

    /// Deletes unconfirmed codes that expired before `now`.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Verification::delete_many()
            .filter(entity::verification::Column::VerifiedAt.is_null())
            .filter(entity::verification::Column::ExpiresAt.lt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
