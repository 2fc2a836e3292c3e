//! Identity verification (KYC) applications and their review.

use entity::sea_orm_active_enums::{KycStatus, NotificationKind};
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{kyc::KycRepository, user::UserRepository},
    error::AppError,
    model::{
        kyc::{KycApplication, ReviewKycParams, SubmitKycParams},
        user::User,
    },
    service::notification::notify,
    util::pagination::Paginated,
};

pub struct KycService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> KycService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits an application for review.
    ///
    /// # Returns
    /// - `Ok(KycApplication)` - The pending application
    /// - `Err(AppError::Conflict)` - Already verified, or an application is pending
    pub async fn submit(
        &self,
        user: &User,
        params: SubmitKycParams,
    ) -> Result<KycApplication, AppError> {
        if user.kyc_verified {
            return Err(AppError::Conflict("Identity is already verified".to_string()));
        }

        let repo = KycRepository::new(self.db);
        if repo.has_pending(user.id).await? {
            return Err(AppError::Conflict(
                "An application is already awaiting review".to_string(),
            ));
        }

        let application = repo.create(params).await?;

        tracing::info!(
            application_id = %application.id,
            user_id = %user.id,
            "Submitted KYC application"
        );

        Ok(application)
    }

    /// Gets the user's most recent application.
    pub async fn latest_for_user(&self, user_id: Uuid) -> Result<KycApplication, AppError> {
        KycRepository::new(self.db)
            .find_latest_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("No KYC application found".to_string()))
    }

    pub async fn list_pending(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<KycApplication>, AppError> {
        let (applications, total) = KycRepository::new(self.db)
            .get_pending_paginated(page, per_page)
            .await?;

        Ok(Paginated::new(applications, total, page, per_page))
    }

    /// Approves or rejects a pending application and notifies the applicant. Approval
    /// marks the applicant verified in the same transaction.
    ///
    /// # Returns
    /// - `Ok(KycApplication)` - The reviewed application
    /// - `Err(AppError::BadRequest)` - Target status is `pending`, or a rejection has no
    ///   reason
    /// - `Err(AppError::Conflict)` - The application was already reviewed
    pub async fn review(
        &self,
        id: Uuid,
        params: ReviewKycParams,
    ) -> Result<KycApplication, AppError> {
        let rejection_reason = params
            .rejection_reason
            .as_deref()
            .map(str::trim)
            .filter(|reason| !reason.is_empty())
            .map(str::to_string);

        match params.status {
            KycStatus::Pending => {
                return Err(AppError::BadRequest(
                    "status: must be approved or rejected".to_string(),
                ))
            }
            KycStatus::Rejected if rejection_reason.is_none() => {
                return Err(AppError::BadRequest(
                    "rejection_reason: required when rejecting".to_string(),
                ))
            }
            _ => {}
        }

        let txn = self.db.begin().await?;
        let repo = KycRepository::new(&txn);

        let application = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("KYC application not found".to_string()))?;
        if application.status != KycStatus::Pending {
            return Err(AppError::Conflict(
                "Application has already been reviewed".to_string(),
            ));
        }

        let reviewer_id = params.reviewer_id;
        let approved = params.status == KycStatus::Approved;
        let application = repo
            .review(
                id,
                ReviewKycParams {
                    rejection_reason: if approved { None } else { rejection_reason },
                    ..params
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("KYC application not found".to_string()))?;

        if approved {
            UserRepository::new(&txn)
                .set_kyc_verified(application.user_id, true)
                .await?;
        }

        let message = match &application.rejection_reason {
            Some(reason) => format!("Your identity verification was rejected: {}", reason),
            None => "Your identity has been verified".to_string(),
        };
        notify(
            &txn,
            application.user_id,
            reviewer_id,
            NotificationKind::Kyc,
            message,
            None,
        )
        .await?;
        txn.commit().await?;

        tracing::info!(
            application_id = %id,
            reviewer_id = %reviewer_id,
            "Reviewed KYC application: {:?}",
            application.status
        );

        Ok(application)
    }
}
