use entity::sea_orm_active_enums::{NotificationKind, ServiceStatus};
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{feedback::FeedbackRepository, service::ServiceRepository},
    error::AppError,
    model::{
        comment::{CreateFeedbackParams, Feedback},
        service::Service,
        user::User,
    },
    service::{ensure_owner, notification::notify},
    util::pagination::Paginated,
};

pub struct FeedbackService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedbackService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn service(&self, service_id: Uuid) -> Result<Service, AppError> {
        ServiceRepository::new(self.db)
            .find_by_id(service_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
    }

    pub async fn list(
        &self,
        service_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Feedback>, AppError> {
        self.service(service_id).await?;

        let (feedback, total) = FeedbackRepository::new(self.db)
            .get_by_service_paginated(service_id, page, per_page)
            .await?;

        Ok(Paginated::new(feedback, total, page, per_page))
    }

    /// Leaves a review on a service and notifies its owner.
    ///
    /// # Returns
    /// - `Ok(Feedback)` - The review
    /// - `Err(AppError::BadRequest)` - The service is not published, or the reviewer owns it
    /// - `Err(AppError::Conflict)` - The reviewer already reviewed this service
    pub async fn create(
        &self,
        actor: &User,
        params: CreateFeedbackParams,
    ) -> Result<Feedback, AppError> {
        let service = self.service(params.service_id).await?;

        if service.status != ServiceStatus::Published {
            return Err(AppError::BadRequest("Service is not available".to_string()));
        }
        if service.user_id == actor.id {
            return Err(AppError::BadRequest(
                "You cannot review your own service".to_string(),
            ));
        }
        if FeedbackRepository::new(self.db)
            .exists_for(service.id, actor.id)
            .await?
        {
            return Err(AppError::Conflict(
                "You have already reviewed this service".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let feedback = FeedbackRepository::new(&txn).create(params).await?;
        notify(
            &txn,
            service.user_id,
            actor.id,
            NotificationKind::Comment,
            format!("{} reviewed {}", actor.username, service.title),
            Some(format!("/services/{}", service.slug)),
        )
        .await?;
        txn.commit().await?;

        Ok(feedback)
    }

    pub async fn delete(&self, actor: &User, id: Uuid) -> Result<(), AppError> {
        let repo = FeedbackRepository::new(self.db);
        let feedback = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Feedback not found".to_string()))?;
        ensure_owner(actor, feedback.user_id, true)?;

        repo.delete(id).await?;

        Ok(())
    }
}
