//! User notifications.
//!
//! Other services record notifications through [`notify`] inside their own
//! transaction; this service only serves the recipient's inbox.

use entity::sea_orm_active_enums::NotificationKind;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::notification::{CreateNotificationParams, Notification},
    util::pagination::Paginated,
};

/// Records a notification for `user_id` caused by `actor_id`.
///
/// Nothing is recorded when the actor is the recipient.
pub async fn notify<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
    actor_id: Uuid,
    kind: NotificationKind,
    message: String,
    link: Option<String>,
) -> Result<(), DbErr> {
    if user_id == actor_id {
        return Ok(());
    }

    let notification = NotificationRepository::new(db)
        .create(CreateNotificationParams {
            user_id,
            actor_id: Some(actor_id),
            kind,
            message,
            link,
        })
        .await?;

    tracing::debug!(
        notification_id = %notification.id,
        user_id = %user_id,
        "Recorded {:?} notification",
        kind
    );

    Ok(())
}

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        user_id: Uuid,
        unread_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Notification>, AppError> {
        let (notifications, total) = NotificationRepository::new(self.db)
            .get_by_user_paginated(user_id, unread_only, page, per_page)
            .await?;

        Ok(Paginated::new(notifications, total, page, per_page))
    }

    /// Marks a notification read.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The notification, read
    /// - `Err(AppError::NotFound)` - No such notification, or it belongs to someone else
    pub async fn mark_read(&self, user_id: Uuid, id: Uuid) -> Result<Notification, AppError> {
        NotificationRepository::new(self.db)
            .mark_read(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))
    }

    pub async fn mark_all_read(&self, user_id: Uuid) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db).mark_all_read(user_id).await?)
    }
}
