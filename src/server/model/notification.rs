use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::NotificationKind;
use uuid::Uuid;

use crate::model::notification::NotificationDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub actor_id: Option<Uuid>,
    pub kind: NotificationKind,
    pub message: String,
    pub link: Option<String>,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            actor_id: entity.actor_id,
            kind: entity.kind,
            message: entity.message,
            link: entity.link,
            read_at: entity.read_at,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            actor_id: self.actor_id,
            kind: self.kind,
            message: self.message,
            link: self.link,
            read_at: self.read_at,
            created_at: self.created_at,
        }
    }
}

/// A notification about to be delivered to `user_id`.
#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub user_id: Uuid,
    pub actor_id: Option<Uuid>,
    pub kind: NotificationKind,
    pub message: String,
    pub link: Option<String>,
}
