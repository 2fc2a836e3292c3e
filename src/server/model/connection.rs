use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ConnectionStatus;
use uuid::Uuid;

use crate::model::connection::ConnectionDto;

/// A connection request between two users.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub addressee_id: Uuid,
    pub status: ConnectionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Connection {
    pub fn from_entity(entity: entity::connection::Model) -> Self {
        Self {
            id: entity.id,
            requester_id: entity.requester_id,
            addressee_id: entity.addressee_id,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ConnectionDto {
        ConnectionDto {
            id: self.id,
            requester_id: self.requester_id,
            addressee_id: self.addressee_id,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn involves(&self, user_id: Uuid) -> bool {
        self.requester_id == user_id || self.addressee_id == user_id
    }
}
