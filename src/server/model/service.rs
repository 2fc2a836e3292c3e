use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ServiceStatus;
use uuid::Uuid;

use crate::model::service::{CreateServiceDto, ServiceDto, UpdateServiceDto};

/// A service listing offered by a user, optionally inside a group.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: Uuid,
    pub user_id: Uuid,
    pub group_id: Option<Uuid>,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub price_cents: i64,
    pub currency: String,
    pub status: ServiceStatus,
    pub media: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Service {
    pub fn from_entity(entity: entity::service::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            group_id: entity.group_id,
            title: entity.title,
            slug: entity.slug,
            description: entity.description,
            category: entity.category,
            price_cents: entity.price_cents,
            currency: entity.currency,
            status: entity.status,
            media: entity.media,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ServiceDto {
        ServiceDto {
            id: self.id,
            user_id: self.user_id,
            group_id: self.group_id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            category: self.category,
            price_cents: self.price_cents,
            currency: self.currency,
            status: self.status,
            media: self.media,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateServiceParams {
    pub user_id: Uuid,
    pub group_id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price_cents: i64,
    pub currency: String,
    pub status: ServiceStatus,
}

impl CreateServiceParams {
    pub fn from_dto(user_id: Uuid, dto: CreateServiceDto) -> Self {
        Self {
            user_id,
            group_id: dto.group_id,
            title: dto.title.trim().to_string(),
            description: dto.description,
            category: dto.category.trim().to_lowercase(),
            price_cents: dto.price_cents,
            currency: dto.currency,
            status: dto.status.unwrap_or(ServiceStatus::Draft),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateServiceParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price_cents: Option<i64>,
    pub status: Option<ServiceStatus>,
}

impl UpdateServiceParams {
    pub fn from_dto(dto: UpdateServiceDto) -> Self {
        Self {
            title: dto.title.map(|title| title.trim().to_string()),
            description: dto.description,
            category: dto.category.map(|category| category.trim().to_lowercase()),
            price_cents: dto.price_cents,
            status: dto.status,
        }
    }
}
