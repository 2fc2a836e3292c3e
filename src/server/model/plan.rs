use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::BillingInterval;
use uuid::Uuid;

use crate::model::plan::{CreatePlanDto, PlanDto, UpdatePlanDto};

/// A subscription plan users can buy.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub currency: String,
    pub billing_interval: BillingInterval,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Plan {
    pub fn from_entity(entity: entity::plan::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price_cents: entity.price_cents,
            currency: entity.currency,
            billing_interval: entity.billing_interval,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PlanDto {
        PlanDto {
            id: self.id,
            name: self.name,
            description: self.description,
            price_cents: self.price_cents,
            currency: self.currency,
            billing_interval: self.billing_interval,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePlanParams {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub currency: String,
    pub billing_interval: BillingInterval,
}

impl CreatePlanParams {
    pub fn from_dto(dto: CreatePlanDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            price_cents: dto.price_cents,
            currency: dto.currency,
            billing_interval: dto.billing_interval,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePlanParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub is_active: Option<bool>,
}

impl UpdatePlanParams {
    pub fn from_dto(dto: UpdatePlanDto) -> Self {
        Self {
            name: dto.name.map(|name| name.trim().to_string()),
            description: dto.description,
            price_cents: dto.price_cents,
            is_active: dto.is_active,
        }
    }
}
