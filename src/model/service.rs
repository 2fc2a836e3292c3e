use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ServiceStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub group_id: Option<Uuid>,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub price_cents: i64,
    pub currency: String,
    #[schema(value_type = String)]
    pub status: ServiceStatus,
    pub media: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateServiceDto {
    pub group_id: Option<Uuid>,
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[validate(length(min = 1, max = 10000))]
    pub description: String,
    #[validate(length(min = 1, max = 60))]
    pub category: String,
    #[validate(range(min = 0))]
    pub price_cents: i64,
    #[validate(custom(function = "crate::model::validate_currency"))]
    pub currency: String,
    #[schema(value_type = Option<String>)]
    pub status: Option<ServiceStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateServiceDto {
    #[validate(length(min = 1, max = 120))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 10000))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 60))]
    pub category: Option<String>,
    #[validate(range(min = 0))]
    pub price_cents: Option<i64>,
    #[schema(value_type = Option<String>)]
    pub status: Option<ServiceStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceFilterDto {
    pub category: Option<String>,
}
