use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::BillingInterval;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlanDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub currency: String,
    #[schema(value_type = String)]
    pub billing_interval: BillingInterval,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreatePlanDto {
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub price_cents: i64,
    #[validate(custom(function = "crate::model::validate_currency"))]
    pub currency: String,
    #[schema(value_type = String)]
    pub billing_interval: BillingInterval,
}

/// Plan update; absent fields keep their value. Deactivated plans can no longer be bought.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdatePlanDto {
    #[validate(length(min = 1, max = 60))]
    pub name: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub price_cents: Option<i64>,
    pub is_active: Option<bool>,
}
