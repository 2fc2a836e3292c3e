use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::PaymentStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub plan_id: Option<Uuid>,
    pub service_id: Option<Uuid>,
    pub amount_cents: i64,
    pub currency: String,
    pub provider: String,
    pub provider_reference: String,
    #[schema(value_type = String)]
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Starts a payment for exactly one plan or service. The amount and currency are taken
/// from the plan or service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreatePaymentDto {
    pub plan_id: Option<Uuid>,
    pub service_id: Option<Uuid>,
    #[validate(length(min = 1, max = 30))]
    pub provider: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePaymentStatusDto {
    #[schema(value_type = String)]
    pub status: PaymentStatus,
}
