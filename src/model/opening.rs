use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{OpeningStatus, PartnershipGroupStatus, PartnershipStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OpeningDto {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub slots: i32,
    /// Number of accepted partnerships.
    pub filled_slots: u64,
    #[schema(value_type = String)]
    pub status: OpeningStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateOpeningDto {
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[validate(length(min = 1, max = 10000))]
    pub description: String,
    #[validate(length(min = 1, max = 60))]
    pub category: String,
    #[validate(range(min = 1, max = 100))]
    pub slots: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateOpeningStatusDto {
    #[schema(value_type = String)]
    pub status: OpeningStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpeningFilterDto {
    pub status: Option<OpeningStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PartnershipGroupDto {
    pub id: Uuid,
    pub opening_id: Uuid,
    pub name: String,
    #[schema(value_type = String)]
    pub status: PartnershipGroupStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreatePartnershipGroupDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PartnershipDto {
    pub id: Uuid,
    pub opening_id: Uuid,
    pub user_id: Uuid,
    pub partnership_group_id: Option<Uuid>,
    pub message: Option<String>,
    #[schema(value_type = String)]
    pub status: PartnershipStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct ApplyPartnershipDto {
    #[validate(length(max = 2000))]
    pub message: Option<String>,
}

/// Status change on a partnership. The opening owner accepts or rejects, the applicant
/// withdraws. `partnership_group_id` is only read when accepting.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePartnershipStatusDto {
    #[schema(value_type = String)]
    pub status: PartnershipStatus,
    pub partnership_group_id: Option<Uuid>,
}
