use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{UserRole, UserStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Full profile, returned to the user themselves and to admins.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub location: Option<String>,
    #[schema(value_type = String)]
    pub role: UserRole,
    #[schema(value_type = String)]
    pub status: UserStatus,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub kyc_verified: bool,
    pub plan_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Profile as seen by other users; contact details are omitted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicUserDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub location: Option<String>,
    pub kyc_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Partial profile update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateProfileDto {
    #[validate(length(min = 1, max = 50))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub last_name: Option<String>,
    #[validate(length(min = 7, max = 20))]
    pub phone: Option<String>,
    #[validate(length(max = 1000))]
    pub bio: Option<String>,
    #[validate(length(max = 100))]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserStatusDto {
    #[schema(value_type = String)]
    pub status: UserStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct InterestsDto {
    #[validate(length(max = 20, message = "at most 20 interests"))]
    pub interests: Vec<String>,
}
