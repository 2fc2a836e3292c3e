use entity::sea_orm_active_enums::{EngagementAction, EngagementTarget};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RecordPageVisitDto {
    #[validate(length(min = 1, max = 255))]
    pub path: String,
    #[validate(length(max = 255))]
    pub referrer: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordEngagementDto {
    #[schema(value_type = String)]
    pub target_type: EngagementTarget,
    pub target_id: Uuid,
    #[schema(value_type = String)]
    pub action: EngagementAction,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordedDto {
    pub id: Uuid,
}
