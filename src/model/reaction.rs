use entity::sea_orm_active_enums::{ReactionKind, ReactionTarget};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::api::CountDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReactionDto {
    pub id: Uuid,
    pub user_id: Uuid,
    #[schema(value_type = String)]
    pub target_type: ReactionTarget,
    pub target_id: Uuid,
    #[schema(value_type = String)]
    pub kind: ReactionKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetReactionDto {
    #[schema(value_type = String)]
    pub target_type: ReactionTarget,
    pub target_id: Uuid,
    #[schema(value_type = String)]
    pub kind: ReactionKind,
}

/// Reaction counts for one target, one entry per kind that has at least one reaction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReactionSummaryDto {
    #[schema(value_type = String)]
    pub target_type: ReactionTarget,
    pub target_id: Uuid,
    pub total: u64,
    pub counts: Vec<CountDto>,
}
