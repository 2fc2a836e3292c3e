use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ConnectionStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConnectionDto {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub addressee_id: Uuid,
    #[schema(value_type = String)]
    pub status: ConnectionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateConnectionDto {
    pub addressee_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RespondConnectionDto {
    #[schema(value_type = String)]
    pub status: ConnectionStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectionFilterDto {
    pub status: Option<ConnectionStatus>,
}
