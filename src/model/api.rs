use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// One page of a list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedDto<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// A labelled count, e.g. reactions of one kind or visits to one path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CountDto {
    pub key: String,
    pub count: u64,
}
