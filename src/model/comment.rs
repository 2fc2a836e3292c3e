use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ForumCommentDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub topic: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// New forum thread or reply. Replies inherit the topic of their parent, so `topic` is
/// only required for top-level posts.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateForumCommentDto {
    pub parent_id: Option<Uuid>,
    #[validate(length(min = 1, max = 120))]
    pub topic: Option<String>,
    #[validate(length(min = 1, max = 10000))]
    pub body: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForumFilterDto {
    pub topic: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GroupCommentDto {
    pub id: Uuid,
    pub group_id: Uuid,
    pub user_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateGroupCommentDto {
    pub parent_id: Option<Uuid>,
    #[validate(length(min = 1, max = 10000))]
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedbackDto {
    pub id: Uuid,
    pub service_id: Uuid,
    pub user_id: Uuid,
    pub rating: i16,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateFeedbackDto {
    #[validate(range(min = 1, max = 5))]
    pub rating: i16,
    #[validate(length(min = 1, max = 5000))]
    pub body: String,
}
