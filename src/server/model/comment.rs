//! Forum posts, group comments and service feedback.
//!
//! All three are threaded by an optional `parent_id` except feedback, which is flat and
//! carries a 1-5 rating.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::comment::{
    CreateFeedbackDto, CreateForumCommentDto, CreateGroupCommentDto, FeedbackDto,
    ForumCommentDto, GroupCommentDto,
};

/// Topic assigned to forum posts that do not name one.
pub const DEFAULT_FORUM_TOPIC: &str = "general";

#[derive(Debug, Clone, PartialEq)]
pub struct ForumComment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub topic: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl ForumComment {
    pub fn from_entity(entity: entity::forum_comment::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            parent_id: entity.parent_id,
            topic: entity.topic,
            body: entity.body,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ForumCommentDto {
        ForumCommentDto {
            id: self.id,
            user_id: self.user_id,
            parent_id: self.parent_id,
            topic: self.topic,
            body: self.body,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateForumCommentParams {
    pub user_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub topic: String,
    pub body: String,
}

impl CreateForumCommentParams {
    pub fn from_dto(user_id: Uuid, dto: CreateForumCommentDto) -> Self {
        Self {
            user_id,
            parent_id: dto.parent_id,
            topic: dto
                .topic
                .map(|topic| topic.trim().to_lowercase())
                .filter(|topic| !topic.is_empty())
                .unwrap_or_else(|| DEFAULT_FORUM_TOPIC.to_string()),
            body: dto.body,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupComment {
    pub id: Uuid,
    pub group_id: Uuid,
    pub user_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl GroupComment {
    pub fn from_entity(entity: entity::group_comment::Model) -> Self {
        Self {
            id: entity.id,
            group_id: entity.group_id,
            user_id: entity.user_id,
            parent_id: entity.parent_id,
            body: entity.body,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> GroupCommentDto {
        GroupCommentDto {
            id: self.id,
            group_id: self.group_id,
            user_id: self.user_id,
            parent_id: self.parent_id,
            body: self.body,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGroupCommentParams {
    pub group_id: Uuid,
    pub user_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub body: String,
}

impl CreateGroupCommentParams {
    pub fn from_dto(group_id: Uuid, user_id: Uuid, dto: CreateGroupCommentDto) -> Self {
        Self {
            group_id,
            user_id,
            parent_id: dto.parent_id,
            body: dto.body,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub id: Uuid,
    pub service_id: Uuid,
    pub user_id: Uuid,
    pub rating: i16,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    pub fn from_entity(entity: entity::feedback_comment::Model) -> Self {
        Self {
            id: entity.id,
            service_id: entity.service_id,
            user_id: entity.user_id,
            rating: entity.rating,
            body: entity.body,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> FeedbackDto {
        FeedbackDto {
            id: self.id,
            service_id: self.service_id,
            user_id: self.user_id,
            rating: self.rating,
            body: self.body,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateFeedbackParams {
    pub service_id: Uuid,
    pub user_id: Uuid,
    pub rating: i16,
    pub body: String,
}

impl CreateFeedbackParams {
    pub fn from_dto(service_id: Uuid, user_id: Uuid, dto: CreateFeedbackDto) -> Self {
        Self {
            service_id,
            user_id,
            rating: dto.rating,
            body: dto.body,
        }
    }
}
