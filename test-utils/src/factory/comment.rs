//! Factories for forum, group and feedback comments.
//!
//! All three comment tables share the same shape (author, optional parent, body), so
//! their factories live together.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for forum posts and replies.
///
/// A post without a parent is a top-level thread; defaults to the topic `"general"`.
pub struct ForumCommentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    parent_id: Option<Uuid>,
    topic: String,
    body: String,
}

impl<'a> ForumCommentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid) -> Self {
        Self {
            db,
            user_id,
            parent_id: None,
            topic: "general".to_string(),
            body: "Forum post body".to_string(),
        }
    }

    pub fn parent_id(mut self, parent_id: Uuid) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub async fn build(self) -> Result<entity::forum_comment::Model, DbErr> {
        let now = Utc::now();
        entity::forum_comment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            parent_id: ActiveValue::Set(self.parent_id),
            topic: ActiveValue::Set(self.topic),
            body: ActiveValue::Set(self.body),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Factory for comments posted inside a group.
pub struct GroupCommentFactory<'a> {
    db: &'a DatabaseConnection,
    group_id: Uuid,
    user_id: Uuid,
    parent_id: Option<Uuid>,
    body: String,
}

impl<'a> GroupCommentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, group_id: Uuid, user_id: Uuid) -> Self {
        Self {
            db,
            group_id,
            user_id,
            parent_id: None,
            body: "Group comment body".to_string(),
        }
    }

    pub fn parent_id(mut self, parent_id: Uuid) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub async fn build(self) -> Result<entity::group_comment::Model, DbErr> {
        let now = Utc::now();
        entity::group_comment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            group_id: ActiveValue::Set(self.group_id),
            user_id: ActiveValue::Set(self.user_id),
            parent_id: ActiveValue::Set(self.parent_id),
            body: ActiveValue::Set(self.body),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Factory for service feedback; defaults to a 5 star rating.
pub struct FeedbackCommentFactory<'a> {
    db: &'a DatabaseConnection,
    service_id: Uuid,
    user_id: Uuid,
    rating: i16,
    body: String,
}

impl<'a> FeedbackCommentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, service_id: Uuid, user_id: Uuid) -> Self {
        Self {
            db,
            service_id,
            user_id,
            rating: 5,
            body: "Great service".to_string(),
        }
    }

    pub fn rating(mut self, rating: i16) -> Self {
        self.rating = rating;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub async fn build(self) -> Result<entity::feedback_comment::Model, DbErr> {
        let now = Utc::now();
        entity::feedback_comment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            service_id: ActiveValue::Set(self.service_id),
            user_id: ActiveValue::Set(self.user_id),
            rating: ActiveValue::Set(self.rating),
            body: ActiveValue::Set(self.body),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_forum_post(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::forum_comment::Model, DbErr> {
    ForumCommentFactory::new(db, user_id).build().await
}

pub async fn create_group_comment(
    db: &DatabaseConnection,
    group_id: Uuid,
    user_id: Uuid,
) -> Result<entity::group_comment::Model, DbErr> {
    GroupCommentFactory::new(db, group_id, user_id).build().await
}

pub async fn create_feedback(
    db: &DatabaseConnection,
    service_id: Uuid,
    user_id: Uuid,
) -> Result<entity::feedback_comment::Model, DbErr> {
    FeedbackCommentFactory::new(db, service_id, user_id)
        .build()
        .await
}
