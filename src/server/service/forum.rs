//! Public forum threads.

use entity::sea_orm_active_enums::NotificationKind;
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::forum_comment::ForumCommentRepository,
    error::AppError,
    model::{
        comment::{CreateForumCommentParams, ForumComment},
        user::User,
    },
    service::{ensure_owner, notification::notify},
    util::pagination::Paginated,
};

pub struct ForumService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ForumService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_top_level(
        &self,
        topic: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<ForumComment>, AppError> {
        let topic = topic.map(|topic| topic.trim().to_lowercase());

        let (posts, total) = ForumCommentRepository::new(self.db)
            .get_top_level_paginated(topic.as_deref(), page, per_page)
            .await?;

        Ok(Paginated::new(posts, total, page, per_page))
    }

    pub async fn list_replies(
        &self,
        parent_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<ForumComment>, AppError> {
        let repo = ForumCommentRepository::new(self.db);
        if repo.find_by_id(parent_id).await?.is_none() {
            return Err(AppError::NotFound("Post not found".to_string()));
        }

        let (replies, total) = repo
            .get_replies_paginated(parent_id, page, per_page)
            .await?;

        Ok(Paginated::new(replies, total, page, per_page))
    }

    /// Starts a thread or replies to a post.
    ///
    /// Replies are filed under the parent's topic whatever topic was sent, and notify the
    /// parent's author.
    pub async fn create(
        &self,
        actor: &User,
        mut params: CreateForumCommentParams,
    ) -> Result<ForumComment, AppError> {
        let parent = match params.parent_id {
            Some(parent_id) => Some(
                ForumCommentRepository::new(self.db)
                    .find_by_id(parent_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::BadRequest("parent_id: post not found".to_string())
                    })?,
            ),
            None => None,
        };

        if let Some(parent) = &parent {
            params.topic = parent.topic.clone();
        }

        let txn = self.db.begin().await?;
        let post = ForumCommentRepository::new(&txn).create(params).await?;
        if let Some(parent) = parent {
            notify(
                &txn,
                parent.user_id,
                actor.id,
                NotificationKind::Comment,
                format!("{} replied to your post", actor.username),
                Some(format!("/forum/{}", parent.id)),
            )
            .await?;
        }
        txn.commit().await?;

        Ok(post)
    }

    /// Deletes a post and its replies; author or admin only.
    pub async fn delete(&self, actor: &User, id: Uuid) -> Result<(), AppError> {
        let repo = ForumCommentRepository::new(self.db);
        let post = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;
        ensure_owner(actor, post.user_id, true)?;

        repo.delete(id).await?;

        Ok(())
    }
}
