//! Reactions on comments, feedback and listings.

use entity::sea_orm_active_enums::{NotificationKind, ReactionKind, ReactionTarget};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{
        feedback::FeedbackRepository, forum_comment::ForumCommentRepository,
        group::GroupRepository, group_comment::GroupCommentRepository,
        reaction::ReactionRepository, service::ServiceRepository,
    },
    error::AppError,
    model::{
        reaction::{kind_key, Reaction, ReactionSummary},
        user::User,
    },
    service::notification::notify,
};

/// Finds the author of the reacted-to content.
///
/// Returns `None` when the target does not exist or, for comments in a private group,
/// when `viewer` may not see the group.
async fn target_author<C: ConnectionTrait>(
    db: &C,
    target_type: ReactionTarget,
    target_id: Uuid,
    viewer: Option<&User>,
) -> Result<Option<Uuid>, DbErr> {
    let author = match target_type {
        ReactionTarget::ForumComment => ForumCommentRepository::new(db)
            .find_by_id(target_id)
            .await?
            .map(|comment| comment.user_id),
        ReactionTarget::GroupComment => {
            let Some(comment) = GroupCommentRepository::new(db).find_by_id(target_id).await?
            else {
                return Ok(None);
            };
            let visible = GroupRepository::new(db)
                .find_by_id(comment.group_id)
                .await?
                .is_some_and(|group| {
                    group.is_visible_to(
                        viewer.map(|user| user.id),
                        viewer.is_some_and(User::is_admin),
                    )
                });

            visible.then_some(comment.user_id)
        }
        ReactionTarget::FeedbackComment => FeedbackRepository::new(db)
            .find_by_id(target_id)
            .await?
            .map(|feedback| feedback.user_id),
        ReactionTarget::Service => ServiceRepository::new(db)
            .find_by_id(target_id)
            .await?
            .map(|service| service.user_id),
    };

    Ok(author)
}

pub struct ReactionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReactionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets the actor's reaction on a target, replacing the kind of an existing one.
    ///
    /// The content author is notified when a new reaction is created, not when its kind
    /// changes.
    ///
    /// # Returns
    /// - `Ok(Reaction)` - The stored reaction
    /// - `Err(AppError::NotFound)` - The target does not exist or is in a hidden group
    pub async fn set(
        &self,
        actor: &User,
        target_type: ReactionTarget,
        target_id: Uuid,
        kind: ReactionKind,
    ) -> Result<Reaction, AppError> {
        let Some(author_id) =
            target_author(self.db, target_type, target_id, Some(actor)).await?
        else {
            return Err(AppError::NotFound("Reaction target not found".to_string()));
        };

        let txn = self.db.begin().await?;
        let (reaction, created) = ReactionRepository::new(&txn)
            .upsert(actor.id, target_type, target_id, kind)
            .await?;
        if created {
            notify(
                &txn,
                author_id,
                actor.id,
                NotificationKind::Reaction,
                format!("{} reacted {} to your post", actor.username, kind_key(kind)),
                None,
            )
            .await?;
        }
        txn.commit().await?;

        Ok(reaction)
    }

    pub async fn remove(
        &self,
        actor: &User,
        target_type: ReactionTarget,
        target_id: Uuid,
    ) -> Result<(), AppError> {
        let removed = ReactionRepository::new(self.db)
            .delete_by_user_and_target(actor.id, target_type, target_id)
            .await?;

        if !removed {
            return Err(AppError::NotFound("Reaction not found".to_string()));
        }

        Ok(())
    }

    /// Counts reactions per kind. Comments in a private group are only counted for
    /// viewers who may see the group.
    pub async fn summary(
        &self,
        target_type: ReactionTarget,
        target_id: Uuid,
        viewer: Option<&User>,
    ) -> Result<ReactionSummary, AppError> {
        if target_author(self.db, target_type, target_id, viewer)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Reaction target not found".to_string()));
        }

        let counts = ReactionRepository::new(self.db)
            .count_by_kind(target_type, target_id)
            .await?;

        Ok(ReactionSummary {
            target_type,
            target_id,
            counts,
        })
    }
}
