use entity::sea_orm_active_enums::{GroupPrivacy, NotificationKind};
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{group::GroupRepository, group_comment::GroupCommentRepository},
    error::AppError,
    model::{
        comment::{CreateGroupCommentParams, GroupComment},
        group::Group,
        user::User,
    },
    service::{ensure_owner, notification::notify},
    util::pagination::Paginated,
};

pub struct GroupCommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupCommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the group, hiding private groups from everyone but the owner and admins.
    async fn visible_group(
        &self,
        group_id: Uuid,
        viewer: Option<&User>,
    ) -> Result<Group, AppError> {
        let group = GroupRepository::new(self.db)
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))?;

        if !group.is_visible_to(viewer.map(|user| user.id), viewer.is_some_and(User::is_admin)) {
            return Err(AppError::NotFound("Group not found".to_string()));
        }

        Ok(group)
    }

    pub async fn list(
        &self,
        group_id: Uuid,
        viewer: Option<&User>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<GroupComment>, AppError> {
        self.visible_group(group_id, viewer).await?;

        let (comments, total) = GroupCommentRepository::new(self.db)
            .get_by_group_paginated(group_id, page, per_page)
            .await?;

        Ok(Paginated::new(comments, total, page, per_page))
    }

    /// Posts a comment or reply in a group.
    ///
    /// Only the owner may post in a private group. A reply's parent must belong to the
    /// same group. The group owner and the parent's author are notified.
    ///
    /// # Returns
    /// - `Ok(GroupComment)` - The new comment
    /// - `Err(AppError::NotFound)` - Group missing or not visible
    /// - `Err(AppError::BadRequest)` - Parent missing or in another group
    pub async fn create(
        &self,
        actor: &User,
        params: CreateGroupCommentParams,
    ) -> Result<GroupComment, AppError> {
        let group = self.visible_group(params.group_id, Some(actor)).await?;
        if group.privacy == GroupPrivacy::Private {
            ensure_owner(actor, group.owner_id, false)?;
        }

        let repo = GroupCommentRepository::new(self.db);
        let parent = match params.parent_id {
            Some(parent_id) => match repo.find_by_id(parent_id).await? {
                Some(parent) if parent.group_id == group.id => Some(parent),
                _ => {
                    return Err(AppError::BadRequest(
                        "parent_id: must reference a comment in the same group".to_string(),
                    ))
                }
            },
            None => None,
        };

        let txn = self.db.begin().await?;
        let comment = GroupCommentRepository::new(&txn).create(params).await?;

        let link = Some(format!("/groups/{}", group.slug));
        notify(
            &txn,
            group.owner_id,
            actor.id,
            NotificationKind::Comment,
            format!("{} commented in {}", actor.username, group.name),
            link.clone(),
        )
        .await?;
        if let Some(parent) = parent.filter(|parent| parent.user_id != group.owner_id) {
            notify(
                &txn,
                parent.user_id,
                actor.id,
                NotificationKind::Comment,
                format!("{} replied to your comment in {}", actor.username, group.name),
                link,
            )
            .await?;
        }
        txn.commit().await?;

        Ok(comment)
    }

    /// Deletes a comment and its replies; author or admin only.
    pub async fn delete(&self, actor: &User, id: Uuid) -> Result<(), AppError> {
        let repo = GroupCommentRepository::new(self.db);
        let comment = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;
        ensure_owner(actor, comment.user_id, true)?;

        repo.delete(id).await?;

        Ok(())
    }
}
