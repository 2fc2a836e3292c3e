//! Groups: creation, visibility and owner management.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::group::GroupRepository,
    error::AppError,
    model::{
        group::{CreateGroupParams, Group, UpdateGroupParams},
        user::User,
    },
    service::ensure_owner,
    util::{pagination::Paginated, slug::slugify},
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a group with a slug derived from its name.
    ///
    /// # Returns
    /// - `Ok(Group)` - The new group
    /// - `Err(AppError::BadRequest)` - The name has no characters usable in a slug
    pub async fn create(&self, params: CreateGroupParams) -> Result<Group, AppError> {
        if slugify(&params.name).is_empty() {
            return Err(AppError::BadRequest(
                "name: must contain at least one letter or digit".to_string(),
            ));
        }

        let group = GroupRepository::new(self.db).create(params).await?;

        tracing::info!(group_id = %group.id, "Created group {}", group.slug);

        Ok(group)
    }

    /// Lists groups the viewer may see. Admins see every group, other users see public
    /// groups plus their own, anonymous viewers see public groups only.
    pub async fn list(
        &self,
        viewer: Option<&User>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Group>, AppError> {
        let viewer_id = viewer.map(|user| user.id);
        let include_private = viewer.is_some_and(User::is_admin);

        let (groups, total) = GroupRepository::new(self.db)
            .get_visible_paginated(viewer_id, include_private, page, per_page)
            .await?;

        Ok(Paginated::new(groups, total, page, per_page))
    }

    /// Gets a group by slug. Private groups are reported as missing to anyone but the
    /// owner or an admin.
    pub async fn get_by_slug(&self, slug: &str, viewer: Option<&User>) -> Result<Group, AppError> {
        let group = GroupRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))?;

        if !group.is_visible_to(viewer.map(|user| user.id), viewer.is_some_and(User::is_admin)) {
            return Err(AppError::NotFound("Group not found".to_string()));
        }

        Ok(group)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Group, AppError> {
        GroupRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))
    }

    /// Updates a group; only the owner may do so.
    pub async fn update(
        &self,
        actor: &User,
        id: Uuid,
        params: UpdateGroupParams,
    ) -> Result<Group, AppError> {
        let group = self.get_by_id(id).await?;
        ensure_owner(actor, group.owner_id, false)?;

        if let Some(name) = &params.name {
            if slugify(name).is_empty() {
                return Err(AppError::BadRequest(
                    "name: must contain at least one letter or digit".to_string(),
                ));
            }
        }

        GroupRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))
    }

    /// Deletes a group, its comments with it; owner or admin only.
    pub async fn delete(&self, actor: &User, id: Uuid) -> Result<(), AppError> {
        let group = self.get_by_id(id).await?;
        ensure_owner(actor, group.owner_id, true)?;

        GroupRepository::new(self.db).delete(id).await?;

        tracing::info!(group_id = %id, actor_id = %actor.id, "Deleted group");

        Ok(())
    }
}
