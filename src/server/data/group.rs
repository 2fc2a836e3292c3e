//! Group data repository.
//!
//! Slugs are derived from the group name on create and on rename. When the derived slug
//! is taken the repository appends `-2`, `-3`, ... until it finds a free one.

use chrono::Utc;
use entity::sea_orm_active_enums::GroupPrivacy;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::util::pagination::page_index;
use crate::server::{
    model::group::{CreateGroupParams, Group, UpdateGroupParams},
    util::slug,
};

pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a group with a unique slug derived from its name.
    ///
    /// The caller must ensure the name slugifies to a non-empty string.
    pub async fn create(&self, params: CreateGroupParams) -> Result<Group, DbErr> {
        let now = Utc::now();
        let slug = self.available_slug(&slug::slugify(&params.name), None).await?;

        let entity = entity::group::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            owner_id: ActiveValue::Set(params.owner_id),
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(slug),
            description: ActiveValue::Set(params.description),
            cover_image: ActiveValue::Set(params.cover_image),
            privacy: ActiveValue::Set(params.privacy),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Group::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::Group::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Group::from_entity))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::Group::find()
            .filter(entity::group::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Group::from_entity))
    }

    /// Lists groups newest first.
    ///
    /// With `viewer_id` set, the viewer's own private groups are included alongside
    /// public ones. With `include_private` every group is returned.
    pub async fn get_visible_paginated(
        &self,
        viewer_id: Option<Uuid>,
        include_private: bool,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Group>, u64), DbErr> {
        let mut query = entity::prelude::Group::find();
        if !include_private {
            let mut visible =
                Condition::any().add(entity::group::Column::Privacy.eq(GroupPrivacy::Public));
            if let Some(viewer_id) = viewer_id {
                visible = visible.add(entity::group::Column::OwnerId.eq(viewer_id));
            }
            query = query.filter(visible);
        }

        let paginator = query
            .order_by_desc(entity::group::Column::CreatedAt)
            .order_by_asc(entity::group::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page_index(page, per_page)).await?;

        Ok((entities.into_iter().map(Group::from_entity).collect(), total))
    }

    /// Applies an update, re-deriving the slug when the name changes.
    ///
    /// # Returns
    /// - `Ok(Some(Group))` - Updated group
    /// - `Ok(None)` - No group with that id
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateGroupParams,
    ) -> Result<Option<Group>, DbErr> {
        let Some(group) = entity::prelude::Group::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let renamed = params.name.as_ref().filter(|name| **name != group.name).cloned();

        let mut active_model: entity::group::ActiveModel = group.into();
        if let Some(name) = renamed {
            let slug = self.available_slug(&slug::slugify(&name), Some(id)).await?;
            active_model.name = ActiveValue::Set(name);
            active_model.slug = ActiveValue::Set(slug);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(cover_image) = params.cover_image {
            active_model.cover_image = ActiveValue::Set(Some(cover_image));
        }
        if let Some(privacy) = params.privacy {
            active_model.privacy = ActiveValue::Set(privacy);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Group::from_entity(entity)))
    }

    /// Deletes a group; its comments cascade and its services are detached.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Group::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn available_slug(&self, base: &str, exclude_id: Option<Uuid>) -> Result<String, DbErr> {
        let mut n = 1;
        loop {
            let candidate = slug::candidate(base, n);
            let mut query = entity::prelude::Group::find()
                .filter(entity::group::Column::Slug.eq(candidate.as_str()));
            if let Some(id) = exclude_id {
                query = query.filter(entity::group::Column::Id.ne(id));
            }

            if query.count(self.db).await? == 0 {
                return Ok(candidate);
            }
            n += 1;
        }
    }
}
