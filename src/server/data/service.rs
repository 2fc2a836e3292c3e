//! Service listing repository.
//!
//! Slugs follow the same rules as groups: derived from the title and suffixed on
//! collision.

use chrono::Utc;
use entity::sea_orm_active_enums::ServiceStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::util::pagination::page_index;
use crate::server::{
    model::service::{CreateServiceParams, Service, UpdateServiceParams},
    util::slug,
};

pub struct ServiceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ServiceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateServiceParams) -> Result<Service, DbErr> {
        let now = Utc::now();
        let slug = self.available_slug(&slug::slugify(&params.title), None).await?;

        let entity = entity::service::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(params.user_id),
            group_id: ActiveValue::Set(params.group_id),
            title: ActiveValue::Set(params.title),
            slug: ActiveValue::Set(slug),
            description: ActiveValue::Set(params.description),
            category: ActiveValue::Set(params.category),
            price_cents: ActiveValue::Set(params.price_cents),
            currency: ActiveValue::Set(params.currency),
            status: ActiveValue::Set(params.status),
            media: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Service::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Service>, DbErr> {
        let entity = entity::prelude::Service::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Service::from_entity))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Service>, DbErr> {
        let entity = entity::prelude::Service::find()
            .filter(entity::service::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Service::from_entity))
    }

    /// Lists published services newest first, optionally narrowed to one category.
    pub async fn get_published_paginated(
        &self,
        category: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Service>, u64), DbErr> {
        let mut query = entity::prelude::Service::find()
            .filter(entity::service::Column::Status.eq(ServiceStatus::Published));
        if let Some(category) = category {
            query = query.filter(entity::service::Column::Category.eq(category));
        }

        let paginator = query
            .order_by_desc(entity::service::Column::CreatedAt)
            .order_by_asc(entity::service::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page_index(page, per_page)).await?;

        Ok((entities.into_iter().map(Service::from_entity).collect(), total))
    }

    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateServiceParams,
    ) -> Result<Option<Service>, DbErr> {
        let Some(service) = entity::prelude::Service::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let retitled = params
            .title
            .as_ref()
            .filter(|title| **title != service.title)
            .cloned();

        let mut active_model: entity::service::ActiveModel = service.into();
        if let Some(title) = retitled {
            let slug = self.available_slug(&slug::slugify(&title), Some(id)).await?;
            active_model.title = ActiveValue::Set(title);
            active_model.slug = ActiveValue::Set(slug);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(category) = params.category {
            active_model.category = ActiveValue::Set(category);
        }
        if let Some(price_cents) = params.price_cents {
            active_model.price_cents = ActiveValue::Set(price_cents);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Service::from_entity(entity)))
    }

    /// Points the listing at an uploaded media file.
    pub async fn set_media(&self, id: Uuid, media: String) -> Result<Option<Service>, DbErr> {
        let Some(service) = entity::prelude::Service::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::service::ActiveModel = service.into();
        active_model.media = ActiveValue::Set(Some(media));
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Service::from_entity(entity)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Service::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn available_slug(&self, base: &str, exclude_id: Option<Uuid>) -> Result<String, DbErr> {
        let mut n = 1;
        loop {
            let candidate = slug::candidate(base, n);
            let mut query = entity::prelude::Service::find()
                .filter(entity::service::Column::Slug.eq(candidate.as_str()));
            if let Some(id) = exclude_id {
                query = query.filter(entity::service::Column::Id.ne(id));
            }

            if query.count(self.db).await? == 0 {
                return Ok(candidate);
            }
            n += 1;
        }
    }
}
