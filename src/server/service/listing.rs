//! Marketplace service listings.

use entity::sea_orm_active_enums::ServiceStatus;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{group::GroupRepository, service::ServiceRepository},
    error::AppError,
    model::{
        service::{CreateServiceParams, Service, UpdateServiceParams},
        user::User,
    },
    service::ensure_owner,
    util::{pagination::Paginated, slug::slugify},
};

pub struct ListingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a listing, optionally inside a group.
    ///
    /// # Returns
    /// - `Ok(Service)` - The new listing
    /// - `Err(AppError::BadRequest)` - Unusable title or unknown group
    pub async fn create(&self, params: CreateServiceParams) -> Result<Service, AppError> {
        if slugify(&params.title).is_empty() {
            return Err(AppError::BadRequest(
                "title: must contain at least one letter or digit".to_string(),
            ));
        }

        if let Some(group_id) = params.group_id {
            if GroupRepository::new(self.db).find_by_id(group_id).await?.is_none() {
                return Err(AppError::BadRequest("group_id: group not found".to_string()));
            }
        }

        let service = ServiceRepository::new(self.db).create(params).await?;

        tracing::info!(service_id = %service.id, "Created service {}", service.slug);

        Ok(service)
    }

    pub async fn list_published(
        &self,
        category: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Service>, AppError> {
        let category = category.map(|category| category.trim().to_lowercase());

        let (services, total) = ServiceRepository::new(self.db)
            .get_published_paginated(category.as_deref(), page, per_page)
            .await?;

        Ok(Paginated::new(services, total, page, per_page))
    }

    /// Gets a listing by slug. Unpublished listings are only visible to their owner and
    /// admins.
    pub async fn get_by_slug(
        &self,
        slug: &str,
        viewer: Option<&User>,
    ) -> Result<Service, AppError> {
        let service = ServiceRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

        let can_see = service.status == ServiceStatus::Published
            || viewer.is_some_and(|viewer| viewer.can_manage(service.user_id));
        if !can_see {
            return Err(AppError::NotFound("Service not found".to_string()));
        }

        Ok(service)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Service, AppError> {
        ServiceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
    }

    pub async fn update(
        &self,
        actor: &User,
        id: Uuid,
        params: UpdateServiceParams,
    ) -> Result<Service, AppError> {
        let service = self.get_by_id(id).await?;
        ensure_owner(actor, service.user_id, false)?;

        if let Some(title) = &params.title {
            if slugify(title).is_empty() {
                return Err(AppError::BadRequest(
                    "title: must contain at least one letter or digit".to_string(),
                ));
            }
        }

        ServiceRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
    }

    /// Stores the public path of uploaded media on the listing; owner only.
    pub async fn set_media(
        &self,
        actor: &User,
        id: Uuid,
        path: String,
    ) -> Result<Service, AppError> {
        let service = self.get_by_id(id).await?;
        ensure_owner(actor, service.user_id, false)?;

        ServiceRepository::new(self.db)
            .set_media(id, path)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
    }

    pub async fn delete(&self, actor: &User, id: Uuid) -> Result<(), AppError> {
        let service = self.get_by_id(id).await?;
        ensure_owner(actor, service.user_id, true)?;

        ServiceRepository::new(self.db).delete(id).await?;

        tracing::info!(service_id = %id, actor_id = %actor.id, "Deleted service");

        Ok(())
    }
}
