//! Partnership openings and the groups accepted partners are sorted into.

use entity::sea_orm_active_enums::OpeningStatus;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        opening::OpeningRepository, partnership::PartnershipRepository,
        partnership_group::PartnershipGroupRepository,
    },
    error::AppError,
    model::{
        opening::{CreateOpeningParams, Opening, PartnershipGroup},
        user::User,
    },
    service::ensure_owner,
    util::pagination::Paginated,
};

pub struct OpeningService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OpeningService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateOpeningParams) -> Result<Opening, AppError> {
        let opening = OpeningRepository::new(self.db).create(params).await?;

        tracing::info!(opening_id = %opening.id, "Created opening with {} slots", opening.slots);

        Ok(opening)
    }

    /// Lists openings, each paired with its number of accepted partnerships.
    pub async fn list(
        &self,
        status: Option<OpeningStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<(Opening, u64)>, AppError> {
        let (openings, total) = OpeningRepository::new(self.db)
            .get_paginated(status, page, per_page)
            .await?;

        let partnerships = PartnershipRepository::new(self.db);
        let mut items = Vec::with_capacity(openings.len());
        for opening in openings {
            let filled = partnerships.count_accepted(opening.id).await?;
            items.push((opening, filled));
        }

        Ok(Paginated::new(items, total, page, per_page))
    }

    /// Gets an opening with its number of accepted partnerships.
    pub async fn get(&self, id: Uuid) -> Result<(Opening, u64), AppError> {
        let opening = OpeningRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Opening not found".to_string()))?;
        let filled = PartnershipRepository::new(self.db)
            .count_accepted(id)
            .await?;

        Ok((opening, filled))
    }

    /// Opens, closes or fills an opening; owner only.
    ///
    /// # Returns
    /// - `Ok(Opening)` - The updated opening
    /// - `Err(AppError::BadRequest)` - Transition not allowed from the current status
    pub async fn set_status(
        &self,
        actor: &User,
        id: Uuid,
        status: OpeningStatus,
    ) -> Result<Opening, AppError> {
        let (opening, _) = self.get(id).await?;
        ensure_owner(actor, opening.owner_id, false)?;

        if !opening.can_transition_to(status) {
            return Err(AppError::BadRequest(format!(
                "Cannot change opening from {:?} to {:?}",
                opening.status, status
            )));
        }

        OpeningRepository::new(self.db)
            .set_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Opening not found".to_string()))
    }

    pub async fn delete(&self, actor: &User, id: Uuid) -> Result<(), AppError> {
        let (opening, _) = self.get(id).await?;
        ensure_owner(actor, opening.owner_id, true)?;

        OpeningRepository::new(self.db).delete(id).await?;

        Ok(())
    }
}

pub struct PartnershipGroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartnershipGroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a named group to an opening; owner only.
    ///
    /// # Returns
    /// - `Ok(PartnershipGroup)` - The new group, `forming`
    /// - `Err(AppError::Conflict)` - The opening already has a group with that name
    pub async fn create(
        &self,
        actor: &User,
        opening_id: Uuid,
        name: String,
    ) -> Result<PartnershipGroup, AppError> {
        let opening = OpeningRepository::new(self.db)
            .find_by_id(opening_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Opening not found".to_string()))?;
        ensure_owner(actor, opening.owner_id, false)?;

        let name = name.trim().to_string();
        let repo = PartnershipGroupRepository::new(self.db);
        if repo.name_exists(opening_id, &name).await? {
            return Err(AppError::Conflict(
                "This opening already has a group with that name".to_string(),
            ));
        }

        Ok(repo.create(opening_id, name).await?)
    }

    pub async fn list(&self, opening_id: Uuid) -> Result<Vec<PartnershipGroup>, AppError> {
        if OpeningRepository::new(self.db)
            .find_by_id(opening_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Opening not found".to_string()));
        }

        Ok(PartnershipGroupRepository::new(self.db)
            .get_by_opening(opening_id)
            .await?)
    }
}
