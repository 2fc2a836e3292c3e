use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::plan::PlanRepository,
    error::AppError,
    model::plan::{CreatePlanParams, Plan, UpdatePlanParams},
};

pub struct PlanService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists plans; inactive plans are only included for admins.
    pub async fn list(&self, include_inactive: bool) -> Result<Vec<Plan>, AppError> {
        Ok(PlanRepository::new(self.db).get_all(!include_inactive).await?)
    }

    pub async fn create(&self, params: CreatePlanParams) -> Result<Plan, AppError> {
        let repo = PlanRepository::new(self.db);
        if repo.name_exists(&params.name, None).await? {
            return Err(AppError::Conflict("A plan with that name already exists".to_string()));
        }

        Ok(repo.create(params).await?)
    }

    pub async fn update(&self, id: Uuid, params: UpdatePlanParams) -> Result<Plan, AppError> {
        let repo = PlanRepository::new(self.db);
        if let Some(name) = &params.name {
            if repo.name_exists(name, Some(id)).await? {
                return Err(AppError::Conflict(
                    "A plan with that name already exists".to_string(),
                ));
            }
        }

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Plan not found".to_string()))
    }
}
