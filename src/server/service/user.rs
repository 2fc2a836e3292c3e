//! User profile and account administration.

use entity::sea_orm_active_enums::UserStatus;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{UpdateProfileParams, User},
    util::pagination::Paginated,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<User>, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Paginated::new(users, total, page, per_page))
    }

    pub async fn update_profile(
        &self,
        id: Uuid,
        params: UpdateProfileParams,
    ) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .update_profile(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Stores the public path of an uploaded avatar image.
    pub async fn set_avatar(&self, id: Uuid, path: String) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .set_avatar(id, path)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Changes an account's status. Admins cannot change their own status so the last
    /// admin cannot lock themselves out.
    pub async fn set_status(
        &self,
        actor: &User,
        id: Uuid,
        status: UserStatus,
    ) -> Result<User, AppError> {
        if actor.id == id {
            return Err(AppError::BadRequest(
                "You cannot change your own status".to_string(),
            ));
        }

        let user = UserRepository::new(self.db)
            .set_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!(admin_id = %actor.id, user_id = %id, "Changed user status to {:?}", status);

        Ok(user)
    }

    /// Deletes the account. Fails with 409 while payments still reference it.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}
