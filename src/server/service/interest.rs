use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::interest::InterestRepository, error::AppError, model::interest::normalize_interests,
};

pub struct InterestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InterestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, user_id: Uuid) -> Result<Vec<String>, AppError> {
        Ok(InterestRepository::new(self.db).get_by_user(user_id).await?)
    }

    /// Replaces the user's interests with the normalized form of `names`.
    ///
    /// # Returns
    /// - `Ok(names)` - The stored set, alphabetical
    /// - `Err(AppError::BadRequest)` - Too many interests or a name is too long
    pub async fn replace(
        &self,
        user_id: Uuid,
        names: Vec<String>,
    ) -> Result<Vec<String>, AppError> {
        let names = normalize_interests(names).map_err(AppError::BadRequest)?;

        let txn = self.db.begin().await?;
        InterestRepository::new(&txn).replace(user_id, &names).await?;
        txn.commit().await?;

        self.get(user_id).await
    }
}
