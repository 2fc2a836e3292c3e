use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct InterestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InterestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the user's interest names alphabetically.
    pub async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<String>, DbErr> {
        let entities = entity::prelude::Interest::find()
            .filter(entity::interest::Column::UserId.eq(user_id))
            .order_by_asc(entity::interest::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|interest| interest.name).collect())
    }

    /// Replaces the user's interests with `names`.
    ///
    /// Names must already be normalized and unique. Run inside a transaction so readers
    /// never observe the empty intermediate state.
    pub async fn replace(&self, user_id: Uuid, names: &[String]) -> Result<(), DbErr> {
        entity::prelude::Interest::delete_many()
            .filter(entity::interest::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        if names.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let models = names.iter().map(|name| entity::interest::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name.clone()),
            created_at: ActiveValue::Set(now),
        });

        entity::prelude::Interest::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
