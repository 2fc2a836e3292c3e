//! Reaction repository.
//!
//! A user holds at most one reaction per target; setting a new kind replaces the old one
//! in place.

use chrono::Utc;
use entity::sea_orm_active_enums::{ReactionKind, ReactionTarget};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Iterable,
    PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

use crate::server::model::reaction::Reaction;

pub struct ReactionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReactionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_user_and_target(
        &self,
        user_id: Uuid,
        target_type: ReactionTarget,
        target_id: Uuid,
    ) -> Result<Option<Reaction>, DbErr> {
        let entity = entity::prelude::Reaction::find()
            .filter(entity::reaction::Column::UserId.eq(user_id))
            .filter(entity::reaction::Column::TargetType.eq(target_type))
            .filter(entity::reaction::Column::TargetId.eq(target_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Reaction::from_entity))
    }

    /// Inserts the reaction or changes the kind of the existing one.
    ///
    /// # Returns
    /// - `Ok((reaction, true))` - A new reaction was created
    /// - `Ok((reaction, false))` - An existing reaction was updated
    pub async fn upsert(
        &self,
        user_id: Uuid,
        target_type: ReactionTarget,
        target_id: Uuid,
        kind: ReactionKind,
    ) -> Result<(Reaction, bool), DbErr> {
        let existing = entity::prelude::Reaction::find()
            .filter(entity::reaction::Column::UserId.eq(user_id))
            .filter(entity::reaction::Column::TargetType.eq(target_type))
            .filter(entity::reaction::Column::TargetId.eq(target_id))
            .one(self.db)
            .await?;

        if let Some(existing) = existing {
            let mut active_model: entity::reaction::ActiveModel = existing.into();
            active_model.kind = ActiveValue::Set(kind);
            let entity = active_model.update(self.db).await?;

            return Ok((Reaction::from_entity(entity), false));
        }

        let entity = entity::reaction::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            target_type: ActiveValue::Set(target_type),
            target_id: ActiveValue::Set(target_id),
            kind: ActiveValue::Set(kind),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok((Reaction::from_entity(entity), true))
    }

    pub async fn delete_by_user_and_target(
        &self,
        user_id: Uuid,
        target_type: ReactionTarget,
        target_id: Uuid,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Reaction::delete_many()
            .filter(entity::reaction::Column::UserId.eq(user_id))
            .filter(entity::reaction::Column::TargetType.eq(target_type))
            .filter(entity::reaction::Column::TargetId.eq(target_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts reactions on a target per kind, in declaration order, skipping zeroes.
    pub async fn count_by_kind(
        &self,
        target_type: ReactionTarget,
        target_id: Uuid,
    ) -> Result<Vec<(ReactionKind, u64)>, DbErr> {
        let mut counts = Vec::new();

        for kind in ReactionKind::iter() {
            let count = entity::prelude::Reaction::find()
                .filter(entity::reaction::Column::TargetType.eq(target_type))
                .filter(entity::reaction::Column::TargetId.eq(target_id))
                .filter(entity::reaction::Column::Kind.eq(kind))
                .count(self.db)
                .await?;

            if count > 0 {
                counts.push((kind, count));
            }
        }

        Ok(counts)
    }
}
