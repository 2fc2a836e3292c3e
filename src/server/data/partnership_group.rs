use chrono::Utc;
use entity::sea_orm_active_enums::PartnershipGroupStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::opening::PartnershipGroup;

pub struct PartnershipGroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PartnershipGroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a group in the `forming` state.
    pub async fn create(&self, opening_id: Uuid, name: String) -> Result<PartnershipGroup, DbErr> {
        let now = Utc::now();
        let entity = entity::partnership_group::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            opening_id: ActiveValue::Set(opening_id),
            name: ActiveValue::Set(name),
            status: ActiveValue::Set(PartnershipGroupStatus::Forming),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(PartnershipGroup::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<PartnershipGroup>, DbErr> {
        let entity = entity::prelude::PartnershipGroup::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(PartnershipGroup::from_entity))
    }

    pub async fn name_exists(&self, opening_id: Uuid, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::PartnershipGroup::find()
            .filter(entity::partnership_group::Column::OpeningId.eq(opening_id))
            .filter(entity::partnership_group::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn get_by_opening(&self, opening_id: Uuid) -> Result<Vec<PartnershipGroup>, DbErr> {
        let entities = entity::prelude::PartnershipGroup::find()
            .filter(entity::partnership_group::Column::OpeningId.eq(opening_id))
            .order_by_asc(entity::partnership_group::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(PartnershipGroup::from_entity)
            .collect())
    }

    pub async fn set_status(
        &self,
        id: Uuid,
        status: PartnershipGroupStatus,
    ) -> Result<Option<PartnershipGroup>, DbErr> {
        let Some(group) = entity::prelude::PartnershipGroup::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::partnership_group::ActiveModel = group.into();
        active_model.status = ActiveValue::Set(status);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(PartnershipGroup::from_entity(entity)))
    }
}
