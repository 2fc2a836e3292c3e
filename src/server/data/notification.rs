use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::util::pagination::page_index;
use crate::server::model::notification::{CreateNotificationParams, Notification};

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(params.user_id),
            actor_id: ActiveValue::Set(params.actor_id),
            kind: ActiveValue::Set(params.kind),
            message: ActiveValue::Set(params.message),
            link: ActiveValue::Set(params.link),
            read_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Lists a user's notifications newest first.
    pub async fn get_by_user_paginated(
        &self,
        user_id: Uuid,
        unread_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Notification>, u64), DbErr> {
        let mut query = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id));
        if unread_only {
            query = query.filter(entity::notification::Column::ReadAt.is_null());
        }

        let paginator = query
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_asc(entity::notification::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page_index(page, per_page)).await?;

        Ok((
            entities.into_iter().map(Notification::from_entity).collect(),
            total,
        ))
    }

    /// Marks one of the user's notifications read. Already-read notifications keep their
    /// original `read_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - The notification
    /// - `Ok(None)` - No such notification for this user
    pub async fn mark_read(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Notification>, DbErr> {
        let Some(notification) = entity::prelude::Notification::find_by_id(id)
            .filter(entity::notification::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if notification.read_at.is_some() {
            return Ok(Some(Notification::from_entity(notification)));
        }

        let mut active_model: entity::notification::ActiveModel = notification.into();
        active_model.read_at = ActiveValue::Set(Some(Utc::now()));

        let entity = active_model.update(self.db).await?;

        Ok(Some(Notification::from_entity(entity)))
    }

    /// Marks every unread notification of the user read.
    ///
    /// # Returns
    /// - `Ok(n)` - Number of notifications updated
    pub async fn mark_all_read(&self, user_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::ReadAt, Expr::value(Utc::now()))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::ReadAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
