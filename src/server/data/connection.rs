//! Connection repository.
//!
//! A pair of users has at most one connection row regardless of who asked first; the
//! service checks both directions before inserting.

use chrono::Utc;
use entity::sea_orm_active_enums::ConnectionStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::util::pagination::page_index;
use crate::server::model::connection::Connection;

pub struct ConnectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConnectionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending request from `requester_id` to `addressee_id`.
    pub async fn create(
        &self,
        requester_id: Uuid,
        addressee_id: Uuid,
    ) -> Result<Connection, DbErr> {
        let now = Utc::now();
        let entity = entity::connection::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            requester_id: ActiveValue::Set(requester_id),
            addressee_id: ActiveValue::Set(addressee_id),
            status: ActiveValue::Set(ConnectionStatus::Pending),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Connection::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Connection>, DbErr> {
        let entity = entity::prelude::Connection::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Connection::from_entity))
    }

    /// Finds the connection between two users in either direction.
    pub async fn find_between(&self, a: Uuid, b: Uuid) -> Result<Option<Connection>, DbErr> {
        let entity = entity::prelude::Connection::find()
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(entity::connection::Column::RequesterId.eq(a))
                            .add(entity::connection::Column::AddresseeId.eq(b)),
                    )
                    .add(
                        Condition::all()
                            .add(entity::connection::Column::RequesterId.eq(b))
                            .add(entity::connection::Column::AddresseeId.eq(a)),
                    ),
            )
            .one(self.db)
            .await?;

        Ok(entity.map(Connection::from_entity))
    }

    /// Lists connections the user takes part in, newest first.
    pub async fn get_by_user_paginated(
        &self,
        user_id: Uuid,
        status: Option<ConnectionStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Connection>, u64), DbErr> {
        let mut query = entity::prelude::Connection::find().filter(
            Condition::any()
                .add(entity::connection::Column::RequesterId.eq(user_id))
                .add(entity::connection::Column::AddresseeId.eq(user_id)),
        );
        if let Some(status) = status {
            query = query.filter(entity::connection::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(entity::connection::Column::CreatedAt)
            .order_by_asc(entity::connection::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page_index(page, per_page)).await?;

        Ok((
            entities.into_iter().map(Connection::from_entity).collect(),
            total,
        ))
    }

    pub async fn set_status(
        &self,
        id: Uuid,
        status: ConnectionStatus,
    ) -> Result<Option<Connection>, DbErr> {
        let Some(connection) = entity::prelude::Connection::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::connection::ActiveModel = connection.into();
        active_model.status = ActiveValue::Set(status);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Connection::from_entity(entity)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Connection::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
