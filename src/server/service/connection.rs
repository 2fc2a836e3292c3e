//! Connections between users.

use entity::sea_orm_active_enums::{ConnectionStatus, NotificationKind};
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{connection::ConnectionRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{connection::Connection, user::User},
    service::notification::notify,
    util::pagination::Paginated,
};

pub struct ConnectionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConnectionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a connection request and notifies the addressee.
    ///
    /// # Returns
    /// - `Ok(Connection)` - The pending request
    /// - `Err(AppError::BadRequest)` - Requesting a connection to yourself
    /// - `Err(AppError::NotFound)` - Unknown addressee
    /// - `Err(AppError::Conflict)` - A connection exists in either direction
    pub async fn request(&self, actor: &User, addressee_id: Uuid) -> Result<Connection, AppError> {
        if actor.id == addressee_id {
            return Err(AppError::BadRequest(
                "You cannot connect to yourself".to_string(),
            ));
        }

        if UserRepository::new(self.db)
            .find_by_id(addressee_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        if ConnectionRepository::new(self.db)
            .find_between(actor.id, addressee_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "A connection with this user already exists".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let connection = ConnectionRepository::new(&txn)
            .create(actor.id, addressee_id)
            .await?;
        notify(
            &txn,
            addressee_id,
            actor.id,
            NotificationKind::Connection,
            format!("{} wants to connect", actor.username),
            None,
        )
        .await?;
        txn.commit().await?;

        Ok(connection)
    }

    pub async fn list(
        &self,
        user_id: Uuid,
        status: Option<ConnectionStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Connection>, AppError> {
        let (connections, total) = ConnectionRepository::new(self.db)
            .get_by_user_paginated(user_id, status, page, per_page)
            .await?;

        Ok(Paginated::new(connections, total, page, per_page))
    }

    /// Accepts, declines or blocks a pending request; addressee only. The requester is
    /// notified on acceptance.
    pub async fn respond(
        &self,
        actor: &User,
        id: Uuid,
        status: ConnectionStatus,
    ) -> Result<Connection, AppError> {
        let connection = ConnectionRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|connection| connection.involves(actor.id))
            .ok_or_else(|| AppError::NotFound("Connection not found".to_string()))?;

        if connection.addressee_id != actor.id {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("only the addressee may respond to connection {}", id),
            )
            .into());
        }
        if status == ConnectionStatus::Pending {
            return Err(AppError::BadRequest(
                "status: must be accepted, declined or blocked".to_string(),
            ));
        }
        if connection.status != ConnectionStatus::Pending {
            return Err(AppError::BadRequest(
                "Only pending requests can be answered".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let connection = ConnectionRepository::new(&txn)
            .set_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Connection not found".to_string()))?;
        if status == ConnectionStatus::Accepted {
            notify(
                &txn,
                connection.requester_id,
                actor.id,
                NotificationKind::Connection,
                format!("{} accepted your connection request", actor.username),
                None,
            )
            .await?;
        }
        txn.commit().await?;

        Ok(connection)
    }

    /// Removes a connection; either side may do so.
    pub async fn delete(&self, actor: &User, id: Uuid) -> Result<(), AppError> {
        let repo = ConnectionRepository::new(self.db);
        let found = repo
            .find_by_id(id)
            .await?
            .is_some_and(|connection| connection.involves(actor.id));
        if !found {
            return Err(AppError::NotFound("Connection not found".to_string()));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
