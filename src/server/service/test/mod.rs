use crate::server::{error::AppError, model::user::User};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod auth;
mod connection;
mod feedback;
mod group_comment;
mod interest;
mod kyc;
mod listing;
mod partnership;
mod payment;
mod reaction;
mod report;
mod verification;

/// Inserts a regular user and returns it as a domain model.
async fn user(db: &DatabaseConnection) -> Result<User, AppError> {
    Ok(User::from_entity(factory::create_user(db).await?))
}

async fn admin(db: &DatabaseConnection) -> Result<User, AppError> {
    Ok(User::from_entity(factory::create_admin(db).await?))
}

/// Counts notifications the user has received.
async fn notification_count(db: &DatabaseConnection, user_id: uuid::Uuid) -> Result<u64, AppError> {
    let (_, total) = crate::server::data::notification::NotificationRepository::new(db)
        .get_by_user_paginated(user_id, false, 0, 100)
        .await?;

    Ok(total)
}
