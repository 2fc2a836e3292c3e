//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They:
//!
//! - **Enforce business rules**: ownership, state transitions, one-per-user limits
//! - **Orchestrate**: combine several repositories, inside a transaction where a change
//!   spans tables
//! - **Notify**: record notifications for the other party of an interaction
//!
//! Services take and return domain models from `server::model`, never DTOs.

pub mod analytics;
pub mod auth;
pub mod connection;
pub mod feedback;
pub mod forum;
pub mod group;
pub mod group_comment;
pub mod interest;
pub mod kyc;
pub mod listing;
pub mod notification;
pub mod opening;
pub mod partnership;
pub mod payment;
pub mod plan;
pub mod reaction;
pub mod report;
pub mod user;
pub mod verification;

#[cfg(test)]
mod test;

use uuid::Uuid;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Fails with 403 unless `actor` owns the resource, or is an admin when `allow_admin`.
pub(crate) fn ensure_owner(
    actor: &User,
    owner_id: Uuid,
    allow_admin: bool,
) -> Result<(), AppError> {
    if actor.id == owner_id || (allow_admin && actor.is_admin()) {
        return Ok(());
    }

    Err(AuthError::AccessDenied(
        actor.id,
        format!("user does not own resource owned by {}", owner_id),
    )
    .into())
}
