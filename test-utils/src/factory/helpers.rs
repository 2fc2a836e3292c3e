//! Shared helper utilities for factory methods.
//!
//! Provides the counter used to keep generated names unique and a few helpers that
//! create an entity together with the rows it depends on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a published service owned by that user.
///
/// # Returns
/// - `Ok((owner, service))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_service_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::service::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let service = crate::factory::service::create_service(db, owner.id).await?;

    Ok((owner, service))
}

/// Creates a user and a public group owned by that user.
pub async fn create_group_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::group::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let group = crate::factory::group::create_group(db, owner.id).await?;

    Ok((owner, group))
}

/// Creates a user and an open opening owned by that user.
pub async fn create_opening_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::opening::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let opening = crate::factory::opening::create_opening(db, owner.id).await?;

    Ok((owner, opening))
}
