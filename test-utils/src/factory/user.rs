//! User factory for creating test user entities.
//!
//! Usernames and emails are derived from a shared counter so any number of users can be
//! created in one test without tripping the unique constraints.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{UserRole, UserStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let admin = UserFactory::new(&db)
///     .username("moderator")
///     .role(UserRole::Admin)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    username: String,
    email: String,
    password_hash: String,
    phone: Option<String>,
    role: UserRole,
    status: UserStatus,
    email_verified: bool,
    kyc_verified: bool,
    plan_id: Option<Uuid>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user_{id}"`, email: `"user_{id}@example.com"`
    /// - first/last name: `"Test"` / `"User {id}"`
    /// - role `User`, status `Active`, nothing verified, no plan
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Test".to_string(),
            last_name: format!("User {}", id),
            username: format!("user_{}", id),
            email: format!("user_{}@example.com", id),
            password_hash: "unusable".to_string(),
            phone: None,
            role: UserRole::User,
            status: UserStatus::Active,
            email_verified: false,
            kyc_verified: false,
            plan_id: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash. Tests exercising login pass a real Argon2 hash.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    pub fn email_verified(mut self, email_verified: bool) -> Self {
        self.email_verified = email_verified;
        self
    }

    pub fn kyc_verified(mut self, kyc_verified: bool) -> Self {
        self.kyc_verified = kyc_verified;
        self
    }

    pub fn plan_id(mut self, plan_id: Uuid) -> Self {
        self.plan_id = Some(plan_id);
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            phone: ActiveValue::Set(self.phone),
            bio: ActiveValue::Set(None),
            avatar: ActiveValue::Set(None),
            location: ActiveValue::Set(None),
            role: ActiveValue::Set(self.role),
            status: ActiveValue::Set(self.status),
            email_verified: ActiveValue::Set(self.email_verified),
            phone_verified: ActiveValue::Set(false),
            kyc_verified: ActiveValue::Set(self.kyc_verified),
            plan_id: ActiveValue::Set(self.plan_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active regular user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an active user with the admin role.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(UserRole::Admin).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(user.username.starts_with("user_"));
        assert!(user.email.ends_with("@example.com"));
        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.status, UserStatus::Active);
        assert!(user.plan_id.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_user_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = UserFactory::new(db)
            .username("custom_name")
            .email("custom@example.com")
            .role(UserRole::Admin)
            .status(UserStatus::Suspended)
            .build()
            .await?;

        assert_eq!(user.username, "custom_name");
        assert_eq!(user.email, "custom@example.com");
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.status, UserStatus::Suspended);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_user(db).await?;
        let second = create_user(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.username, second.username);
        assert_ne!(first.email, second.email);

        Ok(())
    }
}
