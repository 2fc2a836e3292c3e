//! Registration and password login.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, RegisterParams, User},
    util::password::{hash_password, verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account with an Argon2id password hash.
    ///
    /// # Returns
    /// - `Ok(User)` - The new account
    /// - `Err(AppError::Conflict)` - Email or username already in use
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.email_exists(&params.email).await? {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }
        if repo.username_exists(&params.username).await? {
            return Err(AppError::Conflict("Username is already taken".to_string()));
        }

        let password_hash = hash_password(&params.password)?;
        let user = repo
            .create(CreateUserParams {
                first_name: params.first_name,
                last_name: params.last_name,
                username: params.username,
                email: params.email,
                password_hash,
                phone: params.phone,
            })
            .await?;

        tracing::info!(user_id = %user.id, "Registered user {}", user.username);

        Ok(user)
    }

    /// Checks credentials and returns the account.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match an active account
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::AccountInactive)` - Account suspended or deactivated
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let Some((user, hash)) = UserRepository::new(self.db)
            .find_credentials_by_email(email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active() {
            return Err(AuthError::AccountInactive(user.id).into());
        }

        Ok(user)
    }
}
