use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Permissions a route can demand on top of being logged in.
pub enum Permission {
    Admin,
}

/// Resolves the session's user and checks the requested permissions.
///
/// Only users with status `active` pass, so suspending an account locks it out on the
/// next request without touching its sessions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the authenticated user if every permission is satisfied.
    ///
    /// # Returns
    /// - `Ok(User)` - Logged in, active and permitted
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    /// - `Err(AuthError::AccountInactive)` - User is suspended or deactivated
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.is_active() {
            return Err(AuthError::AccountInactive(user_id).into());
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "route requires the admin role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Like `require(&[])` but yields `None` instead of failing for anonymous requests.
    ///
    /// Used by endpoints that accept both anonymous and logged-in callers.
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        match self.require(&[]).await {
            Ok(user) => Ok(Some(user)),
            Err(AppError::AuthErr(AuthError::UserNotInSession)) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
