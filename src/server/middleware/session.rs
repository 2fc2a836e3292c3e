//! Type-safe session management wrapper.
//!
//! Keeps the session key and the stored representation of the authenticated user in one
//! place so controllers never touch raw session keys.

use tower_sessions::Session;
use uuid::Uuid;

use crate::server::{error::AppError, util::parse::parse_uuid_from_string};

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Stores the id of the logged-in user as a string and parses it back on every request.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Logs the user in.
    ///
    /// Rotates the session id first so a session id known before login cannot be reused
    /// afterwards.
    ///
    /// # Returns
    /// - `Ok(())` - User ID stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write to the session store
    pub async fn login(&self, user_id: Uuid) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the logged-in user's id.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    /// - `Err(AppError::InternalErr(_))` - Stored value is not a UUID
    pub async fn get_user_id(&self) -> Result<Option<Uuid>, AppError> {
        let Some(user_id) = self.session.get::<String>(SESSION_AUTH_USER_ID).await? else {
            return Ok(None);
        };

        Ok(Some(parse_uuid_from_string(user_id)?))
    }

    /// Removes all session data; used by logout and account deletion.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
