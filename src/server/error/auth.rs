use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session refers to a user that no longer exists.
    ///
    /// Results in a 404 Not Found response.
    #[error("Failed to find user {0} in database")]
    UserNotInDatabase(Uuid),

    /// Unknown email or wrong password during login.
    ///
    /// Results in a 401 Unauthorized response. The message does not reveal which of the
    /// two was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The account is suspended or deactivated.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} is not active")]
    AccountInactive(Uuid),

    /// The user is authenticated but lacks the permission or ownership required.
    ///
    /// Results in a 403 Forbidden response. The second field is logged only.
    #[error("User {0} denied access: {1}")]
    AccessDenied(Uuid, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `InvalidCredentials` → 401
/// - `UserNotInDatabase` → 404
/// - `AccountInactive` / `AccessDenied` → 403
///
/// Details are logged at debug level while messages returned to clients stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "Not logged in"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::AccountInactive(_) => (StatusCode::FORBIDDEN, "Account is not active"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
