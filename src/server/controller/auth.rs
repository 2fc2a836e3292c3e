use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, RegisterDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::RegisterParams,
        service::auth::AuthService,
        state::AppState,
        util::validation::ValidatedJson,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Create an account and log it in.
///
/// The password is hashed with Argon2id before it is stored. On success the new user's
/// id is written to the session, so the client is logged in right away.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - The new account
/// - `400 Bad Request` - Body failed validation
/// - `409 Conflict` - Email or username already taken
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created and logged in", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email or username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .register(RegisterParams::from_dto(payload))
        .await?;

    AuthSession::new(&session).login(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Logged in; the session cookie is set
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `403 Forbidden` - Account is suspended or deactivated
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Invalid login data", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Account inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).login(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out by clearing the session.
///
/// # Returns
/// - `204 No Content` - Session cleared (also when nobody was logged in)
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the currently logged in user.
///
/// # Access Control
/// - Logged in, active user
///
/// # Returns
/// - `200 OK` - The user's full profile
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Account is suspended or deactivated
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Account inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
