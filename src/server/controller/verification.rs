use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::UserDto,
        verification::{ConfirmVerificationDto, RequestVerificationDto, VerificationDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard,
        service::verification::VerificationService, state::AppState,
        util::validation::ValidatedJson,
    },
};

/// Tag for grouping verification endpoints in OpenAPI documentation
pub static VERIFICATION_TAG: &str = "verification";

/// Issue a six digit code for the email or phone channel.
///
/// Any code still pending for the channel is replaced. The code is valid for 15
/// minutes and is never part of the response.
///
/// # Access Control
/// - Logged in, active user
///
/// # Returns
/// - `201 Created` - Code issued; the body carries its expiry
/// - `400 Bad Request` - Phone channel without a phone number on the profile
/// - `409 Conflict` - The channel is already verified
#[utoipa::path(
    post,
    path = "/api/verifications",
    tag = VERIFICATION_TAG,
    request_body = RequestVerificationDto,
    responses(
        (status = 201, description = "Code issued", body = VerificationDto),
        (status = 400, description = "No phone number", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Already verified", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_verification(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RequestVerificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let verification = VerificationService::new(&state.db)
        .issue(&user, payload.channel)
        .await?;

    Ok((StatusCode::CREATED, Json(verification.into_dto())))
}

/// Confirm a code and mark the channel verified.
///
/// # Returns
/// - `200 OK` - The user with `email_verified` or `phone_verified` set
/// - `400 Bad Request` - No pending code, code expired or code wrong
#[utoipa::path(
    post,
    path = "/api/verifications/confirm",
    tag = VERIFICATION_TAG,
    request_body = ConfirmVerificationDto,
    responses(
        (status = 200, description = "Channel verified", body = UserDto),
        (status = 400, description = "Invalid or expired code", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_verification(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<ConfirmVerificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = VerificationService::new(&state.db)
        .confirm(&user, payload.channel, &payload.code)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
