use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        upload::UploadFormDto,
        user::{InterestsDto, PublicUserDto, UpdateProfileDto, UpdateUserStatusDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
            upload::{avatar_key, read_multipart, UploadKind},
        },
        model::user::UpdateProfileParams,
        service::{interest::InterestService, user::UserService},
        state::AppState,
        util::{pagination::PaginationParams, validation::ValidatedJson},
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all users with full profiles.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - One page of users ordered by username
/// - `401 Unauthorized` / `403 Forbidden` - Not logged in or not an admin
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of users", body = PaginatedDto<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_all_paginated(params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto(|u| u.into_dto()))))
}

/// Get another user's public profile.
///
/// Contact details (email, phone) are left out.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Public profile", body = PublicUserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_public_dto())))
}

/// Update the logged in user's profile.
///
/// Absent fields are left unchanged. Changing the phone number resets
/// `phone_verified`.
///
/// # Access Control
/// - Logged in, active user
///
/// # Returns
/// - `200 OK` - The updated profile
/// - `400 Bad Request` - Body failed validation
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db)
        .update_profile(user.id, UpdateProfileParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Upload a new avatar image.
///
/// The file is stored as `images/avatar-<user id><.ext>`, replacing an earlier avatar
/// with the same extension.
///
/// # Returns
/// - `200 OK` - Profile with the new avatar path
/// - `400 Bad Request` - No `file` field
/// - `413 Payload Too Large` - Body exceeds the upload limit
/// - `415 Unsupported Media Type` - Not an image
#[utoipa::path(
    put,
    path = "/api/users/me/avatar",
    tag = USER_TAG,
    request_body(content = UploadFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Avatar updated", body = UserDto),
        (status = 400, description = "Missing file", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 413, description = "File too large", body = ErrorDto),
        (status = 415, description = "Not an image", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_avatar(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (file, _) = read_multipart(multipart).await?;
    let stored = state
        .uploads
        .store(&avatar_key(user.id), &file, &[UploadKind::Image])
        .await?;

    let updated = UserService::new(&state.db)
        .set_avatar(user.id, stored.public_path)
        .await?;
    if let Some(current) = updated.avatar.as_deref() {
        state
            .uploads
            .remove_replaced(user.avatar.as_deref(), current)
            .await;
    }

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Delete the logged in user's account and end the session.
///
/// Content owned by the user is removed through cascading deletes. An account with
/// payments cannot be deleted (409).
#[utoipa::path(
    delete,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Account has payments", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    UserService::new(&state.db).delete(user.id).await?;
    AuthSession::new(&session).clear().await;

    tracing::info!(user_id = %user.id, "User deleted their account");

    Ok(StatusCode::NO_CONTENT)
}

/// Suspend, deactivate or reactivate a user.
///
/// # Access Control
/// - `Admin` - Admins cannot change their own status
#[utoipa::path(
    put,
    path = "/api/users/{id}/status",
    tag = USER_TAG,
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = UpdateUserStatusDto,
    responses(
        (status = 200, description = "Status updated", body = UserDto),
        (status = 400, description = "Own account", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .set_status(&admin, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Get the logged in user's interests, alphabetically.
#[utoipa::path(
    get,
    path = "/api/users/me/interests",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Interests", body = InterestsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_interests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let interests = InterestService::new(&state.db).get(user.id).await?;

    Ok((StatusCode::OK, Json(InterestsDto { interests })))
}

/// Replace the logged in user's interests.
///
/// Names are trimmed and lower-cased and duplicates collapse into one entry.
///
/// # Returns
/// - `200 OK` - The stored set
/// - `400 Bad Request` - More than 20 interests, or an empty or overlong name
#[utoipa::path(
    put,
    path = "/api/users/me/interests",
    tag = USER_TAG,
    request_body = InterestsDto,
    responses(
        (status = 200, description = "Interests replaced", body = InterestsDto),
        (status = 400, description = "Invalid interests", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_interests(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<InterestsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let interests = InterestService::new(&state.db)
        .replace(user.id, payload.interests)
        .await?;

    Ok((StatusCode::OK, Json(InterestsDto { interests })))
}
