use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        notification::{MarkedReadDto, NotificationDto, NotificationFilterDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard,
        service::notification::NotificationService, state::AppState,
        util::pagination::PaginationParams,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// List the caller's notifications, newest first.
///
/// `?unread=true` restricts the list to notifications not yet marked read.
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(
        ("unread" = Option<bool>, Query, description = "Only unread notifications"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of notifications", body = PaginatedDto<NotificationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
    Query(filter): Query<NotificationFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notifications = NotificationService::new(&state.db)
        .list(user.id, filter.unread, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(notifications.into_dto(|n| n.into_dto()))))
}

/// Mark one of the caller's notifications read.
///
/// # Returns
/// - `200 OK` - The notification with `read_at` set
/// - `404 Not Found` - No such notification for this user
#[utoipa::path(
    put,
    path = "/api/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(("id" = Uuid, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Marked read", body = NotificationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notification = NotificationService::new(&state.db)
        .mark_read(user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/notifications/read-all",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Number of notifications marked read", body = MarkedReadDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let updated = NotificationService::new(&state.db)
        .mark_all_read(user.id)
        .await?;

    Ok((StatusCode::OK, Json(MarkedReadDto { updated })))
}
