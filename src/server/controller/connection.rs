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
        connection::{
            ConnectionDto, ConnectionFilterDto, CreateConnectionDto, RespondConnectionDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::connection::ConnectionService,
        state::AppState, util::pagination::PaginationParams,
    },
};

/// Tag for grouping connection endpoints in OpenAPI documentation
pub static CONNECTION_TAG: &str = "connection";

/// Send a connection request.
///
/// # Access Control
/// - Logged in, active user
///
/// # Returns
/// - `201 Created` - The pending request; the addressee is notified
/// - `400 Bad Request` - Addressed to the caller
/// - `404 Not Found` - Addressee does not exist
/// - `409 Conflict` - The two users already have a connection in either direction
#[utoipa::path(
    post,
    path = "/api/connections",
    tag = CONNECTION_TAG,
    request_body = CreateConnectionDto,
    responses(
        (status = 201, description = "Request sent", body = ConnectionDto),
        (status = 400, description = "Cannot connect to yourself", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Connection exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_connection(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateConnectionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let connection = ConnectionService::new(&state.db)
        .request(&user, payload.addressee_id)
        .await?;

    Ok((StatusCode::CREATED, Json(connection.into_dto())))
}

/// List connections the caller is part of, on either side, newest first.
#[utoipa::path(
    get,
    path = "/api/connections",
    tag = CONNECTION_TAG,
    params(
        ("status" = Option<String>, Query, description = "pending, accepted, declined or blocked"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of connections", body = PaginatedDto<ConnectionDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_connections(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
    Query(filter): Query<ConnectionFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let connections = ConnectionService::new(&state.db)
        .list(user.id, filter.status, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(connections.into_dto(|c| c.into_dto()))))
}

/// Accept, decline or block a pending request.
///
/// # Access Control
/// - The addressee of the request
///
/// # Returns
/// - `200 OK` - The answered request; the requester is notified of an acceptance
/// - `400 Bad Request` - Request already answered, or `pending` sent as the answer
/// - `403 Forbidden` - Caller is the requester
/// - `404 Not Found` - No such request involving the caller
#[utoipa::path(
    put,
    path = "/api/connections/{id}",
    tag = CONNECTION_TAG,
    params(("id" = Uuid, Path, description = "Connection ID")),
    request_body = RespondConnectionDto,
    responses(
        (status = 200, description = "Request answered", body = ConnectionDto),
        (status = 400, description = "Cannot answer", body = ErrorDto),
        (status = 403, description = "Not the addressee", body = ErrorDto),
        (status = 404, description = "Connection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn respond_connection(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(payload): Json<RespondConnectionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let connection = ConnectionService::new(&state.db)
        .respond(&user, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(connection.into_dto())))
}

/// Remove a connection or cancel a request. Either side may do this.
#[utoipa::path(
    delete,
    path = "/api/connections/{id}",
    tag = CONNECTION_TAG,
    params(("id" = Uuid, Path, description = "Connection ID")),
    responses(
        (status = 204, description = "Connection removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Connection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_connection(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ConnectionService::new(&state.db).delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
