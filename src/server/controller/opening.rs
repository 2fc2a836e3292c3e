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
        opening::{
            ApplyPartnershipDto, CreateOpeningDto, CreatePartnershipGroupDto, OpeningDto,
            OpeningFilterDto, PartnershipDto, PartnershipGroupDto, UpdateOpeningStatusDto,
            UpdatePartnershipStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::opening::{ApplyPartnershipParams, CreateOpeningParams},
        service::{
            opening::{OpeningService, PartnershipGroupService},
            partnership::PartnershipService,
        },
        state::AppState,
        util::{pagination::PaginationParams, validation::ValidatedJson},
    },
};

/// Tag for grouping opening and partnership endpoints in OpenAPI documentation
pub static OPENING_TAG: &str = "opening";

/// Create an opening looking for partners.
///
/// # Access Control
/// - Logged in, active user
///
/// # Returns
/// - `201 Created` - The opening, status `open`
/// - `400 Bad Request` - Invalid data; `slots` must be 1-100
#[utoipa::path(
    post,
    path = "/api/openings",
    tag = OPENING_TAG,
    request_body = CreateOpeningDto,
    responses(
        (status = 201, description = "Opening created", body = OpeningDto),
        (status = 400, description = "Invalid opening", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_opening(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateOpeningDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let opening = OpeningService::new(&state.db)
        .create(CreateOpeningParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(opening.into_dto(0))))
}

/// List openings, newest first, optionally by status.
#[utoipa::path(
    get,
    path = "/api/openings",
    tag = OPENING_TAG,
    params(
        ("status" = Option<String>, Query, description = "open, closed or filled"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of openings", body = PaginatedDto<OpeningDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_openings(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
    Query(filter): Query<OpeningFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let openings = OpeningService::new(&state.db)
        .list(filter.status, params.page, params.per_page())
        .await?;

    Ok((
        StatusCode::OK,
        Json(openings.into_dto(|(opening, filled)| opening.into_dto(filled))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/openings/{id}",
    tag = OPENING_TAG,
    params(("id" = Uuid, Path, description = "Opening ID")),
    responses(
        (status = 200, description = "Opening", body = OpeningDto),
        (status = 404, description = "Opening not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_opening(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let (opening, filled) = OpeningService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(opening.into_dto(filled))))
}

/// Open, close or mark an opening filled.
///
/// Allowed transitions are open to closed or filled, and closed back to open.
///
/// # Access Control
/// - Opening owner
#[utoipa::path(
    put,
    path = "/api/openings/{id}/status",
    tag = OPENING_TAG,
    params(("id" = Uuid, Path, description = "Opening ID")),
    request_body = UpdateOpeningStatusDto,
    responses(
        (status = 200, description = "Status updated", body = OpeningDto),
        (status = 400, description = "Transition not allowed", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Opening not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_opening_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOpeningStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = OpeningService::new(&state.db);
    service.set_status(&user, id, payload.status).await?;
    let (opening, filled) = service.get(id).await?;

    Ok((StatusCode::OK, Json(opening.into_dto(filled))))
}

/// Delete an opening with its partnership groups and applications.
///
/// # Access Control
/// - Opening owner or admin
#[utoipa::path(
    delete,
    path = "/api/openings/{id}",
    tag = OPENING_TAG,
    params(("id" = Uuid, Path, description = "Opening ID")),
    responses(
        (status = 204, description = "Opening deleted"),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Opening not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_opening(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    OpeningService::new(&state.db).delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a named partnership group to an opening.
///
/// # Access Control
/// - Opening owner
///
/// # Returns
/// - `201 Created` - The group, status `forming`
/// - `409 Conflict` - The opening already has a group with that name
#[utoipa::path(
    post,
    path = "/api/openings/{id}/groups",
    tag = OPENING_TAG,
    params(("id" = Uuid, Path, description = "Opening ID")),
    request_body = CreatePartnershipGroupDto,
    responses(
        (status = 201, description = "Group created", body = PartnershipGroupDto),
        (status = 400, description = "Invalid name", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Opening not found", body = ErrorDto),
        (status = 409, description = "Name taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_partnership_group(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<CreatePartnershipGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let group = PartnershipGroupService::new(&state.db)
        .create(&user, id, payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/openings/{id}/groups",
    tag = OPENING_TAG,
    params(("id" = Uuid, Path, description = "Opening ID")),
    responses(
        (status = 200, description = "Partnership groups", body = Vec<PartnershipGroupDto>),
        (status = 404, description = "Opening not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_partnership_groups(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let groups = PartnershipGroupService::new(&state.db).list(id).await?;
    let groups: Vec<PartnershipGroupDto> = groups.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(groups)))
}

/// Apply to an opening.
///
/// # Returns
/// - `201 Created` - The pending application; the opening owner is notified
/// - `400 Bad Request` - Opening not open, or the caller owns it
/// - `409 Conflict` - The caller already has a pending or accepted application
#[utoipa::path(
    post,
    path = "/api/openings/{id}/partnerships",
    tag = OPENING_TAG,
    params(("id" = Uuid, Path, description = "Opening ID")),
    request_body = ApplyPartnershipDto,
    responses(
        (status = 201, description = "Application sent", body = PartnershipDto),
        (status = 400, description = "Cannot apply", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Opening not found", body = ErrorDto),
        (status = 409, description = "Already applied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply_to_opening(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<ApplyPartnershipDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let partnership = PartnershipService::new(&state.db)
        .apply(&user, ApplyPartnershipParams::from_dto(id, user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(partnership.into_dto())))
}

/// List applications to an opening, oldest first.
///
/// # Access Control
/// - Opening owner or admin
#[utoipa::path(
    get,
    path = "/api/openings/{id}/partnerships",
    tag = OPENING_TAG,
    params(
        ("id" = Uuid, Path, description = "Opening ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of applications", body = PaginatedDto<PartnershipDto>),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Opening not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_partnerships(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let partnerships = PartnershipService::new(&state.db)
        .list(&user, id, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(partnerships.into_dto(|p| p.into_dto()))))
}

/// Accept, reject or withdraw an application.
///
/// The opening owner accepts or rejects pending applications; accepting may place the
/// partner in one of the opening's partnership groups, and filling the last slot marks
/// the opening `filled`. The applicant may withdraw a pending or accepted application.
/// The other party is notified.
///
/// # Returns
/// - `200 OK` - The updated application
/// - `400 Bad Request` - Transition not allowed, slots full, or group of another opening
/// - `403 Forbidden` - Caller may not make this change
#[utoipa::path(
    put,
    path = "/api/partnerships/{id}/status",
    tag = OPENING_TAG,
    params(("id" = Uuid, Path, description = "Partnership ID")),
    request_body = UpdatePartnershipStatusDto,
    responses(
        (status = 200, description = "Status updated", body = PartnershipDto),
        (status = 400, description = "Transition not allowed", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Partnership not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_partnership_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePartnershipStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let partnership = PartnershipService::new(&state.db)
        .set_status(&user, id, payload.status, payload.partnership_group_id)
        .await?;

    Ok((StatusCode::OK, Json(partnership.into_dto())))
}
