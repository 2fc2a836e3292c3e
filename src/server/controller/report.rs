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
        report::{CreateReportDto, ReportDto, ReportFilterDto, UpdateReportStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::report::CreateReportParams,
        service::report::ReportService,
        state::AppState,
        util::{pagination::PaginationParams, validation::ValidatedJson},
    },
};

/// Tag for grouping moderation report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

/// Report a user or a piece of content to the moderators.
///
/// # Access Control
/// - Logged in, active user
///
/// # Returns
/// - `201 Created` - The report, status `pending`
/// - `404 Not Found` - The reported target does not exist
/// - `409 Conflict` - The caller already has a pending report on this target
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = REPORT_TAG,
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report filed", body = ReportDto),
        (status = 400, description = "Invalid report", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Target not found", body = ErrorDto),
        (status = 409, description = "Pending report exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_report(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let report = ReportService::new(&state.db)
        .create(CreateReportParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(report.into_dto())))
}

/// List reports, oldest first, optionally by status.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = REPORT_TAG,
    params(
        (
            "status" = Option<String>,
            Query,
            description = "pending, reviewed, dismissed or actioned"
        ),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of reports", body = PaginatedDto<ReportDto>),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reports(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
    Query(filter): Query<ReportFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let reports = ReportService::new(&state.db)
        .list(filter.status, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(reports.into_dto(|r| r.into_dto()))))
}

/// Resolve a report. The reporter is notified of the outcome.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/reports/{id}/status",
    tag = REPORT_TAG,
    params(("id" = Uuid, Path, description = "Report ID")),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ReportDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_report_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateReportStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let report = ReportService::new(&state.db)
        .set_status(&admin, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}
