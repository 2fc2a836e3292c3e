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
        kyc::{KycApplicationDto, ReviewKycDto, SubmitKycDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::kyc::{ReviewKycParams, SubmitKycParams},
        service::kyc::KycService,
        state::AppState,
        util::{pagination::PaginationParams, validation::ValidatedJson},
    },
};

/// Tag for grouping KYC endpoints in OpenAPI documentation
pub static KYC_TAG: &str = "kyc";

/// Submit identity documents for review.
///
/// Document images are uploaded through `/api/uploads` first and referenced by their
/// public path.
///
/// # Access Control
/// - Logged in, active user
///
/// # Returns
/// - `201 Created` - The pending application
/// - `400 Bad Request` - Invalid data or document path
/// - `409 Conflict` - Already verified, or an application is still pending
#[utoipa::path(
    post,
    path = "/api/kyc",
    tag = KYC_TAG,
    request_body = SubmitKycDto,
    responses(
        (status = 201, description = "Application submitted", body = KycApplicationDto),
        (status = 400, description = "Invalid application", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Verified or pending already", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_kyc(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<SubmitKycDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let application = KycService::new(&state.db)
        .submit(&user, SubmitKycParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(application.into_dto())))
}

/// Get the caller's most recent application.
#[utoipa::path(
    get,
    path = "/api/kyc/me",
    tag = KYC_TAG,
    responses(
        (status = 200, description = "Latest application", body = KycApplicationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "No application", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_kyc(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let application = KycService::new(&state.db).latest_for_user(user.id).await?;

    Ok((StatusCode::OK, Json(application.into_dto())))
}

/// List applications waiting for review, oldest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/kyc",
    tag = KYC_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (
            status = 200,
            description = "Page of pending applications",
            body = PaginatedDto<KycApplicationDto>
        ),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pending_kyc(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let applications = KycService::new(&state.db)
        .list_pending(params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(applications.into_dto(|a| a.into_dto()))))
}

/// Approve or reject a pending application.
///
/// A rejection needs a `rejection_reason`. Approval sets `kyc_verified` on the
/// applicant. Either way the applicant is notified.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The reviewed application
/// - `400 Bad Request` - Target status `pending`, or rejection without reason
/// - `404 Not Found` - No such application
/// - `409 Conflict` - Application was already reviewed
#[utoipa::path(
    put,
    path = "/api/kyc/{id}/review",
    tag = KYC_TAG,
    params(("id" = Uuid, Path, description = "Application ID")),
    request_body = ReviewKycDto,
    responses(
        (status = 200, description = "Application reviewed", body = KycApplicationDto),
        (status = 400, description = "Invalid review", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 409, description = "Already reviewed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn review_kyc(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<ReviewKycDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = ReviewKycParams {
        reviewer_id: admin.id,
        status: payload.status,
        rejection_reason: payload.rejection_reason,
    };
    let application = KycService::new(&state.db).review(id, params).await?;

    Ok((StatusCode::OK, Json(application.into_dto())))
}
