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
        comment::{CreateFeedbackDto, FeedbackDto},
        service::{CreateServiceDto, ServiceDto, ServiceFilterDto, UpdateServiceDto},
        upload::UploadFormDto,
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            upload::{read_multipart, service_media_key, UploadKind},
        },
        model::{
            comment::CreateFeedbackParams,
            service::{CreateServiceParams, UpdateServiceParams},
        },
        service::{ensure_owner, feedback::FeedbackService, listing::ListingService},
        state::AppState,
        util::{pagination::PaginationParams, validation::ValidatedJson},
    },
};

/// Tag for grouping service listing endpoints in OpenAPI documentation
pub static SERVICE_TAG: &str = "service";

/// Create a service listing.
///
/// Listings start as drafts unless `status` says otherwise. The slug is derived from
/// the title. `group_id`, when given, must name an existing group.
///
/// # Access Control
/// - Logged in, active user
///
/// # Returns
/// - `201 Created` - The new listing
/// - `400 Bad Request` - Invalid data, unknown group or a title without letters or digits
#[utoipa::path(
    post,
    path = "/api/services",
    tag = SERVICE_TAG,
    request_body = CreateServiceDto,
    responses(
        (status = 201, description = "Service created", body = ServiceDto),
        (status = 400, description = "Invalid service data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ListingService::new(&state.db)
        .create(CreateServiceParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(service.into_dto())))
}

/// List published services, newest first, optionally within one category.
#[utoipa::path(
    get,
    path = "/api/services",
    tag = SERVICE_TAG,
    params(
        ("category" = Option<String>, Query, description = "Only services in this category"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of services", body = PaginatedDto<ServiceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_services(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
    Query(filter): Query<ServiceFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let services = ListingService::new(&state.db)
        .list_published(filter.category.as_deref(), params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(services.into_dto(|s| s.into_dto()))))
}

/// Get a service by slug.
///
/// Drafts and archived listings are only returned to their owner and to admins.
#[utoipa::path(
    get,
    path = "/api/services/{slug}",
    tag = SERVICE_TAG,
    params(("slug" = String, Path, description = "Service slug")),
    responses(
        (status = 200, description = "Service", body = ServiceDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let service = ListingService::new(&state.db)
        .get_by_slug(&slug, viewer.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(service.into_dto())))
}

/// Update a service listing.
///
/// # Access Control
/// - Listing owner
#[utoipa::path(
    put,
    path = "/api/services/{id}",
    tag = SERVICE_TAG,
    params(("id" = Uuid, Path, description = "Service ID")),
    request_body = UpdateServiceDto,
    responses(
        (status = 200, description = "Service updated", body = ServiceDto),
        (status = 400, description = "Invalid service data", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_service(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ListingService::new(&state.db)
        .update(&user, id, UpdateServiceParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(service.into_dto())))
}

/// Delete a service listing.
///
/// # Access Control
/// - Listing owner or admin
#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    tag = SERVICE_TAG,
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_service(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ListingService::new(&state.db).delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Attach an image or video to a service listing.
///
/// The file is stored as `service-<id><.ext>` in the partition matching its MIME type.
///
/// # Access Control
/// - Listing owner
///
/// # Returns
/// - `200 OK` - The listing with its new media path
/// - `413 Payload Too Large` - Body exceeds the upload limit
/// - `415 Unsupported Media Type` - Neither an image nor a video
#[utoipa::path(
    post,
    path = "/api/services/{id}/media",
    tag = SERVICE_TAG,
    params(("id" = Uuid, Path, description = "Service ID")),
    request_body(content = UploadFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Media attached", body = ServiceDto),
        (status = 400, description = "Missing file", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 413, description = "File too large", body = ErrorDto),
        (status = 415, description = "Unsupported media type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_service_media(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let listings = ListingService::new(&state.db);
    // Ownership is checked before anything is written to disk
    let service = listings.get_by_id(id).await?;
    ensure_owner(&user, service.user_id, false)?;

    let (file, _) = read_multipart(multipart).await?;
    let stored = state
        .uploads
        .store(
            &service_media_key(id),
            &file,
            &[UploadKind::Image, UploadKind::Video],
        )
        .await?;

    let updated = listings.set_media(&user, id, stored.public_path).await?;
    if let Some(current) = updated.media.as_deref() {
        state
            .uploads
            .remove_replaced(service.media.as_deref(), current)
            .await;
    }

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// List feedback on a service, newest first.
#[utoipa::path(
    get,
    path = "/api/services/{id}/feedback",
    tag = SERVICE_TAG,
    params(
        ("id" = Uuid, Path, description = "Service ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of feedback", body = PaginatedDto<FeedbackDto>),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_feedback(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let feedback = FeedbackService::new(&state.db)
        .list(id, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(feedback.into_dto(|f| f.into_dto()))))
}

/// Leave feedback with a 1-5 rating on someone else's service.
///
/// # Returns
/// - `201 Created` - The feedback
/// - `400 Bad Request` - Invalid rating or body, or the caller owns the service
/// - `404 Not Found` - No such service
/// - `409 Conflict` - The caller already left feedback on this service
#[utoipa::path(
    post,
    path = "/api/services/{id}/feedback",
    tag = SERVICE_TAG,
    params(("id" = Uuid, Path, description = "Service ID")),
    request_body = CreateFeedbackDto,
    responses(
        (status = 201, description = "Feedback created", body = FeedbackDto),
        (status = 400, description = "Invalid feedback", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 409, description = "Feedback already given", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_feedback(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<CreateFeedbackDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let feedback = FeedbackService::new(&state.db)
        .create(&user, CreateFeedbackParams::from_dto(id, user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(feedback.into_dto())))
}

/// Delete feedback.
///
/// # Access Control
/// - Feedback author or admin
#[utoipa::path(
    delete,
    path = "/api/feedback/{id}",
    tag = SERVICE_TAG,
    params(("id" = Uuid, Path, description = "Feedback ID")),
    responses(
        (status = 204, description = "Feedback deleted"),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Feedback not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_feedback(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    FeedbackService::new(&state.db).delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
