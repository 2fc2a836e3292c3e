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
        payment::{CreatePaymentDto, PaymentDto, UpdatePaymentStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::payment::PaymentService,
        state::AppState,
        util::{pagination::PaginationParams, validation::ValidatedJson},
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Start a payment for a plan or a service.
///
/// Exactly one of `plan_id` and `service_id` must be set. The payment is created
/// `pending` with a fresh provider reference; the amount and currency are copied from
/// the plan or service.
///
/// # Access Control
/// - Logged in, active user
///
/// # Returns
/// - `201 Created` - The pending payment
/// - `400 Bad Request` - Both or neither target, inactive plan, unpublished or own service
/// - `404 Not Found` - Plan or service does not exist
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Payment started", body = PaymentDto),
        (status = 400, description = "Invalid payment", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Plan or service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_payment(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let payment = PaymentService::new(&state.db)
        .create(&user, payload.plan_id, payload.service_id, payload.provider)
        .await?;

    Ok((StatusCode::CREATED, Json(payment.into_dto())))
}

/// List the caller's payments, newest first.
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of payments", body = PaginatedDto<PaymentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payments(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let payments = PaymentService::new(&state.db)
        .list_for_user(user.id, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(payments.into_dto(|p| p.into_dto()))))
}

/// Record the provider's outcome for a payment.
///
/// Allowed transitions are pending to succeeded or failed, and succeeded to refunded.
/// A succeeded plan payment moves the buyer onto the plan in the same transaction; a
/// refund takes them off it again. The buyer is notified.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The updated payment
/// - `400 Bad Request` - Transition not allowed
/// - `404 Not Found` - No such payment
#[utoipa::path(
    put,
    path = "/api/payments/{id}/status",
    tag = PAYMENT_TAG,
    params(("id" = Uuid, Path, description = "Payment ID")),
    request_body = UpdatePaymentStatusDto,
    responses(
        (status = 200, description = "Status updated", body = PaymentDto),
        (status = 400, description = "Transition not allowed", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_payment_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePaymentStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let payment = PaymentService::new(&state.db)
        .set_status(&admin, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}
