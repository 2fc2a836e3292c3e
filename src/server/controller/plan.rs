use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        plan::{CreatePlanDto, PlanDto, UpdatePlanDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::plan::{CreatePlanParams, UpdatePlanParams},
        service::plan::PlanService,
        state::AppState,
        util::validation::ValidatedJson,
    },
};

/// Tag for grouping plan endpoints in OpenAPI documentation
pub static PLAN_TAG: &str = "plan";

/// List subscription plans, cheapest first.
///
/// Anonymous callers and regular users see active plans only; admins also see
/// deactivated ones.
#[utoipa::path(
    get,
    path = "/api/plans",
    tag = PLAN_TAG,
    responses(
        (status = 200, description = "Plans", body = Vec<PlanDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plans(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;
    let include_inactive = viewer.is_some_and(|user| user.is_admin());

    let plans = PlanService::new(&state.db).list(include_inactive).await?;
    let plans: Vec<PlanDto> = plans.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(plans)))
}

/// Create a plan.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new plan
/// - `400 Bad Request` - Invalid plan data
/// - `409 Conflict` - A plan with that name exists
#[utoipa::path(
    post,
    path = "/api/plans",
    tag = PLAN_TAG,
    request_body = CreatePlanDto,
    responses(
        (status = 201, description = "Plan created", body = PlanDto),
        (status = 400, description = "Invalid plan data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Name taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_plan(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreatePlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let plan = PlanService::new(&state.db)
        .create(CreatePlanParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(plan.into_dto())))
}

/// Update a plan. Setting `is_active` to false hides it from buyers.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/plans/{id}",
    tag = PLAN_TAG,
    params(("id" = Uuid, Path, description = "Plan ID")),
    request_body = UpdatePlanDto,
    responses(
        (status = 200, description = "Plan updated", body = PlanDto),
        (status = 400, description = "Invalid plan data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 409, description = "Name taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_plan(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdatePlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let plan = PlanService::new(&state.db)
        .update(id, UpdatePlanParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}
