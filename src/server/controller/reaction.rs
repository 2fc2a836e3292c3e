use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::ReactionTarget;
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        reaction::{ReactionDto, ReactionSummaryDto, SetReactionDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::reaction::ReactionService,
        state::AppState,
    },
};

/// Tag for grouping reaction endpoints in OpenAPI documentation
pub static REACTION_TAG: &str = "reaction";

/// Set the caller's reaction on a target.
///
/// A user holds at most one reaction per target; sending another kind replaces the
/// existing one. The content author is notified of new reactions.
///
/// # Returns
/// - `200 OK` - The stored reaction
/// - `404 Not Found` - The target does not exist
#[utoipa::path(
    put,
    path = "/api/reactions",
    tag = REACTION_TAG,
    request_body = SetReactionDto,
    responses(
        (status = 200, description = "Reaction stored", body = ReactionDto),
        (status = 400, description = "Malformed reaction", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Target not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_reaction(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SetReactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reaction = ReactionService::new(&state.db)
        .set(&user, payload.target_type, payload.target_id, payload.kind)
        .await?;

    Ok((StatusCode::OK, Json(reaction.into_dto())))
}

/// Remove the caller's reaction from a target.
#[utoipa::path(
    delete,
    path = "/api/reactions/{target_type}/{target_id}",
    tag = REACTION_TAG,
    params(
        (
            "target_type" = String,
            Path,
            description = "forum_comment, group_comment, feedback_comment or service"
        ),
        ("target_id" = Uuid, Path, description = "Target ID")
    ),
    responses(
        (status = 204, description = "Reaction removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "No reaction to remove", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_reaction(
    State(state): State<AppState>,
    session: Session,
    Path((target_type, target_id)): Path<(ReactionTarget, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ReactionService::new(&state.db)
        .remove(&user, target_type, target_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Count a target's reactions per kind.
///
/// Comments in a private group are reported as missing unless the caller may see the group.
#[utoipa::path(
    get,
    path = "/api/reactions/{target_type}/{target_id}",
    tag = REACTION_TAG,
    params(
        (
            "target_type" = String,
            Path,
            description = "forum_comment, group_comment, feedback_comment or service"
        ),
        ("target_id" = Uuid, Path, description = "Target ID")
    ),
    responses(
        (status = 200, description = "Reaction counts", body = ReactionSummaryDto),
        (status = 404, description = "Target not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reaction_summary(
    State(state): State<AppState>,
    session: Session,
    Path((target_type, target_id)): Path<(ReactionTarget, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let summary = ReactionService::new(&state.db)
        .summary(target_type, target_id, viewer.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}
