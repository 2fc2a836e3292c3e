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
        comment::{CreateGroupCommentDto, GroupCommentDto},
        group::{CreateGroupDto, GroupDto, UpdateGroupDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            comment::CreateGroupCommentParams,
            group::{CreateGroupParams, UpdateGroupParams},
        },
        service::{group::GroupService, group_comment::GroupCommentService},
        state::AppState,
        util::{pagination::PaginationParams, validation::ValidatedJson},
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

/// Create a group owned by the logged in user.
///
/// The slug is derived from the name; on collision a numeric suffix is appended.
///
/// # Access Control
/// - Logged in, active user
///
/// # Returns
/// - `201 Created` - The new group
/// - `400 Bad Request` - Invalid data, or a name without any letter or digit
#[utoipa::path(
    post,
    path = "/api/groups",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Group created", body = GroupDto),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let group = GroupService::new(&state.db)
        .create(CreateGroupParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

/// List groups visible to the caller, newest first.
///
/// Anonymous callers get public groups, logged in users also get their own private
/// groups and admins get every group.
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = GROUP_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of groups", body = PaginatedDto<GroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let groups = GroupService::new(&state.db)
        .list(viewer.as_ref(), params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(groups.into_dto(|g| g.into_dto()))))
}

/// Get a group by slug. Private groups are reported as missing unless the caller owns
/// the group or is an admin.
#[utoipa::path(
    get,
    path = "/api/groups/{slug}",
    tag = GROUP_TAG,
    params(("slug" = String, Path, description = "Group slug")),
    responses(
        (status = 200, description = "Group", body = GroupDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let group = GroupService::new(&state.db)
        .get_by_slug(&slug, viewer.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Update a group.
///
/// # Access Control
/// - Group owner
///
/// # Returns
/// - `200 OK` - The updated group; the slug follows a changed name
/// - `403 Forbidden` - Not the owner
/// - `404 Not Found` - No such group
#[utoipa::path(
    put,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = Uuid, Path, description = "Group ID")),
    request_body = UpdateGroupDto,
    responses(
        (status = 200, description = "Group updated", body = GroupDto),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_group(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let group = GroupService::new(&state.db)
        .update(&user, id, UpdateGroupParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Delete a group together with its comments. Services listed in it are kept and
/// detached.
///
/// # Access Control
/// - Group owner or admin
#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = Uuid, Path, description = "Group ID")),
    responses(
        (status = 204, description = "Group deleted"),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    GroupService::new(&state.db).delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List a group's comments, oldest first.
#[utoipa::path(
    get,
    path = "/api/groups/{id}/comments",
    tag = GROUP_TAG,
    params(
        ("id" = Uuid, Path, description = "Group ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of comments", body = PaginatedDto<GroupCommentDto>),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group_comments(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let comments = GroupCommentService::new(&state.db)
        .list(id, viewer.as_ref(), params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(comments.into_dto(|c| c.into_dto()))))
}

/// Post a comment or reply in a group.
///
/// A reply's `parent_id` must point at a comment of the same group. In a private group
/// only the owner may post.
///
/// # Returns
/// - `201 Created` - The new comment
/// - `400 Bad Request` - Invalid body or parent outside the group
/// - `403 Forbidden` - Private group the caller does not own
/// - `404 Not Found` - Group missing or hidden
#[utoipa::path(
    post,
    path = "/api/groups/{id}/comments",
    tag = GROUP_TAG,
    params(("id" = Uuid, Path, description = "Group ID")),
    request_body = CreateGroupCommentDto,
    responses(
        (status = 201, description = "Comment posted", body = GroupCommentDto),
        (status = 400, description = "Invalid comment", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to post here", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group_comment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<CreateGroupCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let comment = GroupCommentService::new(&state.db)
        .create(&user, CreateGroupCommentParams::from_dto(id, user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Delete a group comment and its replies.
///
/// # Access Control
/// - Comment author or admin
#[utoipa::path(
    delete,
    path = "/api/group-comments/{id}",
    tag = GROUP_TAG,
    params(("id" = Uuid, Path, description = "Comment ID")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group_comment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    GroupCommentService::new(&state.db).delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
