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
        comment::{CreateForumCommentDto, ForumCommentDto, ForumFilterDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::comment::CreateForumCommentParams,
        service::forum::ForumService,
        state::AppState,
        util::{pagination::PaginationParams, validation::ValidatedJson},
    },
};

/// Tag for grouping forum endpoints in OpenAPI documentation
pub static FORUM_TAG: &str = "forum";

/// List top-level forum threads, newest first.
#[utoipa::path(
    get,
    path = "/api/forum",
    tag = FORUM_TAG,
    params(
        ("topic" = Option<String>, Query, description = "Only threads with this topic"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of threads", body = PaginatedDto<ForumCommentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_threads(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
    Query(filter): Query<ForumFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let threads = ForumService::new(&state.db)
        .list_top_level(filter.topic.as_deref(), params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(threads.into_dto(|c| c.into_dto()))))
}

/// Start a thread or reply to a post.
///
/// Top-level posts without a `topic` are filed under `general`. Replies take the
/// topic of their parent and notify the parent's author.
///
/// # Access Control
/// - Logged in, active user
///
/// # Returns
/// - `201 Created` - The new post
/// - `400 Bad Request` - Invalid body or unknown parent
#[utoipa::path(
    post,
    path = "/api/forum",
    tag = FORUM_TAG,
    request_body = CreateForumCommentDto,
    responses(
        (status = 201, description = "Post created", body = ForumCommentDto),
        (status = 400, description = "Invalid post", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateForumCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let post = ForumService::new(&state.db)
        .create(&user, CreateForumCommentParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// List direct replies to a post, oldest first.
#[utoipa::path(
    get,
    path = "/api/forum/{id}/replies",
    tag = FORUM_TAG,
    params(
        ("id" = Uuid, Path, description = "Parent post ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of replies", body = PaginatedDto<ForumCommentDto>),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_replies(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let replies = ForumService::new(&state.db)
        .list_replies(id, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(replies.into_dto(|c| c.into_dto()))))
}

/// Delete a post and every reply below it.
///
/// # Access Control
/// - Post author or admin
#[utoipa::path(
    delete,
    path = "/api/forum/{id}",
    tag = FORUM_TAG,
    params(("id" = Uuid, Path, description = "Post ID")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ForumService::new(&state.db).delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
