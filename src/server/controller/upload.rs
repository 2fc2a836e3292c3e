use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        upload::{UploadDto, UploadFormDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            upload::{read_multipart, scoped_key, UploadKind},
        },
        state::AppState,
    },
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static UPLOAD_TAG: &str = "upload";

/// Store an image or video in the public upload directory.
///
/// The file lands in `images/` or `videos/` according to its MIME type, named
/// `user-<uploader id>-<key>` plus the original extension. Without a `key` a random one
/// is used. Uploading the same key again replaces the caller's earlier file.
/// The returned path can be referenced from other resources, e.g. KYC documents.
///
/// # Access Control
/// - Logged in, active user
///
/// # Returns
/// - `201 Created` - Kind and public path of the stored file
/// - `400 Bad Request` - No `file` field, or a key longer than 60 characters or with
///   characters outside `[A-Za-z0-9_-]`
/// - `413 Payload Too Large` - Body exceeds the upload limit
/// - `415 Unsupported Media Type` - Neither an image nor a video
#[utoipa::path(
    post,
    path = "/api/uploads",
    tag = UPLOAD_TAG,
    request_body(content = UploadFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File stored", body = UploadDto),
        (status = 400, description = "Missing file or invalid key", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 413, description = "File too large", body = ErrorDto),
        (status = 415, description = "Unsupported media type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_file(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (file, key) = read_multipart(multipart).await?;
    let key = key.unwrap_or_else(|| Uuid::new_v4().simple().to_string());
    let key = scoped_key(user.id, &key)?;

    let stored = state
        .uploads
        .store(&key, &file, &[UploadKind::Image, UploadKind::Video])
        .await?;

    tracing::info!(user_id = %user.id, "Stored upload {}", stored.public_path);

    Ok((StatusCode::CREATED, Json(stored.into_dto())))
}
