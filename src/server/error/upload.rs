use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum UploadError {
    /// The file's MIME type is neither an image nor a video, or is not accepted by the
    /// endpoint (avatars take images only).
    ///
    /// Results in a 415 Unsupported Media Type response.
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// The multipart body has no `file` field.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Missing file field in upload")]
    MissingFile,

    /// The storage key is empty, too long or contains characters outside
    /// `[A-Za-z0-9_-]`.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid upload key '{0}'")]
    InvalidKey(String),

    /// Writing the file to disk failed. Results in a 500.
    #[error("Failed to store upload: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::MissingFile | Self::InvalidKey(_) => StatusCode::BAD_REQUEST,
            Self::Io(_) => return InternalServerError(self).into_response(),
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
