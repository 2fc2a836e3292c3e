use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of a stored upload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadDto {
    /// `image` or `video`.
    pub kind: String,
    /// Public path below `/uploads`.
    pub path: String,
}

/// Multipart body of the upload endpoints, for the API docs only.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadFormDto {
    /// The file; its MIME type decides between `images/` and `videos/`.
    #[schema(format = Binary, value_type = String)]
    pub file: Vec<u8>,
    /// Stem of the stored file name. Only read by `POST /api/uploads`.
    pub key: Option<String>,
}
