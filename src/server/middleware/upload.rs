//! File upload handling.
//!
//! Uploaded files are routed by MIME type into `images/` or `videos/` under the upload
//! root and named `<key><.ext>`, where the key comes from the caller and the extension
//! from the original file name. The upload root is served publicly under `/uploads`.
//!
//! Keys fall into three namespaces that cannot overlap: `avatar-<user>`,
//! `service-<service>` and `user-<uploader>-<key>` for general uploads.

use std::path::{Path, PathBuf};

use axum::{body::Bytes, extract::Multipart};
use uuid::Uuid;

use crate::{
    model::upload::UploadDto,
    server::error::{upload::UploadError, AppError},
};

/// Public URL prefix the upload root is mounted at.
pub const PUBLIC_PREFIX: &str = "/uploads";

const MAX_KEY_LEN: usize = 100;
/// Longest key a caller may choose; leaves room for the `user-<uuid>-` prefix.
const MAX_CALLER_KEY_LEN: usize = 60;

/// Key of a user's avatar image.
pub fn avatar_key(user_id: Uuid) -> String {
    format!("avatar-{}", user_id.simple())
}

/// Key of a service listing's media file.
pub fn service_media_key(service_id: Uuid) -> String {
    format!("service-{}", service_id.simple())
}

/// Places a caller-chosen key in the uploader's own namespace.
///
/// # Returns
/// - `Ok(String)` - `user-<uploader>-<key>`
/// - `Err(UploadError::InvalidKey)` - Key is empty, longer than 60 characters or has
///   characters outside `[A-Za-z0-9_-]`
pub fn scoped_key(uploader_id: Uuid, key: &str) -> Result<String, UploadError> {
    if key.len() > MAX_CALLER_KEY_LEN {
        return Err(UploadError::InvalidKey(key.to_string()));
    }
    validate_key(key)?;

    Ok(format!("user-{}-{}", uploader_id.simple(), key))
}

/// Storage partition chosen from a file's MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Image,
    Video,
}

impl UploadKind {
    /// Maps `image/*` to `Image` and `video/*` to `Video`.
    ///
    /// # Returns
    /// - `Err(UploadError::UnsupportedMediaType)` - Any other type
    pub fn from_mime(mime: &str) -> Result<Self, UploadError> {
        let top_level = mime
            .split('/')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match top_level.as_str() {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            _ => Err(UploadError::UnsupportedMediaType(mime.to_string())),
        }
    }

    /// Directory name below the upload root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Image => "images",
            Self::Video => "videos",
        }
    }
}

/// A file read from a multipart body, not yet written anywhere.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: String,
    pub bytes: Bytes,
}

/// Where a file ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredFile {
    pub kind: UploadKind,
    /// Path below `/uploads`, e.g. `/uploads/images/avatar-1.png`.
    pub public_path: String,
    pub disk_path: PathBuf,
}

impl StoredFile {
    pub fn into_dto(self) -> UploadDto {
        UploadDto {
            kind: match self.kind {
                UploadKind::Image => "image",
                UploadKind::Video => "video",
            }
            .to_string(),
            path: self.public_path,
        }
    }
}

/// Writes uploads below a root directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates the `images/` and `videos/` directories if they do not exist yet.
    pub async fn ensure_dirs(&self) -> Result<(), UploadError> {
        for kind in [UploadKind::Image, UploadKind::Video] {
            tokio::fs::create_dir_all(self.root.join(kind.dir_name())).await?;
        }
        Ok(())
    }

    /// Stores `file` as `<root>/<kind>/<key><.ext>`, replacing any previous file there.
    ///
    /// # Arguments
    /// - `key` - File stem; `[A-Za-z0-9_-]`, at most 100 characters
    /// - `file` - The uploaded file
    /// - `accept` - Kinds the calling endpoint takes
    ///
    /// # Returns
    /// - `Ok(StoredFile)` - Location of the written file
    /// - `Err(UploadError::InvalidKey)` - Key is empty, too long or has other characters
    /// - `Err(UploadError::UnsupportedMediaType)` - MIME type not in `accept`
    /// - `Err(UploadError::Io)` - Writing failed
    pub async fn store(
        &self,
        key: &str,
        file: &UploadedFile,
        accept: &[UploadKind],
    ) -> Result<StoredFile, UploadError> {
        validate_key(key)?;

        let kind = UploadKind::from_mime(&file.content_type)?;
        if !accept.contains(&kind) {
            return Err(UploadError::UnsupportedMediaType(file.content_type.clone()));
        }

        let file_name = format!(
            "{}{}",
            key,
            extension_of(file.file_name.as_deref().unwrap_or_default())
        );

        let dir = self.root.join(kind.dir_name());
        tokio::fs::create_dir_all(&dir).await?;

        let disk_path = dir.join(&file_name);
        tokio::fs::write(&disk_path, &file.bytes).await?;

        tracing::debug!("Stored upload at {}", disk_path.display());

        Ok(StoredFile {
            kind,
            public_path: format!("{}/{}/{}", PUBLIC_PREFIX, kind.dir_name(), file_name),
            disk_path,
        })
    }

    /// Deletes the file behind `previous` once `current` has replaced it.
    ///
    /// Nothing happens when both paths are the same or `previous` does not point into
    /// the upload directory. Failures are logged, the new file stays in place.
    pub async fn remove_replaced(&self, previous: Option<&str>, current: &str) {
        let Some(previous) = previous.filter(|previous| *previous != current) else {
            return;
        };
        let Some(disk_path) = self.disk_path_of(previous) else {
            tracing::debug!("Not removing {} outside the upload directory", previous);
            return;
        };

        match tokio::fs::remove_file(&disk_path).await {
            Ok(()) => tracing::debug!("Removed replaced upload {}", disk_path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove {}: {}", disk_path.display(), e),
        }
    }

    /// Maps `/uploads/<images|videos>/<file>` back to its location on disk.
    fn disk_path_of(&self, public_path: &str) -> Option<PathBuf> {
        let rest = public_path.strip_prefix(PUBLIC_PREFIX)?.strip_prefix('/')?;
        let (dir, file_name) = rest.split_once('/')?;

        let kind = [UploadKind::Image, UploadKind::Video]
            .into_iter()
            .find(|kind| kind.dir_name() == dir)?;
        let (stem, ext) = match file_name.split_once('.') {
            Some((stem, ext)) => (stem, Some(ext)),
            None => (file_name, None),
        };
        validate_key(stem).ok()?;
        if ext.is_some_and(|ext| {
            ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric())
        }) {
            return None;
        }

        Some(self.root.join(kind.dir_name()).join(file_name))
    }
}

/// Reads the `file` field and the optional `key` text field from a multipart body.
///
/// # Returns
/// - `Ok((file, key))` - The file and the key if one was sent
/// - `Err(UploadError::MissingFile)` - No `file` field present
/// - `Err(AppError::MultipartErr)` - Malformed or oversized body
pub async fn read_multipart(
    mut multipart: Multipart,
) -> Result<(UploadedFile, Option<String>), AppError> {
    let mut file = None;
    let mut key = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("file") => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await?;

                file = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            Some("key") => {
                let text = field.text().await?;
                if !text.trim().is_empty() {
                    key = Some(text.trim().to_string());
                }
            }
            _ => {}
        }
    }

    let file = file.ok_or(UploadError::MissingFile)?;

    Ok((file, key))
}

fn validate_key(key: &str) -> Result<(), UploadError> {
    let valid = !key.is_empty()
        && key.len() <= MAX_KEY_LEN
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(UploadError::InvalidKey(key.to_string()))
    }
}

/// Lower-cased `.ext` of a file name, or an empty string when there is none.
fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: Option<&str>, content_type: &str) -> UploadedFile {
        UploadedFile {
            file_name: name.map(str::to_string),
            content_type: content_type.to_string(),
            bytes: Bytes::from_static(b"payload"),
        }
    }

    #[test]
    fn routes_mime_types_to_partitions() {
        assert_eq!(UploadKind::from_mime("image/png").unwrap(), UploadKind::Image);
        assert_eq!(UploadKind::from_mime("IMAGE/JPEG").unwrap(), UploadKind::Image);
        assert_eq!(UploadKind::from_mime("video/mp4").unwrap(), UploadKind::Video);
        assert!(matches!(
            UploadKind::from_mime("application/pdf"),
            Err(UploadError::UnsupportedMediaType(_))
        ));
        assert!(UploadKind::from_mime("").is_err());
    }

    #[test]
    fn extracts_lowercase_extension() {
        assert_eq!(extension_of("Photo.JPG"), ".jpg");
        assert_eq!(extension_of("clip.final.mp4"), ".mp4");
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of(""), "");
    }

    #[tokio::test]
    async fn stores_image_under_images_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let stored = store
            .store(
                "avatar-42",
                &file(Some("me.PNG"), "image/png"),
                &[UploadKind::Image],
            )
            .await
            .unwrap();

        assert_eq!(stored.kind, UploadKind::Image);
        assert_eq!(stored.public_path, "/uploads/images/avatar-42.png");
        assert_eq!(stored.disk_path, dir.path().join("images").join("avatar-42.png"));
        assert_eq!(tokio::fs::read(&stored.disk_path).await.unwrap(), b"payload");
    }

    #[tokio::test]
    async fn stores_video_under_videos_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let stored = store
            .store(
                "promo",
                &file(Some("promo.mp4"), "video/mp4"),
                &[UploadKind::Image, UploadKind::Video],
            )
            .await
            .unwrap();

        assert_eq!(stored.public_path, "/uploads/videos/promo.mp4");
        assert!(dir.path().join("videos").join("promo.mp4").exists());

        let dto = stored.into_dto();
        assert_eq!(dto.kind, "video");
        assert_eq!(dto.path, "/uploads/videos/promo.mp4");
    }

    #[tokio::test]
    async fn stores_file_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let stored = store
            .store("raw", &file(None, "image/webp"), &[UploadKind::Image])
            .await
            .unwrap();

        assert_eq!(stored.public_path, "/uploads/images/raw");
    }

    #[tokio::test]
    async fn rejects_kind_not_accepted_by_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let result = store
            .store("avatar", &file(Some("a.mp4"), "video/mp4"), &[UploadKind::Image])
            .await;

        assert!(matches!(result, Err(UploadError::UnsupportedMediaType(_))));
        assert!(!dir.path().join("videos").exists());
    }

    #[tokio::test]
    async fn rejects_unsafe_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());
        let image = file(Some("a.png"), "image/png");
        let long_key = "k".repeat(101);

        for key in ["", "../escape", "a/b", "with space", long_key.as_str()] {
            let result = store.store(key, &image, &[UploadKind::Image]).await;
            assert!(matches!(result, Err(UploadError::InvalidKey(_))), "{key}");
        }
    }

    #[tokio::test]
    async fn creates_partition_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path().join("uploads"));

        store.ensure_dirs().await.unwrap();

        assert!(dir.path().join("uploads/images").is_dir());
        assert!(dir.path().join("uploads/videos").is_dir());
    }

    #[tokio::test]
    async fn caller_keys_cannot_reach_avatar_paths() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());
        let victim = Uuid::new_v4();
        let uploader = Uuid::new_v4();

        let avatar = UploadedFile {
            bytes: Bytes::from_static(b"victim"),
            ..file(Some("me.png"), "image/png")
        };
        let avatar = store
            .store(&avatar_key(victim), &avatar, &[UploadKind::Image])
            .await
            .unwrap();

        let upload = UploadedFile {
            bytes: Bytes::from_static(b"attacker"),
            ..file(Some("me.png"), "image/png")
        };
        let key = scoped_key(uploader, &avatar_key(victim)).unwrap();
        let upload = store.store(&key, &upload, &[UploadKind::Image]).await.unwrap();

        assert_ne!(upload.public_path, avatar.public_path);
        assert!(upload
            .public_path
            .starts_with(&format!("/uploads/images/user-{}-", uploader.simple())));
        assert_eq!(tokio::fs::read(&avatar.disk_path).await.unwrap(), b"victim");
    }

    #[test]
    fn rejects_overlong_caller_keys() {
        let uploader = Uuid::new_v4();

        assert!(scoped_key(uploader, &"k".repeat(60)).is_ok());
        assert!(matches!(
            scoped_key(uploader, &"k".repeat(61)),
            Err(UploadError::InvalidKey(_))
        ));
        assert!(matches!(
            scoped_key(uploader, "../avatar"),
            Err(UploadError::InvalidKey(_))
        ));
    }

    #[tokio::test]
    async fn removes_file_replaced_under_new_extension() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());
        let key = avatar_key(Uuid::new_v4());

        let old = store
            .store(&key, &file(Some("a.png"), "image/png"), &[UploadKind::Image])
            .await
            .unwrap();
        let new = store
            .store(&key, &file(Some("a.jpg"), "image/jpeg"), &[UploadKind::Image])
            .await
            .unwrap();

        store
            .remove_replaced(Some(&old.public_path), &new.public_path)
            .await;

        assert!(!old.disk_path.exists());
        assert!(new.disk_path.exists());
    }

    #[tokio::test]
    async fn keeps_files_outside_the_upload_layout() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path().join("uploads"));
        let outside = dir.path().join("secret.png");
        std::fs::write(&outside, b"keep").unwrap();
        let same = store
            .store("same", &file(Some("a.png"), "image/png"), &[UploadKind::Image])
            .await
            .unwrap();

        store
            .remove_replaced(Some("/uploads/images/../../secret.png"), "/uploads/images/x.png")
            .await;
        store
            .remove_replaced(Some("https://cdn.example.com/a.png"), "/uploads/images/x.png")
            .await;
        store
            .remove_replaced(Some(&same.public_path), &same.public_path)
            .await;

        assert!(outside.exists());
        assert!(same.disk_path.exists());
    }
}
