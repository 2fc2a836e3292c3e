//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through Axum's
//! state extraction. Both fields are cheap to clone: `DatabaseConnection` is a pool
//! handle and `UploadStore` only holds the upload root.

use sea_orm::DatabaseConnection;

use super::middleware::upload::UploadStore;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Public upload directory for avatars, service media and general uploads.
    pub uploads: UploadStore,
}

impl AppState {
    pub fn new(db: DatabaseConnection, uploads: UploadStore) -> Self {
        Self { db, uploads }
    }
}
