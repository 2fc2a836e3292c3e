use sea_orm::DbErr;
use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to SQLite, creating a table or migrating the session store failed.
    #[error(transparent)]
    Database(#[from] DbErr),
}
