//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by every controller. Domain errors
//! (`AuthError`, `ConfigError`, `UploadError`, `InternalError`) convert into it with
//! `?` and keep their own status mapping, while the generic variants map onto the
//! standard 400/404/409 responses. Anything unexpected is logged and surfaced to the
//! client as a generic 500.

pub mod auth;
pub mod config;
pub mod internal;
pub mod upload;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{
        error::{auth::AuthError, config::ConfigError, internal::InternalError, upload::UploadError},
        util::validation::format_validation_errors,
    },
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup. Always a 500.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error, mapped by `AuthError::into_response()`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// File upload error, mapped by `UploadError::into_response()`.
    #[error(transparent)]
    UploadErr(#[from] UploadError),

    /// Unexpected internal failure such as a corrupt session value or hashing error.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Unique and foreign key violations become 409 Conflict; everything else is a 500.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Malformed or oversized multipart body. Keeps the status axum assigns (400 or 413).
    #[error(transparent)]
    MultipartErr(#[from] axum::extract::multipart::MultipartError),

    /// Declarative validation failed. Results in 400 with one combined message.
    #[error("{}", format_validation_errors(.0))]
    Validation(#[from] validator::ValidationErrors),

    /// Resource not found. Results in 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request. Results in 400 Bad Request.
    #[error("{0}")]
    BadRequest(String),

    /// The request collides with existing state. Results in 409 Conflict.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with a message that is logged but not returned.
    #[error("{0}")]
    InternalError(String),
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::UploadErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            Self::MultipartErr(err) => error_response(err.status(), err.body_text()),
            Self::Validation(errors) => {
                error_response(StatusCode::BAD_REQUEST, format_validation_errors(&errors))
            }
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!("Unique constraint violation: {}", detail);
                    error_response(StatusCode::CONFLICT, "Resource already exists")
                }
                Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                    tracing::debug!("Foreign key constraint violation: {}", detail);
                    error_response(
                        StatusCode::CONFLICT,
                        "Resource is referenced by or references missing data",
                    )
                }
                _ => InternalServerError(err).into_response(),
            },
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error.
///
/// The error is logged in full while the client only sees a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_generic_variants_to_status_codes() {
        assert_eq!(
            AppError::NotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::BadRequest("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Conflict("x".into()).into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::InternalError("x".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn maps_unexpected_database_error_to_internal_server_error() {
        let err = AppError::DbErr(sea_orm::DbErr::Custom("boom".to_string()));

        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
