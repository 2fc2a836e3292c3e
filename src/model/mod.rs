//! Request and response DTOs of the HTTP API.
//!
//! Request DTOs carry their validation rules; the helpers below are the custom rules
//! shared by several of them.

pub mod analytics;
pub mod api;
pub mod auth;
pub mod comment;
pub mod connection;
pub mod group;
pub mod kyc;
pub mod notification;
pub mod opening;
pub mod payment;
pub mod plan;
pub mod reaction;
pub mod report;
pub mod service;
pub mod upload;
pub mod user;
pub mod verification;

use validator::ValidationError;

/// Currencies are three upper-case ASCII letters (ISO 4217 style).
pub fn validate_currency(currency: &str) -> Result<(), ValidationError> {
    if currency.len() == 3 && currency.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(ValidationError::new("currency")
            .with_message("must be a 3-letter upper-case currency code".into()))
    }
}

/// Document references must point into the public upload directory.
pub fn validate_upload_path(path: &str) -> Result<(), ValidationError> {
    let valid = path.starts_with("/uploads/images/")
        && path.len() <= 255
        && !path.contains("..");

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("upload_path")
            .with_message("must be an uploaded image path".into()))
    }
}
