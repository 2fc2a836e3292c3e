use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::VerificationChannel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A pending verification. The code itself is never returned.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerificationDto {
    pub id: Uuid,
    #[schema(value_type = String)]
    pub channel: VerificationChannel,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RequestVerificationDto {
    #[schema(value_type = String)]
    pub channel: VerificationChannel,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct ConfirmVerificationDto {
    #[schema(value_type = String)]
    pub channel: VerificationChannel,
    #[validate(custom(function = "validate_code"))]
    pub code: String,
}

/// Verification codes are exactly six ASCII digits.
pub fn validate_code(code: &str) -> Result<(), validator::ValidationError> {
    if code.len() == 6 && code.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("code").with_message("must be 6 digits".into()))
    }
}
