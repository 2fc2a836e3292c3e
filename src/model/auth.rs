use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RegisterDto {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[validate(custom(function = "validate_username"))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128, message = "must be 8-128 characters"))]
    pub password: String,
    #[validate(length(min = 7, max = 20))]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct LoginDto {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
}

/// Usernames are 3-30 characters of lower-case letters, digits and underscores.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let valid_len = (3..=30).contains(&username.len());
    let valid_chars = username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

    if valid_len && valid_chars {
        Ok(())
    } else {
        Err(ValidationError::new("username").with_message(
            "must be 3-30 lower-case letters, digits or underscores".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(username: &str, email: &str, password: &str) -> RegisterDto {
        RegisterDto {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            phone: None,
        }
    }

    #[test]
    fn accepts_valid_registration() {
        assert!(register("ada_1815", "ada@example.com", "analytical").validate().is_ok());
    }

    #[test]
    fn rejects_bad_username() {
        let too_long = "a".repeat(31);

        for username in ["ab", "Ada", "ada lovelace", "ada-l", too_long.as_str()] {
            let errors = register(username, "ada@example.com", "analytical")
                .validate()
                .unwrap_err();
            assert!(errors.field_errors().contains_key("username"), "{username}");
        }
    }

    #[test]
    fn rejects_short_password_and_bad_email() {
        let errors = register("ada", "nope", "short").validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }
}
