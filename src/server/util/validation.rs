//! Request body validation.
//!
//! DTOs declare their rules with `#[derive(Validate)]`; controllers take
//! `ValidatedJson<T>` instead of `Json<T>` to get a parsed and validated body. Failures
//! become 400 responses whose message lists every offending field.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::server::error::AppError;

/// JSON extractor that runs `Validate::validate` after deserializing.
///
/// Malformed JSON yields a 400 carrying the parser's message; rule violations yield
/// `AppError::Validation`.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate()?;

        Ok(Self(value))
    }
}

/// Joins field-level failures into `"<field>: <message>; <field>: <message>"`,
/// ordered by field name.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(move |err| format!("{}: {}", field, describe(err)))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn describe(err: &ValidationError) -> String {
    if let Some(message) = &err.message {
        return message.to_string();
    }

    match err.code.as_ref() {
        "length" => "has an invalid length".to_string(),
        "email" => "must be a valid email address".to_string(),
        "range" => "is out of range".to_string(),
        "regex" => "has an invalid format".to_string(),
        "url" => "must be a valid URL".to_string(),
        "required" => "is required".to_string(),
        code => format!("failed the '{}' check", code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::header::CONTENT_TYPE};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct SignupForm {
        #[validate(email)]
        email: String,
        #[validate(length(min = 3, max = 30, message = "must be 3-30 characters"))]
        username: String,
        #[validate(range(min = 1, max = 5))]
        rating: i16,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[test]
    fn accepts_conforming_input() {
        let form = SignupForm {
            email: "buyer@example.com".to_string(),
            username: "buyer".to_string(),
            rating: 4,
        };

        assert!(form.validate().is_ok());
    }

    #[test]
    fn lists_failures_sorted_by_field() {
        let form = SignupForm {
            email: "not-an-email".to_string(),
            username: "ab".to_string(),
            rating: 9,
        };

        let errors = form.validate().unwrap_err();

        assert_eq!(
            format_validation_errors(&errors),
            "email: must be a valid email address; rating: is out of range; \
             username: must be 3-30 characters"
        );
    }

    #[tokio::test]
    async fn extractor_rejects_invalid_body() {
        let req = json_request(r#"{"email":"x","username":"buyer","rating":3}"#);

        let result = ValidatedJson::<SignupForm>::from_request(req, &()).await;

        match result {
            Err(AppError::Validation(errors)) => {
                assert_eq!(
                    format_validation_errors(&errors),
                    "email: must be a valid email address"
                );
            }
            _ => panic!("expected validation error"),
        }
    }

    #[tokio::test]
    async fn extractor_rejects_malformed_json() {
        let req = json_request(r#"{"email": "#);

        let result = ValidatedJson::<SignupForm>::from_request(req, &()).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn extractor_passes_valid_body_through() {
        let req = json_request(r#"{"email":"a@b.co","username":"buyer","rating":5}"#);

        let ValidatedJson(form) = ValidatedJson::<SignupForm>::from_request(req, &())
            .await
            .unwrap();

        assert_eq!(form.username, "buyer");
        assert_eq!(form.rating, 5);
    }
}
