use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::EngagementTarget;
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        analytics::{RecordEngagementDto, RecordPageVisitDto, RecordedDto},
        api::{CountDto, ErrorDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::analytics::{action_key, RecordEngagementParams, RecordPageVisitParams},
        service::analytics::AnalyticsService,
        state::AppState,
        util::validation::ValidatedJson,
    },
};

/// Tag for grouping analytics endpoints in OpenAPI documentation
pub static ANALYTICS_TAG: &str = "analytics";

/// Client address as reported by the reverse proxy.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim);
    let real_ip = headers
        .get("x-real-ip")
        .and_then(|value| value.to_str().ok())
        .map(str::trim);

    forwarded
        .or(real_ip)
        .filter(|ip| !ip.is_empty())
        .map(|ip| ip.chars().take(45).collect())
}

/// Record a page view.
///
/// Anonymous visits are recorded without a user. The client's IP address and user
/// agent are taken from the request headers.
#[utoipa::path(
    post,
    path = "/api/page-visits",
    tag = ANALYTICS_TAG,
    request_body = RecordPageVisitDto,
    responses(
        (status = 201, description = "Visit recorded", body = RecordedDto),
        (status = 400, description = "Invalid visit", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_page_visit(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<RecordPageVisitDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).optional().await?;

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let params = RecordPageVisitParams::from_dto(
        user.map(|user| user.id),
        payload,
        client_ip(&headers),
        user_agent,
    );

    let id = AnalyticsService::new(&state.db)
        .record_page_visit(params)
        .await?;

    Ok((StatusCode::CREATED, Json(RecordedDto { id })))
}

/// Record an interaction with a group, service, opening, post or profile.
///
/// # Access Control
/// - Logged in, active user
#[utoipa::path(
    post,
    path = "/api/engagements",
    tag = ANALYTICS_TAG,
    request_body = RecordEngagementDto,
    responses(
        (status = 201, description = "Engagement recorded", body = RecordedDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_engagement(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RecordEngagementDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = RecordEngagementParams {
        user_id: user.id,
        target_type: payload.target_type,
        target_id: payload.target_id,
        action: payload.action,
    };
    let id = AnalyticsService::new(&state.db)
        .record_engagement(params)
        .await?;

    Ok((StatusCode::CREATED, Json(RecordedDto { id })))
}

/// Visit counts per path, most visited first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/analytics/page-visits",
    tag = ANALYTICS_TAG,
    responses(
        (status = 200, description = "Visits per path", body = Vec<CountDto>),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_page_visit_counts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let counts: Vec<CountDto> = AnalyticsService::new(&state.db)
        .page_visit_counts()
        .await?
        .into_iter()
        .map(|(key, count)| CountDto { key, count })
        .collect();

    Ok((StatusCode::OK, Json(counts)))
}

/// Engagement counts per action for one target.
#[utoipa::path(
    get,
    path = "/api/analytics/engagements/{target_type}/{target_id}",
    tag = ANALYTICS_TAG,
    params(
        (
            "target_type" = String,
            Path,
            description = "group, service, opening, forum_comment or user"
        ),
        ("target_id" = Uuid, Path, description = "Target ID")
    ),
    responses(
        (status = 200, description = "Engagements per action", body = Vec<CountDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_engagement_counts(
    State(state): State<AppState>,
    session: Session,
    Path((target_type, target_id)): Path<(EngagementTarget, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let counts: Vec<CountDto> = AnalyticsService::new(&state.db)
        .engagement_counts(target_type, target_id)
        .await?
        .into_iter()
        .map(|(action, count)| CountDto {
            key: action_key(action).to_string(),
            count,
        })
        .collect();

    Ok((StatusCode::OK, Json(counts)))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn takes_first_forwarded_address() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.1"));

        assert_eq!(client_ip(&headers).as_deref(), Some("203.0.113.7"));
    }

    #[test]
    fn falls_back_to_real_ip_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));

        assert_eq!(client_ip(&headers).as_deref(), Some("198.51.100.2"));
        assert_eq!(client_ip(&HeaderMap::new()), None);
    }
}
