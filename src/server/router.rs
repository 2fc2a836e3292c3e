use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;

use crate::server::{
    config::Config,
    controller::{
        analytics, auth, connection, forum, group, kyc, notification, opening, payment, plan,
        reaction, report, service, upload, user, verification,
    },
    openapi::ApiDoc,
    state::AppState,
};

pub fn router(config: &Config) -> Router<AppState> {
    Router::new()
        .merge(api_router())
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
}

/// API routes.
///
/// Slug lookups share the `{id}` segment with the id-based routes of the same resource;
/// the handlers extract the segment positionally.
fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/users", get(user::get_users))
        .route(
            "/api/users/me",
            put(user::update_me).delete(user::delete_me),
        )
        .route("/api/users/me/avatar", put(user::upload_avatar))
        .route(
            "/api/users/me/interests",
            get(user::get_interests).put(user::replace_interests),
        )
        .route("/api/users/{id}", get(user::get_user_by_id))
        .route("/api/users/{id}/status", put(user::update_user_status))
        .route("/api/plans", get(plan::get_plans).post(plan::create_plan))
        .route("/api/plans/{id}", put(plan::update_plan))
        .route(
            "/api/groups",
            get(group::get_groups).post(group::create_group),
        )
        .route(
            "/api/groups/{id}",
            get(group::get_group)
                .put(group::update_group)
                .delete(group::delete_group),
        )
        .route(
            "/api/groups/{id}/comments",
            get(group::get_group_comments).post(group::create_group_comment),
        )
        .route(
            "/api/group-comments/{id}",
            delete(group::delete_group_comment),
        )
        .route(
            "/api/services",
            get(service::get_services).post(service::create_service),
        )
        .route(
            "/api/services/{id}",
            get(service::get_service)
                .put(service::update_service)
                .delete(service::delete_service),
        )
        .route(
            "/api/services/{id}/media",
            post(service::upload_service_media),
        )
        .route(
            "/api/services/{id}/feedback",
            get(service::get_feedback).post(service::create_feedback),
        )
        .route("/api/feedback/{id}", delete(service::delete_feedback))
        .route("/api/forum", get(forum::get_threads).post(forum::create_post))
        .route("/api/forum/{id}", delete(forum::delete_post))
        .route("/api/forum/{id}/replies", get(forum::get_replies))
        .route("/api/reactions", put(reaction::set_reaction))
        .route(
            "/api/reactions/{target_type}/{target_id}",
            get(reaction::get_reaction_summary).delete(reaction::remove_reaction),
        )
        .route(
            "/api/reports",
            get(report::get_reports).post(report::create_report),
        )
        .route(
            "/api/reports/{id}/status",
            put(report::update_report_status),
        )
        .route(
            "/api/verifications",
            post(verification::request_verification),
        )
        .route(
            "/api/verifications/confirm",
            post(verification::confirm_verification),
        )
        .route(
            "/api/payments",
            get(payment::get_payments).post(payment::create_payment),
        )
        .route(
            "/api/payments/{id}/status",
            put(payment::update_payment_status),
        )
        .route("/api/kyc", get(kyc::get_pending_kyc).post(kyc::submit_kyc))
        .route("/api/kyc/me", get(kyc::get_my_kyc))
        .route("/api/kyc/{id}/review", put(kyc::review_kyc))
        .route(
            "/api/openings",
            get(opening::get_openings).post(opening::create_opening),
        )
        .route(
            "/api/openings/{id}",
            get(opening::get_opening).delete(opening::delete_opening),
        )
        .route(
            "/api/openings/{id}/status",
            put(opening::update_opening_status),
        )
        .route(
            "/api/openings/{id}/groups",
            get(opening::get_partnership_groups).post(opening::create_partnership_group),
        )
        .route(
            "/api/openings/{id}/partnerships",
            get(opening::get_partnerships).post(opening::apply_to_opening),
        )
        .route(
            "/api/partnerships/{id}/status",
            put(opening::update_partnership_status),
        )
        .route("/api/notifications", get(notification::get_notifications))
        .route(
            "/api/notifications/read-all",
            put(notification::mark_all_notifications_read),
        )
        .route(
            "/api/notifications/{id}/read",
            put(notification::mark_notification_read),
        )
        .route(
            "/api/connections",
            get(connection::get_connections).post(connection::create_connection),
        )
        .route(
            "/api/connections/{id}",
            put(connection::respond_connection).delete(connection::delete_connection),
        )
        .route("/api/page-visits", post(analytics::record_page_visit))
        .route("/api/engagements", post(analytics::record_engagement))
        .route(
            "/api/analytics/page-visits",
            get(analytics::get_page_visit_counts),
        )
        .route(
            "/api/analytics/engagements/{target_type}/{target_id}",
            get(analytics::get_engagement_counts),
        )
        .route("/api/uploads", post(upload::upload_file))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use test_utils::builder::TestBuilder;
    use tower::ServiceExt;

    use super::*;
    use crate::server::middleware::upload::UploadStore;

    fn config(upload_dir: &Path) -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            bind_address: "127.0.0.1:0".to_string(),
            upload_dir: upload_dir.to_path_buf(),
            max_upload_bytes: 1024,
            session_secure: false,
            allowed_origin: None,
        }
    }

    async fn app(upload_dir: &Path) -> Router {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();

        router(&config(upload_dir)).with_state(AppState::new(db, UploadStore::new(upload_dir)))
    }

    #[tokio::test]
    async fn serves_openapi_document() {
        let dir = tempfile::tempdir().unwrap();

        let response = app(dir.path())
            .await
            .oneshot(
                Request::builder()
                    .uri("/api/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(doc["info"]["title"], "BuyersAlike API");
    }

    #[tokio::test]
    async fn serves_stored_uploads() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("images")).unwrap();
        std::fs::write(dir.path().join("images/avatar-1.png"), b"png").unwrap();

        let response = app(dir.path())
            .await
            .oneshot(
                Request::builder()
                    .uri("/uploads/images/avatar-1.png")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"png");
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let dir = tempfile::tempdir().unwrap();

        let response = app(dir.path())
            .await
            .oneshot(
                Request::builder()
                    .uri("/api/does-not-exist")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
