//! OpenAPI document for the HTTP API, served as JSON at `/api/openapi.json`.

use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    OpenApi,
};

use crate::server::controller::{
    analytics, auth, connection, forum, group, kyc, notification, opening, payment, plan,
    reaction, report, service, upload, user, verification,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "BuyersAlike API",
        description = "Social marketplace backend for buyers, sellers and their communities."
    ),
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::get_user,
        user::get_users,
        user::get_user_by_id,
        user::update_me,
        user::upload_avatar,
        user::delete_me,
        user::update_user_status,
        user::get_interests,
        user::replace_interests,
        plan::get_plans,
        plan::create_plan,
        plan::update_plan,
        group::create_group,
        group::get_groups,
        group::get_group,
        group::update_group,
        group::delete_group,
        group::get_group_comments,
        group::create_group_comment,
        group::delete_group_comment,
        service::create_service,
        service::get_services,
        service::get_service,
        service::update_service,
        service::delete_service,
        service::upload_service_media,
        service::get_feedback,
        service::create_feedback,
        service::delete_feedback,
        forum::get_threads,
        forum::create_post,
        forum::get_replies,
        forum::delete_post,
        reaction::set_reaction,
        reaction::remove_reaction,
        reaction::get_reaction_summary,
        report::create_report,
        report::get_reports,
        report::update_report_status,
        verification::request_verification,
        verification::confirm_verification,
        payment::create_payment,
        payment::get_payments,
        payment::update_payment_status,
        kyc::submit_kyc,
        kyc::get_my_kyc,
        kyc::get_pending_kyc,
        kyc::review_kyc,
        opening::create_opening,
        opening::get_openings,
        opening::get_opening,
        opening::update_opening_status,
        opening::delete_opening,
        opening::create_partnership_group,
        opening::get_partnership_groups,
        opening::apply_to_opening,
        opening::get_partnerships,
        opening::update_partnership_status,
        notification::get_notifications,
        notification::mark_notification_read,
        notification::mark_all_notifications_read,
        connection::create_connection,
        connection::get_connections,
        connection::respond_connection,
        connection::delete_connection,
        analytics::record_page_visit,
        analytics::record_engagement,
        analytics::get_page_visit_counts,
        analytics::get_engagement_counts,
        upload::upload_file,
    ),
    tags(
        (name = "auth", description = "Registration and session login"),
        (name = "user", description = "Profiles, avatars and interests"),
        (name = "plan", description = "Subscription plans"),
        (name = "group", description = "Groups and group comments"),
        (name = "service", description = "Service listings and feedback"),
        (name = "forum", description = "Forum threads and replies"),
        (name = "reaction", description = "Reactions on content"),
        (name = "report", description = "Moderation reports"),
        (name = "verification", description = "Email and phone verification codes"),
        (name = "payment", description = "Plan and service payments"),
        (name = "kyc", description = "Identity verification"),
        (name = "opening", description = "Openings, partnership groups and partnerships"),
        (name = "notification", description = "In-app notifications"),
        (name = "connection", description = "Connections between users"),
        (name = "analytics", description = "Page visits and engagement"),
        (name = "upload", description = "Image and video uploads"),
    ),
    modifiers(&SessionCookieAddon),
)]
pub struct ApiDoc;

struct SessionCookieAddon;

impl utoipa::Modify for SessionCookieAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("id"))),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_area() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/auth/register",
            "/api/users/me/avatar",
            "/api/reactions/{target_type}/{target_id}",
            "/api/partnerships/{id}/status",
            "/api/uploads",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path}");
        }
        assert!(doc
            .components
            .as_ref()
            .is_some_and(|c| c.security_schemes.contains_key("session_cookie")));
    }
}
