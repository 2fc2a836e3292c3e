use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Connects to the Postgres database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before the server
/// accepts requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application's Postgres pool.
///
/// The session table is created on first start. Sessions expire after 7 days without
/// activity, and the cookie is only marked `Secure` when `SESSION_SECURE` is set.
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<PostgresStore>, AppError> {
    let store = PostgresStore::new(db.get_postgres_connection_pool().clone());
    store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {e}")))?;

    Ok(SessionManagerLayer::new(store)
        .with_secure(config.session_secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7))))
}

/// Builds the CORS layer for `ALLOWED_ORIGIN`, if one is configured.
///
/// Credentials are allowed so browsers send the session cookie cross-origin.
pub fn setup_cors(config: &Config) -> Result<Option<CorsLayer>, AppError> {
    let Some(origin) = &config.allowed_origin else {
        return Ok(None);
    };

    let origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
        name: "ALLOWED_ORIGIN".to_string(),
        value: origin.clone(),
    })?;

    Ok(Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true),
    ))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn config(allowed_origin: Option<&str>) -> Config {
        Config {
            database_url: "postgres://localhost/buyersalike".to_string(),
            bind_address: "127.0.0.1:0".to_string(),
            upload_dir: PathBuf::from("public/uploads"),
            max_upload_bytes: 1024,
            session_secure: false,
            allowed_origin: allowed_origin.map(str::to_string),
        }
    }

    #[test]
    fn skips_cors_without_origin() {
        assert!(setup_cors(&config(None)).unwrap().is_none());
    }

    #[test]
    fn builds_cors_for_configured_origin() {
        assert!(setup_cors(&config(Some("https://buyersalike.com")))
            .unwrap()
            .is_some());
    }

    #[test]
    fn rejects_origin_that_is_not_a_header_value() {
        let result = setup_cors(&config(Some("https://bad\norigin")));

        assert!(matches!(result, Err(AppError::ConfigErr(_))));
    }
}
