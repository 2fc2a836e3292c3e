use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_UPLOAD_DIR: &str = "public/uploads";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Root of the public upload directory; files land in `images/` or `videos/` below it.
    pub upload_dir: PathBuf,
    /// Request body limit applied to the whole API.
    pub max_upload_bytes: usize,

    /// Marks the session cookie `Secure`; enable behind HTTPS.
    pub session_secure: bool,
    pub allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            max_upload_bytes: parse_env_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            session_secure: parse_env_or("SESSION_SECURE", false)?,
            allowed_origin: std::env::var("ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.is_empty()),
        })
    }
}

/// Reads and parses an optional variable, falling back to `default` when it is unset.
fn parse_env_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_for_unset_variable() {
        let value = parse_env_or("BUYERSALIKE_TEST_UNSET_VARIABLE", 42usize).unwrap();

        assert_eq!(value, 42);
    }
}
