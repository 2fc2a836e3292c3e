use thiserror::Error;

/// Internal issues indicating unexpected behavior and possible bugs.
///
/// Always results in a 500 Internal Server Error with a generic message returned to the
/// client.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A value stored as a string (session entry, path segment) is not a valid UUID.
    #[error("Failed to parse UUID from String '{value}': {source}")]
    ParseStringUuid {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: uuid::Error,
    },

    /// Argon2 failed to hash or parse a stored password hash.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}
