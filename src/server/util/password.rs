//! Argon2id password hashing.
//!
//! Hashes are stored in PHC string format (`$argon2id$v=19$...`) so the parameters and
//! salt travel with the hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::internal::InternalError;

/// Hashes a password with a fresh random salt and the default Argon2id parameters.
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Checks a password against a stored PHC hash.
///
/// # Returns
/// - `Ok(true)` / `Ok(false)` - Password matches / does not match
/// - `Err(InternalError::PasswordHash)` - The stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, InternalError> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_matching_password() {
        let hash = hash_password("correct horse").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("wrong horse", &hash).unwrap());
    }

    #[test]
    fn salts_every_hash() {
        assert_ne!(
            hash_password("same").unwrap(),
            hash_password("same").unwrap()
        );
    }

    #[test]
    fn rejects_malformed_hash() {
        assert!(verify_password("anything", "plain-text").is_err());
    }
}
