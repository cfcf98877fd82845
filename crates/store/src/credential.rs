//! # Credential Hasher
//!
//! The hashing seam used by the user repository. The repository never
//! persists or compares plaintext; both directions go through this trait.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Errors that can occur while producing a credential hash.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Hashing failed: {0}")]
    HashingFailed(String),
}

/// Hashes plaintext credentials and checks plaintext against stored
/// opaque values.
pub trait CredentialHasher: Send + Sync {
    /// Hash a plaintext credential into its opaque stored form.
    fn hash(&self, plaintext: &SecretString) -> Result<String, CredentialError>;

    /// Whether the plaintext matches the stored opaque value. A stored
    /// value that cannot be parsed never matches.
    fn matches(&self, plaintext: &SecretString, stored: &str) -> bool;
}

/// Argon2id hasher producing PHC-format strings.
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plaintext: &SecretString) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plaintext.expose_secret().as_bytes(), &salt)
            .map_err(|e| CredentialError::HashingFailed(e.to_string()))?;
        Ok(hash.to_string())
    }

    fn matches(&self, plaintext: &SecretString, stored: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored) else {
            return false;
        };
        Argon2::default()
            .verify_password(plaintext.expose_secret().as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_match() {
        let hasher = Argon2Hasher;
        let password = SecretString::from("correct horse battery".to_string());
        let stored = hasher.hash(&password).unwrap();

        assert!(stored.starts_with("$argon2"));
        assert!(hasher.matches(&password, &stored));
    }

    #[test]
    fn test_wrong_password_does_not_match() {
        let hasher = Argon2Hasher;
        let password = SecretString::from("correct horse battery".to_string());
        let stored = hasher.hash(&password).unwrap();

        let wrong = SecretString::from("incorrect horse".to_string());
        assert!(!hasher.matches(&wrong, &stored));
    }

    #[test]
    fn test_garbage_stored_value_never_matches() {
        let hasher = Argon2Hasher;
        let password = SecretString::from("anything".to_string());
        assert!(!hasher.matches(&password, "not-a-phc-string"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = Argon2Hasher;
        let password = SecretString::from("same password".to_string());
        let a = hasher.hash(&password).unwrap();
        let b = hasher.hash(&password).unwrap();
        assert_ne!(a, b);
    }
}
