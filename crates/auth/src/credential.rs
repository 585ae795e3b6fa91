//! Salted HMAC-SHA256 credentials
//!
//! Stored form: `hex(salt)$hex(HMAC-SHA256(key = salt, message = password))`.

use brokerx_ports::PasswordVerifier;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

const SALT_LEN: usize = 16;
const SEPARATOR: char = '$';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("credential hashing failed: {0}")]
    Hashing(String),
}

/// Production [`PasswordVerifier`]
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacPasswordHasher;

impl HmacPasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a password under a fresh random salt
    pub fn hash(&self, password: &str) -> Result<String, CredentialError> {
        let salt: [u8; SALT_LEN] = rand::random();
        self.hash_with_salt(password, &salt)
    }

    fn hash_with_salt(&self, password: &str, salt: &[u8]) -> Result<String, CredentialError> {
        let mut mac = HmacSha256::new_from_slice(salt)
            .map_err(|e| CredentialError::Hashing(e.to_string()))?;
        mac.update(password.as_bytes());
        let digest = mac.finalize().into_bytes();

        Ok(format!(
            "{}{}{}",
            hex::encode(salt),
            SEPARATOR,
            hex::encode(digest)
        ))
    }
}

impl PasswordVerifier for HmacPasswordHasher {
    fn verify(&self, password: &str, credential: &str) -> bool {
        let Some((salt_hex, digest_hex)) = credential.split_once(SEPARATOR) else {
            return false;
        };
        let (Ok(salt), Ok(expected)) = (hex::decode(salt_hex), hex::decode(digest_hex)) else {
            return false;
        };
        if salt.is_empty() {
            return false;
        }
        let Ok(mut mac) = HmacSha256::new_from_slice(&salt) else {
            return false;
        };
        mac.update(password.as_bytes());

        // verify_slice compares in constant time
        mac.verify_slice(&expected).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hasher = HmacPasswordHasher::new();
        let credential = hasher.hash("s3cret!").unwrap();

        assert!(hasher.verify("s3cret!", &credential));
        assert!(!hasher.verify("s3cret", &credential));
        assert!(!hasher.verify("", &credential));
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let hasher = HmacPasswordHasher::new();

        let a = hasher.hash("password").unwrap();
        let b = hasher.hash("password").unwrap();

        assert_ne!(a, b);
        assert!(hasher.verify("password", &a));
        assert!(hasher.verify("password", &b));
    }

    #[test]
    fn test_credential_never_contains_plaintext() {
        let credential = HmacPasswordHasher::new().hash("plaintext-password").unwrap();
        assert!(!credential.contains("plaintext-password"));
    }

    #[test]
    fn test_malformed_credentials_never_verify() {
        let hasher = HmacPasswordHasher::new();

        for credential in ["", "password", "zz$zz", "$abcd", "00ff$", "not$hex"] {
            assert!(!hasher.verify("password", credential), "{credential}");
        }
    }

    #[test]
    fn test_truncated_digest_is_rejected() {
        let hasher = HmacPasswordHasher::new();
        let credential = hasher.hash("password").unwrap();
        let truncated = &credential[..credential.len() - 2];

        assert!(!hasher.verify("password", truncated));
    }
}
