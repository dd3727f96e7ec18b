//! Salted password digests
//!
//! Passwords are never stored in clear text. Each account keeps a random salt
//! and the SHA-256 digest of `salt || password`.
//!
//! A single SHA-256 pass is fast to brute force once a snapshot leaks; it is
//! not a substitute for a deliberately slow password hash.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordHash {
    pub salt: String,
    pub digest: String,
}

impl PasswordHash {
    /// Hash a password with a fresh random salt
    pub fn new(password: &str) -> Self {
        let salt = Uuid::new_v4().simple().to_string();
        let digest = digest(&salt, password);
        Self { salt, digest }
    }

    /// Check a supplied password against the stored digest
    pub fn verify(&self, password: &str) -> bool {
        constant_time_eq::constant_time_eq(digest(&self.salt, password).as_bytes(), self.digest.as_bytes())
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_accepts_matching_password() {
        let hash = PasswordHash::new("111222333444555");
        assert!(hash.verify("111222333444555"));
        assert!(!hash.verify("111222333444556"));
        assert!(!hash.verify(""));
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let first = PasswordHash::new("pitstop");
        let second = PasswordHash::new("pitstop");
        assert_ne!(first.salt, second.salt);
        assert_ne!(first.digest, second.digest);
        assert_eq!(first.digest.len(), 64);
    }

    #[test]
    fn test_tampered_digest_rejected() {
        let mut hash = PasswordHash::new("pitstop");
        hash.digest.truncate(63);
        assert!(!hash.verify("pitstop"));

        let mut hash = PasswordHash::new("pitstop");
        hash.digest.replace_range(0..1, if hash.digest.starts_with('0') { "1" } else { "0" });
        assert!(!hash.verify("pitstop"));
    }
}
