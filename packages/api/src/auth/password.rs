//! # Password hashing and verification: Argon2id
//!
//! Used by the credential path only: [`hash_password`] when a user signs up,
//! [`verify_password`] when they sign in. Hashes are PHC strings
//! (`$argon2id$v=19$m=19456,t=2,p=1$...`) with a fresh random salt each time,
//! stored in [`User::password_hash`](crate::models::User).
//!
//! A malformed stored hash is reported as an error; the sign-in path folds it
//! into the same opaque failure as a wrong password.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

pub use argon2::password_hash::Error as PasswordError;

/// Hash a password using Argon2id. Returns a PHC-format string.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a password against a PHC-format hash string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("morning-run").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("morning-run", &hash).unwrap());
        assert!(!verify_password("evening-run", &hash).unwrap());
    }

    #[test]
    fn test_salted() {
        let a = hash_password("secret1").unwrap();
        let b = hash_password("secret1").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash() {
        assert!(verify_password("secret1", "not-a-phc-string").is_err());
    }
}
