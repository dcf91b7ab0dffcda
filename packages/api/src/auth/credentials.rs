//! # Credential (email + password) sign-in
//!
//! [`authorize`] turns a raw JSON body into a signed-in identity or nothing.
//! Every way of failing (malformed body, unknown email, an OAuth-only account
//! without a password, a wrong password, a corrupt stored hash) produces the
//! same [`AuthError::InvalidCredentials`], so the response never reveals
//! whether an email is registered. Accounts that cannot match still pay for
//! one Argon2 verification against [`DUMMY_HASH`], keeping response times
//! alike.

use std::sync::LazyLock;

use serde_json::Value;
use tracing::{debug, warn};

use super::password::{hash_password, verify_password};
use crate::db::UserDirectory;
use crate::error::AuthError;
use crate::models::{CredentialsRequest, UserInfo};

/// Stand-in hash verified when the account has no password to check.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("no account has this password").ok());

fn verify_against_dummy(password: &str) {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(password, hash);
    }
}

pub async fn authorize(users: &UserDirectory, body: &Value) -> Result<UserInfo, AuthError> {
    let Ok(CredentialsRequest { email, password }) = CredentialsRequest::from_json(body) else {
        debug!("credential sign-in rejected: invalid payload");
        return Err(AuthError::InvalidCredentials);
    };

    let Some(user) = users.find_by_email(&email).await else {
        debug!("credential sign-in rejected: no account");
        verify_against_dummy(&password);
        return Err(AuthError::InvalidCredentials);
    };

    let Some(ref hash) = user.password_hash else {
        debug!("credential sign-in rejected: account has no password");
        verify_against_dummy(&password);
        return Err(AuthError::InvalidCredentials);
    };

    match verify_password(&password, hash) {
        Ok(true) => Ok(user.to_info()),
        Ok(false) => Err(AuthError::InvalidCredentials),
        Err(e) => {
            warn!("stored password hash for {} is unreadable: {}", user.id, e);
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn directory_with_ada() -> UserDirectory {
        let users = UserDirectory::new();
        users
            .create(
                "ada@example.com",
                Some("Ada".to_string()),
                hash_password("correct-horse").unwrap(),
            )
            .await
            .unwrap();
        users
    }

    #[tokio::test]
    async fn test_correct_password() {
        let users = directory_with_ada().await;
        let user = authorize(
            &users,
            &json!({ "email": "ada@example.com", "password": "correct-horse" }),
        )
        .await
        .unwrap();
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn test_failures_are_indistinguishable() {
        let users = directory_with_ada().await;
        users.find_or_create_oauth("bob@example.com", None, "google").await;

        let wrong_password = authorize(
            &users,
            &json!({ "email": "ada@example.com", "password": "battery-staple" }),
        )
        .await
        .unwrap_err();
        let unknown_email = authorize(
            &users,
            &json!({ "email": "eve@example.com", "password": "correct-horse" }),
        )
        .await
        .unwrap_err();
        let oauth_only = authorize(
            &users,
            &json!({ "email": "bob@example.com", "password": "correct-horse" }),
        )
        .await
        .unwrap_err();
        let malformed = authorize(&users, &json!({ "email": "ada" })).await.unwrap_err();

        assert_eq!(wrong_password, AuthError::InvalidCredentials);
        assert_eq!(unknown_email, wrong_password);
        assert_eq!(oauth_only, wrong_password);
        assert_eq!(malformed, wrong_password);
    }

    #[test]
    fn test_dummy_hash_never_matches() {
        let hash = DUMMY_HASH.as_deref().unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(!verify_password("correct-horse", hash).unwrap());
        assert!(!verify_password("", hash).unwrap());
    }
}
