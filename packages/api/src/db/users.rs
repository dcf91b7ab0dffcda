use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{normalize_email, User};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("User already exists")]
    UserExists,
}

/// In-memory user store keyed by normalised email. Records keep the address
/// as it was submitted.
#[derive(Clone, Debug, Default)]
pub struct UserDirectory {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.read().await.get(&normalize_email(email)).cloned()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Register a credential user. The password must already be hashed.
    pub async fn create(
        &self,
        email: &str,
        name: Option<String>,
        password_hash: String,
    ) -> Result<User, DirectoryError> {
        let key = normalize_email(email);
        let mut users = self.users.write().await;
        if users.contains_key(&key) {
            return Err(DirectoryError::UserExists);
        }

        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name,
            password_hash: Some(password_hash),
            provider: None,
            created_at: Utc::now(),
        };
        users.insert(key, user.clone());
        Ok(user)
    }

    /// Return the user registered under `email`, creating a provider-tagged
    /// record if there is none. Existing records are returned untouched.
    pub async fn find_or_create_oauth(
        &self,
        email: &str,
        name: Option<String>,
        provider: &str,
    ) -> (User, bool) {
        let key = normalize_email(email);
        let mut users = self.users.write().await;
        if let Some(existing) = users.get(&key) {
            return (existing.clone(), false);
        }

        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name,
            password_hash: None,
            provider: Some(provider.to_string()),
            created_at: Utc::now(),
        };
        users.insert(key, user.clone());
        (user, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_lookup() {
        let users = UserDirectory::new();
        assert!(users.is_empty().await);

        let user = users
            .create("Ada@Example.com", Some("Ada".to_string()), "hash".to_string())
            .await
            .unwrap();
        assert_eq!(user.email, "Ada@Example.com");
        assert!(user.provider.is_none());

        let found = users.find_by_email("ADA@example.com").await.unwrap();
        assert_eq!(found.id, user.id);
        assert_eq!(found.email, "Ada@Example.com");
        assert!(users.find_by_email("bob@example.com").await.is_none());
    }

    #[tokio::test]
    async fn test_email_is_unique() {
        let users = UserDirectory::new();
        users
            .create("ada@example.com", None, "hash".to_string())
            .await
            .unwrap();
        let err = users
            .create(" ada@example.com", None, "other".to_string())
            .await
            .unwrap_err();
        assert_eq!(err, DirectoryError::UserExists);
        assert_eq!(users.len().await, 1);
    }

    #[tokio::test]
    async fn test_oauth_reuses_existing_email() {
        let users = UserDirectory::new();
        let (first, created) = users
            .find_or_create_oauth("ada@example.com", Some("Ada".to_string()), "google")
            .await;
        assert!(created);
        assert_eq!(first.provider.as_deref(), Some("google"));
        assert!(first.password_hash.is_none());

        let (second, created) = users
            .find_or_create_oauth("ada@example.com", None, "apple")
            .await;
        assert!(!created);
        assert_eq!(second.id, first.id);
        assert_eq!(second.provider.as_deref(), Some("google"));
    }

    #[tokio::test]
    async fn test_signup_after_oauth_conflicts() {
        let users = UserDirectory::new();
        users
            .find_or_create_oauth("ada@example.com", None, "google")
            .await;
        assert_eq!(
            users
                .create("ada@example.com", None, "hash".to_string())
                .await
                .unwrap_err(),
            DirectoryError::UserExists
        );
    }
}
