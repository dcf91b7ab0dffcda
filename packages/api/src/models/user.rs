//! # User model for authenticated users
//!
//! ## [`User`] (server only)
//!
//! The full record held by the in-memory user directory:
//!
//! - `id`: UUID v4 generated when the record is created.
//! - `email`: as submitted. Its trimmed, lowercased form is the directory key.
//! - `name`: optional display name from signup or the OAuth profile.
//! - `password_hash`: Argon2 PHC string, present only for credential signups.
//! - `provider`: `"google"` / `"apple"` for records created by an OAuth
//!   sign-in, `None` for credential signups.
//! - `created_at`: audit timestamp.
//!
//! ## [`UserInfo`]
//!
//! The public identity subset `{id, email, name}`. It is what signup returns,
//! what sign-in writes into the session and what `/api/auth/session` reports.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record.
#[cfg(feature = "server")]
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub password_hash: Option<String>,
    pub provider: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

/// Body of `GET /api/auth/session` for a signed-in request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionInfo {
    pub user: UserInfo,
}
