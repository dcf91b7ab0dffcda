//! Errors returned by the auth routes and how they map onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::models::FieldError;

/// Sign-in and session failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Deliberately vague: covers unknown email, wrong password and bad input.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Session error: {0}")]
    Session(String),
}

impl From<tower_sessions::session::Error> for AuthError {
    fn from(e: tower_sessions::session::Error) -> Self {
        AuthError::Session(e.to_string())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Invalid credentials" })),
            )
                .into_response(),
            AuthError::Session(ref e) => {
                error!("session failure: {}", e);
                internal_error()
            }
        }
    }
}

/// `POST /api/auth/signup` failures.
#[derive(Error, Debug)]
pub enum SignupError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("User with this email already exists")]
    Conflict,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        match self {
            SignupError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Validation failed", "details": details })),
            )
                .into_response(),
            SignupError::Conflict => (
                StatusCode::CONFLICT,
                Json(json!({ "error": "User with this email already exists" })),
            )
                .into_response(),
            SignupError::Internal(ref e) => {
                error!("signup failed: {}", e);
                internal_error()
            }
        }
    }
}

/// OAuth flow failures. These never become JSON; the callback redirects
/// back to the sign-in page with [`OAuthError::code`] in the query string.
#[derive(Error, Debug)]
pub enum OAuthError {
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("{0} sign-in is not configured")]
    NotConfigured(&'static str),

    #[error("Invalid or expired OAuth state")]
    InvalidState,

    #[error("Provider denied access: {0}")]
    Denied(String),

    #[error("Callback is missing {0}")]
    MissingParameter(&'static str),

    #[error("Token exchange failed: {0}")]
    Exchange(String),

    #[error("Failed to read profile: {0}")]
    Profile(String),

    #[error("Invalid URL: {0}")]
    Url(String),
}

impl OAuthError {
    /// Error code passed to the sign-in page.
    pub fn code(&self) -> &'static str {
        match self {
            OAuthError::UnknownProvider(_) | OAuthError::Url(_) => "OAuthSignin",
            OAuthError::NotConfigured(_) => "Configuration",
            OAuthError::Denied(_) => "AccessDenied",
            OAuthError::InvalidState
            | OAuthError::MissingParameter(_)
            | OAuthError::Exchange(_)
            | OAuthError::Profile(_) => "OAuthCallback",
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
        .into_response()
}
