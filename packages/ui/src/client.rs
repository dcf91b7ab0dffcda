//! # HTTP client for `/api/auth`
//!
//! Thin wrappers over the auth endpoints. In the browser requests go to the
//! page's own origin so the session cookie travels with them; elsewhere they
//! go to [`DEFAULT_ORIGIN`].

use api::models::{CredentialsRequest, FieldError};
use api::{ProviderInfo, SessionInfo, SignUpRequest, UserInfo};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    #[error("Could not reach the server: {0}")]
    Network(String),
    #[error("{message}")]
    Rejected {
        status: u16,
        message: String,
        details: Vec<FieldError>,
    },
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Rejected { status, .. } => Some(*status),
            ClientError::Network(_) => None,
        }
    }

    /// Message for one form field, if the server reported one.
    pub fn field_message(&self, field: &str) -> Option<&str> {
        match self {
            ClientError::Rejected { details, .. } => details
                .iter()
                .find(|d| d.field == field)
                .map(|d| d.message.as_str()),
            ClientError::Network(_) => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Network(e.to_string())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    details: Vec<FieldError>,
}

#[derive(Deserialize)]
struct SignUpResponse {
    user: UserInfo,
}

#[derive(Deserialize)]
struct SignOutResponse {
    url: String,
}

fn origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }
    DEFAULT_ORIGIN.to_string()
}

fn endpoint(path: &str) -> String {
    format!("{}/api/auth{}", origin(), path)
}

async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.json::<ErrorBody>().await.unwrap_or(ErrorBody {
        error: status.to_string(),
        details: Vec::new(),
    });
    Err(ClientError::Rejected {
        status: status.as_u16(),
        message: body.error,
        details: body.details,
    })
}

/// The signed-in identity, if any.
pub async fn fetch_session() -> Result<Option<UserInfo>, ClientError> {
    let response = reqwest::get(endpoint("/session")).await?;
    let session: Option<SessionInfo> = parse(response).await?;
    Ok(session.map(|s| s.user))
}

pub async fn sign_up(request: &SignUpRequest) -> Result<UserInfo, ClientError> {
    let response = reqwest::Client::new()
        .post(endpoint("/signup"))
        .json(request)
        .send()
        .await?;
    let body: SignUpResponse = parse(response).await?;
    Ok(body.user)
}

pub async fn sign_in(email: String, password: String) -> Result<UserInfo, ClientError> {
    let response = reqwest::Client::new()
        .post(endpoint("/callback/credentials"))
        .json(&CredentialsRequest { email, password })
        .send()
        .await?;
    let session: SessionInfo = parse(response).await?;
    Ok(session.user)
}

/// Clear the session. Returns the page to go to next.
pub async fn sign_out() -> Result<String, ClientError> {
    let response = reqwest::Client::new()
        .post(endpoint("/signout"))
        .send()
        .await?;
    let body: SignOutResponse = parse(response).await?;
    Ok(body.url)
}

pub async fn fetch_providers() -> Result<Vec<ProviderInfo>, ClientError> {
    let response = reqwest::get(endpoint("/providers")).await?;
    parse(response).await
}

/// A query parameter of the current page URL, percent-decoded.
pub fn query_param(name: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let href = web_sys::window()?.location().href().ok()?;
        url_param(&href, name)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = name;
        None
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn url_param(href: &str, name: &str) -> Option<String> {
    reqwest::Url::parse(href)
        .ok()?
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_message() {
        let error = ClientError::Rejected {
            status: 400,
            message: "Validation failed".to_string(),
            details: vec![FieldError {
                field: "email".to_string(),
                message: "Invalid email address".to_string(),
            }],
        };
        assert_eq!(error.status(), Some(400));
        assert_eq!(error.field_message("email"), Some("Invalid email address"));
        assert_eq!(error.field_message("password"), None);
        assert_eq!(error.to_string(), "Validation failed");
    }

    #[test]
    fn test_endpoint_outside_browser() {
        assert_eq!(
            endpoint("/session"),
            "http://localhost:8080/api/auth/session"
        );
    }

    #[test]
    fn test_url_param_decodes() {
        let href = "http://localhost:8080/auth/signin?next=%2Fprofile&error=OAuth%20Callback&x=a+b";
        assert_eq!(url_param(href, "error").as_deref(), Some("OAuth Callback"));
        assert_eq!(url_param(href, "next").as_deref(), Some("/profile"));
        assert_eq!(url_param(href, "x").as_deref(), Some("a b"));
        assert!(url_param(href, "missing").is_none());
        assert!(url_param("not a url", "error").is_none());
    }
}
