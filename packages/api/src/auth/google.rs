//! # Google OAuth 2.0
//!
//! Authorization Code flow with PKCE, requesting the `openid`, `email` and
//! `profile` scopes. After the code exchange the profile comes from the
//! userinfo endpoint (`googleapis.com/oauth2/v2/userinfo`).

use oauth2::TokenResponse;
use reqwest::Client;
use serde::Deserialize;

use super::config::OAuthConfig;
use super::oauth::{
    authorization_url, exchange_code, AuthorizeOptions, CallbackParams, OAuthProfile,
    PendingAuthorizations,
};
use crate::error::OAuthError;
use crate::settings::Settings;

const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Google user info from API.
#[derive(Debug, Deserialize)]
struct GoogleUser {
    email: String,
    name: Option<String>,
    #[serde(default)]
    verified_email: bool,
}

impl From<GoogleUser> for OAuthProfile {
    fn from(user: GoogleUser) -> Self {
        OAuthProfile {
            email: user.email,
            name: user.name,
            email_verified: user.verified_email,
        }
    }
}

/// Google OAuth handler.
pub struct GoogleOAuth {
    config: OAuthConfig,
}

impl GoogleOAuth {
    pub fn new(settings: &Settings) -> Result<Self, OAuthError> {
        let config = OAuthConfig::google(settings)?;
        Ok(Self { config })
    }

    /// Generate authorization URL with PKCE.
    pub async fn generate_auth_url(&self, pending: &PendingAuthorizations) -> String {
        authorization_url(
            &self.config,
            pending,
            AuthorizeOptions {
                scopes: &["openid", "email", "profile"],
                pkce: true,
                extra_params: &[],
            },
        )
        .await
    }

    /// Exchange the callback code for tokens and fetch the user's profile.
    pub async fn exchange_code(
        &self,
        pending: &PendingAuthorizations,
        params: &CallbackParams,
    ) -> Result<OAuthProfile, OAuthError> {
        let token = exchange_code(&self.config, pending, params).await?;
        let access_token = token.access_token().secret();

        let google_user: GoogleUser = Client::new()
            .get(USERINFO_URL)
            .bearer_auth(access_token)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| OAuthError::Profile(e.to_string()))?
            .json()
            .await
            .map_err(|e| OAuthError::Profile(e.to_string()))?;

        Ok(google_user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_userinfo_verification() {
        let verified: GoogleUser = serde_json::from_str(
            r#"{"id":"1","email":"ada@example.com","verified_email":true,"name":"Ada"}"#,
        )
        .unwrap();
        let profile = OAuthProfile::from(verified);
        assert!(profile.email_verified);
        assert_eq!(profile.name.as_deref(), Some("Ada"));

        let unverified: GoogleUser = serde_json::from_str(
            r#"{"id":"2","email":"victim@example.com","verified_email":false}"#,
        )
        .unwrap();
        assert!(!OAuthProfile::from(unverified).email_verified);

        let missing: GoogleUser =
            serde_json::from_str(r#"{"id":"3","email":"eve@example.com"}"#).unwrap();
        assert!(!OAuthProfile::from(missing).email_verified);
    }
}
