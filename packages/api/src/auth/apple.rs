//! # Sign in with Apple
//!
//! Apple has no userinfo endpoint. The profile is read from two places:
//!
//! - the claims of the `id_token` returned by the token endpoint (`sub`,
//!   `email`). The token arrives directly from Apple over TLS in the code
//!   exchange, so its payload is decoded without a signature check;
//! - the `user` form field Apple posts to the callback, which carries the
//!   user's name on the very first authorization and never again.
//!
//! Because `name` and `email` scopes are requested, Apple insists on
//! `response_mode=form_post`: the callback is a cross-site `POST`.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Deserialize;

use super::config::OAuthConfig;
use super::oauth::{
    authorization_url, exchange_code, AuthorizeOptions, CallbackParams, OAuthProfile,
    PendingAuthorizations,
};
use crate::error::OAuthError;
use crate::settings::Settings;

#[derive(Debug, Deserialize)]
struct IdTokenClaims {
    #[allow(dead_code)]
    sub: String,
    email: Option<String>,
    #[serde(default)]
    email_verified: Option<Flag>,
}

/// Apple sends boolean claims either as JSON booleans or as `"true"`/`"false"`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    fn is_true(&self) -> bool {
        match self {
            Flag::Bool(b) => *b,
            Flag::Text(s) => s == "true",
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppleName {
    first_name: Option<String>,
    last_name: Option<String>,
}

/// The `user` form field.
#[derive(Debug, Deserialize)]
struct AppleUser {
    name: Option<AppleName>,
}

/// Apple OAuth handler.
pub struct AppleOAuth {
    config: OAuthConfig,
}

impl AppleOAuth {
    pub fn new(settings: &Settings) -> Result<Self, OAuthError> {
        let config = OAuthConfig::apple(settings)?;
        Ok(Self { config })
    }

    pub async fn generate_auth_url(&self, pending: &PendingAuthorizations) -> String {
        authorization_url(
            &self.config,
            pending,
            AuthorizeOptions {
                scopes: &["name", "email"],
                pkce: false,
                extra_params: &[("response_mode", "form_post")],
            },
        )
        .await
    }

    pub async fn exchange_code(
        &self,
        pending: &PendingAuthorizations,
        params: &CallbackParams,
    ) -> Result<OAuthProfile, OAuthError> {
        let token = exchange_code(&self.config, pending, params).await?;
        let id_token = token
            .extra_fields()
            .id_token
            .as_deref()
            .ok_or_else(|| OAuthError::Profile("token response has no id_token".to_string()))?;

        let claims = decode_claims(id_token)?;
        let email = claims
            .email
            .ok_or_else(|| OAuthError::Profile("id_token has no email".to_string()))?;

        Ok(OAuthProfile {
            email,
            name: params.user.as_deref().and_then(display_name),
            email_verified: claims.email_verified.as_ref().is_some_and(Flag::is_true),
        })
    }
}

fn decode_claims(id_token: &str) -> Result<IdTokenClaims, OAuthError> {
    let payload = id_token
        .split('.')
        .nth(1)
        .ok_or_else(|| OAuthError::Profile("malformed id_token".to_string()))?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| OAuthError::Profile(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| OAuthError::Profile(e.to_string()))
}

/// "First Last" from the `user` form field, if it names anyone.
fn display_name(user_json: &str) -> Option<String> {
    let user: AppleUser = serde_json::from_str(user_json).ok()?;
    let name = user.name?;
    let full = [name.first_name, name.last_name]
        .into_iter()
        .flatten()
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!full.is_empty()).then_some(full)
}
