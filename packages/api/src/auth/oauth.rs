//! # Shared OAuth 2.0 machinery
//!
//! Both providers run the Authorization Code flow with the same steps; only
//! the way the user's profile is obtained differs (see [`super::google`] and
//! [`super::apple`]).
//!
//! 1. **Start**: [`authorization_url`] builds the provider URL with a random
//!    CSRF `state` (plus a PKCE S256 challenge where the provider supports it)
//!    and records the state in [`PendingAuthorizations`] for ten minutes.
//! 2. **Callback**: [`exchange_code`] consumes the pending state exactly once
//!    (unknown, expired or cross-provider states are rejected), then trades
//!    the code for tokens. The token response keeps the OpenID `id_token`.
//! 3. **Sign-in**: [`sign_in_with_profile`] applies the OAuth sign-in rule:
//!    refuse addresses the provider has not verified, then look the user up
//!    by email and create a provider-tagged record if there is none.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use oauth2::basic::{
    BasicErrorResponse, BasicRevocationErrorResponse, BasicTokenIntrospectionResponse,
    BasicTokenType,
};
use oauth2::{
    AuthorizationCode, CsrfToken, EndpointNotSet, EndpointSet, ExtraTokenFields,
    PkceCodeChallenge, PkceCodeVerifier, Scope, StandardRevocableToken, StandardTokenResponse,
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::info;

use super::config::{OAuthConfig, Provider};
use crate::db::UserDirectory;
use crate::error::OAuthError;
use crate::models::UserInfo;

/// How long a started sign-in may take before its state is rejected.
const STATE_TTL_MINUTES: i64 = 10;

/// Extra token response field returned by OpenID Connect providers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdTokenFields {
    pub id_token: Option<String>,
}

impl ExtraTokenFields for IdTokenFields {}

pub type IdTokenResponse = StandardTokenResponse<IdTokenFields, BasicTokenType>;

/// OAuth client type with auth URL and token URL set.
pub(crate) type ConfiguredClient = oauth2::Client<
    BasicErrorResponse,
    IdTokenResponse,
    BasicTokenIntrospectionResponse,
    StandardRevocableToken,
    BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

pub(crate) fn create_client(config: &OAuthConfig) -> ConfiguredClient {
    oauth2::Client::new(config.client_id.clone())
        .set_client_secret(config.client_secret.clone())
        .set_auth_uri(config.auth_url.clone())
        .set_token_uri(config.token_url.clone())
        .set_redirect_uri(config.redirect_url.clone())
        .set_auth_type(config.auth_type.clone())
}

/// What a provider tells us about the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthProfile {
    pub email: String,
    pub name: Option<String>,
    /// The provider vouches that the user controls `email`.
    pub email_verified: bool,
}

/// Query (Google) or form (Apple) parameters of the provider callback.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    /// Apple posts the user's name as JSON on the first authorization only.
    pub user: Option<String>,
}

#[derive(Debug, Clone)]
struct Pending {
    provider: Provider,
    pkce_verifier: Option<String>,
    expires_at: DateTime<Utc>,
}

/// Sign-ins that have been started but not yet called back, keyed by state.
#[derive(Clone, Debug, Default)]
pub struct PendingAuthorizations {
    inner: Arc<Mutex<HashMap<String, Pending>>>,
}

impl PendingAuthorizations {
    pub fn new() -> Self {
        Self::default()
    }

    async fn insert(&self, state: String, provider: Provider, pkce_verifier: Option<String>) {
        let now = Utc::now();
        let mut pending = self.inner.lock().await;
        pending.retain(|_, p| p.expires_at > now);
        pending.insert(
            state,
            Pending {
                provider,
                pkce_verifier,
                expires_at: now + Duration::minutes(STATE_TTL_MINUTES),
            },
        );
    }

    /// Remove the state and return its PKCE verifier.
    async fn take(&self, state: &str, provider: Provider) -> Result<Option<String>, OAuthError> {
        let pending = self
            .inner
            .lock()
            .await
            .remove(state)
            .ok_or(OAuthError::InvalidState)?;
        if pending.provider != provider || pending.expires_at <= Utc::now() {
            return Err(OAuthError::InvalidState);
        }
        Ok(pending.pkce_verifier)
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Options that differ between providers when building the authorize URL.
pub(crate) struct AuthorizeOptions<'a> {
    pub scopes: &'a [&'a str],
    pub pkce: bool,
    pub extra_params: &'a [(&'a str, &'a str)],
}

pub(crate) async fn authorization_url(
    config: &OAuthConfig,
    pending: &PendingAuthorizations,
    options: AuthorizeOptions<'_>,
) -> String {
    let client = create_client(config);

    let mut request = client.authorize_url(CsrfToken::new_random);
    for scope in options.scopes {
        request = request.add_scope(Scope::new(scope.to_string()));
    }
    for (name, value) in options.extra_params {
        request = request.add_extra_param(*name, *value);
    }

    let mut verifier = None;
    if options.pkce {
        let (challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();
        request = request.set_pkce_challenge(challenge);
        verifier = Some(pkce_verifier.secret().clone());
    }

    let (auth_url, csrf_state) = request.url();
    pending
        .insert(csrf_state.secret().clone(), config.provider, verifier)
        .await;

    auth_url.to_string()
}

/// Validate the callback and exchange its code for tokens.
pub(crate) async fn exchange_code(
    config: &OAuthConfig,
    pending: &PendingAuthorizations,
    params: &CallbackParams,
) -> Result<IdTokenResponse, OAuthError> {
    if let Some(error) = &params.error {
        return Err(OAuthError::Denied(error.clone()));
    }
    let code = params
        .code
        .as_deref()
        .ok_or(OAuthError::MissingParameter("code"))?;
    let state = params
        .state
        .as_deref()
        .ok_or(OAuthError::MissingParameter("state"))?;

    let pkce_verifier = pending.take(state, config.provider).await?;

    // Create HTTP client for token exchange
    let http_client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| OAuthError::Exchange(e.to_string()))?;

    let client = create_client(config);
    let mut request = client.exchange_code(AuthorizationCode::new(code.to_string()));
    if let Some(verifier) = pkce_verifier {
        request = request.set_pkce_verifier(PkceCodeVerifier::new(verifier));
    }

    request
        .request_async(&http_client)
        .await
        .map_err(|e| OAuthError::Exchange(e.to_string()))
}

/// OAuth sign-in rule: reuse the record registered under the profile's email,
/// or create one tagged with the provider. Unverified addresses are refused.
pub async fn sign_in_with_profile(
    users: &UserDirectory,
    provider: Provider,
    profile: OAuthProfile,
) -> Result<UserInfo, OAuthError> {
    if !profile.email_verified {
        return Err(OAuthError::Profile(format!(
            "{} has not verified {}",
            provider.name(),
            profile.email
        )));
    }

    let (user, created) = users
        .find_or_create_oauth(&profile.email, profile.name, provider.id())
        .await;
    if created {
        info!("created {} account {} for {}", provider, user.id, user.email);
    }
    Ok(user.to_info())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_state_is_single_use() {
        let pending = PendingAuthorizations::new();
        pending
            .insert("abc".to_string(), Provider::Google, Some("verifier".to_string()))
            .await;

        let verifier = pending.take("abc", Provider::Google).await.unwrap();
        assert_eq!(verifier.as_deref(), Some("verifier"));
        assert!(matches!(
            pending.take("abc", Provider::Google).await,
            Err(OAuthError::InvalidState)
        ));
    }

    #[tokio::test]
    async fn test_state_bound_to_provider() {
        let pending = PendingAuthorizations::new();
        pending.insert("abc".to_string(), Provider::Apple, None).await;
        assert!(pending.take("abc", Provider::Google).await.is_err());
        assert!(pending.is_empty().await);
    }

    #[tokio::test]
    async fn test_expired_state_rejected() {
        let pending = PendingAuthorizations::new();
        pending.inner.lock().await.insert(
            "old".to_string(),
            Pending {
                provider: Provider::Google,
                pkce_verifier: None,
                expires_at: Utc::now() - Duration::seconds(1),
            },
        );
        assert!(pending.take("old", Provider::Google).await.is_err());
    }

    #[tokio::test]
    async fn test_callback_error_is_denied() {
        let settings = crate::settings::Settings::from_toml(
            "[google.client]\nid = \"id\"\nsecret = \"secret\"",
        )
        .unwrap();
        let config = OAuthConfig::google(&settings).unwrap();
        let params = CallbackParams {
            error: Some("access_denied".to_string()),
            ..Default::default()
        };
        let err = exchange_code(&config, &PendingAuthorizations::new(), &params)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "AccessDenied");
    }

    #[tokio::test]
    async fn test_authorization_url_records_state() {
        let settings = crate::settings::Settings::from_toml(
            "[google.client]\nid = \"id\"\nsecret = \"secret\"",
        )
        .unwrap();
        let config = OAuthConfig::google(&settings).unwrap();
        let pending = PendingAuthorizations::new();

        let url = authorization_url(
            &config,
            &pending,
            AuthorizeOptions {
                scopes: &["openid", "email"],
                pkce: true,
                extra_params: &[],
            },
        )
        .await;

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(url.contains("code_challenge_method=S256"));
        assert!(url.contains("client_id=id"));
        assert_eq!(pending.len().await, 1);
    }

    #[tokio::test]
    async fn test_sign_in_with_profile_reuses_email() {
        let users = UserDirectory::new();
        users
            .create("ada@example.com", Some("Ada".to_string()), "hash".to_string())
            .await
            .unwrap();

        let info = sign_in_with_profile(
            &users,
            Provider::Google,
            OAuthProfile {
                email: "Ada@example.com".to_string(),
                name: Some("Ada L".to_string()),
                email_verified: true,
            },
        )
        .await
        .unwrap();

        assert_eq!(info.name.as_deref(), Some("Ada"));
        assert_eq!(users.len().await, 1);
    }

    #[tokio::test]
    async fn test_unverified_email_refused() {
        let users = UserDirectory::new();
        users
            .create("ada@example.com", Some("Ada".to_string()), "hash".to_string())
            .await
            .unwrap();

        let err = sign_in_with_profile(
            &users,
            Provider::Google,
            OAuthProfile {
                email: "ada@example.com".to_string(),
                name: None,
                email_verified: false,
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.code(), "OAuthCallback");
        assert_eq!(users.len().await, 1);

        let err = sign_in_with_profile(
            &users,
            Provider::Apple,
            OAuthProfile {
                email: "new@example.com".to_string(),
                name: None,
                email_verified: false,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, OAuthError::Profile(_)));
        assert!(users.find_by_email("new@example.com").await.is_none());
    }
}
