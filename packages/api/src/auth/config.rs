//! OAuth provider configuration built from [`Settings`].

use std::fmt;
use std::str::FromStr;

use oauth2::{AuthType, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use serde::Serialize;

use crate::error::OAuthError;
use crate::settings::{OAuthApp, Settings};

/// External identity sources a user can sign in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    Apple,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Google, Provider::Apple];

    pub fn id(self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Apple => "apple",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Provider::Google => "Google",
            Provider::Apple => "Apple",
        }
    }

    pub fn app(self, settings: &Settings) -> &OAuthApp {
        match self {
            Provider::Google => &settings.google.client,
            Provider::Apple => &settings.apple,
        }
    }

    pub fn is_configured(self, settings: &Settings) -> bool {
        self.app(settings).is_configured()
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Provider {
    type Err = OAuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(Provider::Google),
            "apple" => Ok(Provider::Apple),
            other => Err(OAuthError::UnknownProvider(other.to_string())),
        }
    }
}

/// Path the provider redirects back to.
pub fn callback_path(provider: Provider) -> String {
    format!("/api/auth/callback/{}", provider.id())
}

/// OAuth provider configuration.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub provider: Provider,
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    pub auth_url: AuthUrl,
    pub token_url: TokenUrl,
    pub redirect_url: RedirectUrl,
    pub auth_type: AuthType,
}

impl OAuthConfig {
    /// Google: client credentials sent with HTTP basic auth.
    pub fn google(settings: &Settings) -> Result<Self, OAuthError> {
        Self::build(
            Provider::Google,
            settings,
            "https://accounts.google.com/o/oauth2/v2/auth",
            "https://oauth2.googleapis.com/token",
            AuthType::BasicAuth,
        )
    }

    /// Apple: the client secret is the signed JWT from the settings, posted in
    /// the token request body.
    pub fn apple(settings: &Settings) -> Result<Self, OAuthError> {
        Self::build(
            Provider::Apple,
            settings,
            "https://appleid.apple.com/auth/authorize",
            "https://appleid.apple.com/auth/token",
            AuthType::RequestBody,
        )
    }

    fn build(
        provider: Provider,
        settings: &Settings,
        auth_url: &str,
        token_url: &str,
        auth_type: AuthType,
    ) -> Result<Self, OAuthError> {
        let app = provider.app(settings);
        if !app.is_configured() {
            return Err(OAuthError::NotConfigured(provider.name()));
        }

        let redirect = format!("{}{}", settings.origin(), callback_path(provider));

        Ok(Self {
            provider,
            client_id: ClientId::new(app.id.clone()),
            client_secret: ClientSecret::new(app.secret.clone()),
            auth_url: AuthUrl::new(auth_url.to_string()).map_err(|e| OAuthError::Url(e.to_string()))?,
            token_url: TokenUrl::new(token_url.to_string())
                .map_err(|e| OAuthError::Url(e.to_string()))?,
            redirect_url: RedirectUrl::new(redirect).map_err(|e| OAuthError::Url(e.to_string()))?,
            auth_type,
        })
    }
}
