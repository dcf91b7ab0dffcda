//! # Server settings
//!
//! Layered with the `config` crate, later sources overriding earlier ones:
//!
//! 1. built-in defaults,
//! 2. an optional `config.toml` in the working directory,
//! 3. environment variables, `_` separating sections from keys
//!    (`SERVER_PORT`, `AUTH_ORIGIN`, `SESSION_DAYS`, `GOOGLE_CLIENT_ID`,
//!    `GOOGLE_CLIENT_SECRET`, `APPLE_ID`, `APPLE_SECRET`).
//!
//! Google credentials live one level deeper (`[google.client]` in TOML) so
//! that the conventional `GOOGLE_CLIENT_*` variable names map onto them.
//!
//! An OAuth provider whose id or secret is empty is treated as disabled.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
    /// Directory holding the built client (index.html, assets/, wasm/).
    pub dist: String,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Auth {
    /// Public base URL; OAuth redirect URIs are built from it.
    pub origin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    /// Inactivity expiry of the session cookie, in days.
    pub days: i64,
    /// Set the `Secure` flag on the session cookie.
    pub secure: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct OAuthApp {
    pub id: String,
    pub secret: String,
}

impl OAuthApp {
    pub fn is_configured(&self) -> bool {
        !self.id.trim().is_empty() && !self.secret.trim().is_empty()
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct GoogleApp {
    #[serde(default)]
    pub client: OAuthApp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub auth: Auth,
    pub session: Session,
    #[serde(default)]
    pub google: GoogleApp,
    #[serde(default)]
    pub apple: OAuthApp,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: Server {
                host: "0.0.0.0".into(),
                port: 8080,
                dist: "dist".into(),
            },
            auth: Auth {
                origin: "http://localhost:8080".into(),
            },
            session: Session {
                days: 30,
                secure: false,
            },
            google: GoogleApp::default(),
            apple: OAuthApp::default(),
        }
    }
}

impl Settings {
    /// Load from defaults, `config.toml` and the environment.
    pub fn new() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load from defaults overlaid with a TOML document.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[cfg(test)]
    fn from_vars(vars: config::Map<String, String>) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(environment().source(Some(vars)))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = Settings::default();
        Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("server.dist", defaults.server.dist)?
            .set_default("auth.origin", defaults.auth.origin)?
            .set_default("session.days", defaults.session.days)?
            .set_default("session.secure", defaults.session.secure)?
            .set_default("google.client.id", "")?
            .set_default("google.client.secret", "")?
            .set_default("apple.id", "")?
            .set_default("apple.secret", "")
    }

    /// Origin without a trailing slash.
    pub fn origin(&self) -> &str {
        self.auth.origin.trim_end_matches('/')
    }
}

fn environment() -> Environment {
    Environment::default().separator("_")
}
