//! # API crate: authentication for Morning Accountability
//!
//! Sign-up, credential and OAuth sign-in, sessions and route gating. The
//! [`models`] are always compiled so the client can share request and response
//! types; everything else needs the `server` feature (on by default).
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`models`] | none | `UserInfo`, `SessionInfo`, sign-up / sign-in payloads and their validation, provider listing |
//! | [`auth`] | `server` | Argon2 password hashing, credential sign-in, Google and Apple OAuth, session helpers |
//! | [`db`] | `server` | The in-memory user directory |
//! | [`gate`] | `server` | Path classification and the redirecting middleware |
//! | [`routes`] | `server` | axum handlers under `/api/auth` and the assembled [`app`](routes::app) |
//! | [`settings`] | `server` | Layered configuration (defaults, `config.toml`, environment) |
//! | [`error`] | `server` | Error enums and their HTTP mapping |

pub mod models;

#[cfg(feature = "server")]
pub mod auth;
#[cfg(feature = "server")]
pub mod db;
#[cfg(feature = "server")]
pub mod error;
#[cfg(feature = "server")]
pub mod gate;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod settings;
#[cfg(feature = "server")]
mod state;

pub use models::{ProviderInfo, SessionInfo, SignUpRequest, UserInfo};

#[cfg(feature = "server")]
pub use routes::app;
#[cfg(feature = "server")]
pub use settings::Settings;
#[cfg(feature = "server")]
pub use state::AppState;

#[cfg(all(test, feature = "server"))]
mod tests;
