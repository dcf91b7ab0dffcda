//! This crate contains all shared UI for the workspace.

pub mod client;
pub mod components;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, SignOutButton};

mod theme;
pub use theme::GLOBAL_CSS;

pub use components::{DailyPostCard, DateRibbon, NavigationTabs, UserProfileHeader};
