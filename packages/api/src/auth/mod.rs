//! Authentication: credential sign-in, OAuth providers, sessions, password hashing.

mod apple;
mod config;
mod credentials;
mod google;
mod oauth;
mod password;
mod session;

pub use apple::AppleOAuth;
pub use config::{callback_path, OAuthConfig, Provider};
pub use credentials::authorize;
pub use google::GoogleOAuth;
pub use oauth::{sign_in_with_profile, CallbackParams, OAuthProfile, PendingAuthorizations};
pub use password::{hash_password, verify_password, PasswordError};
pub use session::{current_user, sign_in, sign_out, SESSION_USER_KEY};
