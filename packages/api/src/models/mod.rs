//! Data models shared by the server and the client.

mod forms;
mod provider;
mod user;

pub use forms::{
    is_valid_email, normalize_email, CredentialsRequest, FieldError, SignUpRequest,
    MIN_PASSWORD_LEN,
};
pub use provider::ProviderInfo;
#[cfg(feature = "server")]
pub use user::User;
pub use user::{SessionInfo, UserInfo};
