//! Session helpers.
//!
//! The session stores the signed-in identity under [`SESSION_USER_KEY`]. A
//! request counts as authenticated exactly when that key is present.

use tower_sessions::Session;

use crate::models::UserInfo;

/// Key for storing the signed-in user in the session.
pub const SESSION_USER_KEY: &str = "user";

/// The identity attached to this request, if any.
pub async fn current_user(session: &Session) -> Result<Option<UserInfo>, tower_sessions::session::Error> {
    session.get::<UserInfo>(SESSION_USER_KEY).await
}

/// Attach `user` to the session under a fresh session id.
pub async fn sign_in(session: &Session, user: &UserInfo) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(SESSION_USER_KEY, user).await
}

pub async fn sign_out(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}
