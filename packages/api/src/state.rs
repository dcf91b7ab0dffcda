use std::sync::Arc;

use crate::auth::PendingAuthorizations;
use crate::db::UserDirectory;
use crate::settings::Settings;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub users: UserDirectory,
    pub pending: PendingAuthorizations,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
            users: UserDirectory::new(),
            pending: PendingAuthorizations::new(),
        }
    }
}
