use serde::{Deserialize, Serialize};

/// One entry of `GET /api/auth/providers`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
    /// `"credentials"` or `"oauth"`.
    pub r#type: String,
    pub signin_url: String,
    pub callback_url: String,
}

impl ProviderInfo {
    pub fn is_oauth(&self) -> bool {
        self.r#type == "oauth"
    }
}
