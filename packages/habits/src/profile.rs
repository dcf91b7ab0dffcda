//! Profile header data for the signed-in viewer.

use serde::{Deserialize, Serialize};

const DEFAULT_BIO: &str = "Building better habits one day at a time 🌅";
const DEFAULT_AVATAR: &str = "/diverse-group.png";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub name: String,
    pub username: String,
    pub bio: String,
    pub avatar: Option<String>,
    pub streak_count: u32,
    pub circles_count: u32,
    pub upcoming_tasks: u32,
}

impl ProfileSummary {
    /// Build the header from whatever the session knows about the viewer.
    ///
    /// The name falls back to `"User"`, the username to the local part of the
    /// email (or `"user"`). Counters are placeholders until habits are stored.
    pub fn for_viewer(name: Option<&str>, email: Option<&str>) -> Self {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("User")
            .to_string();
        let username = email
            .and_then(|e| e.split('@').next())
            .filter(|local| !local.is_empty())
            .unwrap_or("user")
            .to_string();

        Self {
            name,
            username,
            bio: DEFAULT_BIO.to_string(),
            avatar: Some(DEFAULT_AVATAR.to_string()),
            streak_count: 12,
            circles_count: 3,
            upcoming_tasks: 2,
        }
    }

    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_session_identity() {
        let profile = ProfileSummary::for_viewer(Some("Ada Lovelace"), Some("ada@example.com"));
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.username, "ada");
        assert_eq!(profile.initial(), "A");
    }

    #[test]
    fn test_anonymous_fallbacks() {
        let profile = ProfileSummary::for_viewer(None, None);
        assert_eq!(profile.name, "User");
        assert_eq!(profile.username, "user");

        let blank = ProfileSummary::for_viewer(Some("  "), Some("@example.com"));
        assert_eq!(blank.name, "User");
        assert_eq!(blank.username, "user");
    }
}
