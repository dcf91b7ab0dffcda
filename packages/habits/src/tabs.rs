use serde::{Deserialize, Serialize};

/// Bottom navigation tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Feed,
    Explore,
    Circles,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Feed, Tab::Explore, Tab::Circles, Tab::Profile];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Feed => "feed",
            Tab::Explore => "explore",
            Tab::Circles => "circles",
            Tab::Profile => "profile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Feed => "Feed",
            Tab::Explore => "Explore",
            Tab::Circles => "Circles",
            Tab::Profile => "Profile",
        }
    }

    /// Placeholder for tabs that have no content yet.
    pub fn placeholder(self) -> Option<String> {
        match self {
            Tab::Feed | Tab::Profile => None,
            other => Some(format!("{} coming soon!", other.label())),
        }
    }
}
