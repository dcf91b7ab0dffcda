//! Compiled-in feed shown until posts are stored somewhere.

use crate::post::{Post, PostAuthor, PostStatus, Proof};
use crate::profile::ProfileSummary;

/// The three sample posts, the last one authored by the viewer.
pub fn sample_feed(viewer: &ProfileSummary) -> Vec<Post> {
    vec![
        Post {
            id: "1".to_string(),
            user: PostAuthor {
                name: "Sarah Chen".to_string(),
                username: "sarahc".to_string(),
                avatar: Some("/diverse-woman-portrait.png".to_string()),
            },
            content: "Morning run around the park - aiming for 5K today! 🏃‍♀️".to_string(),
            status: PostStatus::Happening,
            timestamp: "8:30 AM".to_string(),
            reactions: 12,
            comments: 3,
            proof: None,
        },
        Post {
            id: "2".to_string(),
            user: PostAuthor {
                name: "Mike Rodriguez".to_string(),
                username: "miker".to_string(),
                avatar: Some("/thoughtful-man.png".to_string()),
            },
            content: "Read 30 pages of 'Atomic Habits' before breakfast".to_string(),
            status: PostStatus::Completed,
            timestamp: "7:15 AM".to_string(),
            reactions: 8,
            comments: 1,
            proof: Some(Proof::text(
                "Finished chapter 3 - great insights on habit stacking!",
            )),
        },
        Post {
            id: "3".to_string(),
            user: PostAuthor {
                name: viewer.name.clone(),
                username: viewer.username.clone(),
                avatar: viewer.avatar.clone(),
            },
            content: "Meditation session - 15 minutes of mindfulness".to_string(),
            status: PostStatus::Planned,
            timestamp: "9:00 AM".to_string(),
            reactions: 0,
            comments: 0,
            proof: None,
        },
    ]
}
