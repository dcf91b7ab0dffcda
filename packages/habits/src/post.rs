//! # Daily posts and their status lifecycle
//!
//! A [`Post`] is one habit update in the feed. Its [`PostStatus`] only ever
//! moves forward:
//!
//! ```text
//! Planned --Start--> Happening --Complete--> Completed --(no-op)--> Completed
//! ```
//!
//! Proof can be attached once the post is completed, and only once.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a habit post is in its day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Planned,
    Happening,
    Completed,
}

impl PostStatus {
    /// The next status. `Completed` stays `Completed`.
    pub fn advance(self) -> Self {
        match self {
            PostStatus::Planned => PostStatus::Happening,
            PostStatus::Happening => PostStatus::Completed,
            PostStatus::Completed => PostStatus::Completed,
        }
    }

    /// Badge text.
    pub fn label(self) -> &'static str {
        match self {
            PostStatus::Planned => "Planned",
            PostStatus::Happening => "Happening",
            PostStatus::Completed => "Completed",
        }
    }

    /// Text of the button that advances the post.
    pub fn action(self) -> &'static str {
        match self {
            PostStatus::Planned => "Start",
            PostStatus::Happening => "Complete",
            PostStatus::Completed => "Done",
        }
    }

    /// CSS class suffix used for the badge colour.
    pub fn css_class(self) -> &'static str {
        match self {
            PostStatus::Planned => "status-planned",
            PostStatus::Happening => "status-happening",
            PostStatus::Completed => "status-completed",
        }
    }

    pub fn is_completed(self) -> bool {
        self == PostStatus::Completed
    }
}

/// Kind of evidence attached to a completed post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProofKind {
    Text,
    Image,
    Video,
}

/// User-submitted evidence for a completed habit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Proof {
    pub kind: ProofKind,
    /// Text body, or a reference to the uploaded media.
    pub content: String,
}

impl Proof {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: ProofKind::Text,
            content: content.into(),
        }
    }

    /// What the card shows for this proof.
    pub fn summary(&self) -> String {
        match self.kind {
            ProofKind::Text => self.content.clone(),
            ProofKind::Image => "Image uploaded".to_string(),
            ProofKind::Video => "Video uploaded".to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProofError {
    #[error("proof can only be added to a completed post")]
    NotCompleted,
    #[error("proof has already been submitted")]
    AlreadySubmitted,
}

/// The author block shown at the top of a post card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub name: String,
    pub username: String,
    pub avatar: Option<String>,
}

impl PostAuthor {
    /// First character of the name, for the avatar fallback.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// A daily habit update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub user: PostAuthor,
    pub content: String,
    pub status: PostStatus,
    /// Display time, e.g. "8:30 AM".
    pub timestamp: String,
    pub reactions: u32,
    pub comments: u32,
    pub proof: Option<Proof>,
}

impl Post {
    /// Move the post one step forward and return the new status.
    pub fn advance_status(&mut self) -> PostStatus {
        self.status = self.status.advance();
        self.status
    }

    /// The advance button is hidden once the post is completed.
    pub fn shows_action(&self) -> bool {
        !self.status.is_completed()
    }

    pub fn can_add_proof(&self) -> bool {
        self.status.is_completed() && self.proof.is_none()
    }

    pub fn attach_proof(&mut self, proof: Proof) -> Result<(), ProofError> {
        if !self.status.is_completed() {
            return Err(ProofError::NotCompleted);
        }
        if self.proof.is_some() {
            return Err(ProofError::AlreadySubmitted);
        }
        self.proof = Some(proof);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(status: PostStatus) -> Post {
        Post {
            id: "p1".to_string(),
            user: PostAuthor {
                name: "Sarah Chen".to_string(),
                username: "sarahc".to_string(),
                avatar: None,
            },
            content: "Morning run".to_string(),
            status,
            timestamp: "8:30 AM".to_string(),
            reactions: 0,
            comments: 0,
            proof: None,
        }
    }

    #[test]
    fn test_status_only_moves_forward() {
        assert_eq!(PostStatus::Planned.advance(), PostStatus::Happening);
        assert_eq!(PostStatus::Happening.advance(), PostStatus::Completed);
        assert_eq!(PostStatus::Completed.advance(), PostStatus::Completed);
    }

    #[test]
    fn test_completed_is_idempotent() {
        let mut p = post(PostStatus::Planned);
        for _ in 0..5 {
            p.advance_status();
        }
        assert_eq!(p.status, PostStatus::Completed);
        assert!(!p.shows_action());
    }

    #[test]
    fn test_labels_and_actions() {
        assert_eq!(PostStatus::Planned.action(), "Start");
        assert_eq!(PostStatus::Happening.action(), "Complete");
        assert_eq!(PostStatus::Completed.label(), "Completed");
    }

    #[test]
    fn test_proof_requires_completion() {
        let mut p = post(PostStatus::Happening);
        assert!(!p.can_add_proof());
        assert_eq!(
            p.attach_proof(Proof::text("done")),
            Err(ProofError::NotCompleted)
        );

        p.advance_status();
        assert!(p.can_add_proof());
        p.attach_proof(Proof::text("5K in 27 minutes")).unwrap();
        assert!(!p.can_add_proof());
        assert_eq!(
            p.attach_proof(Proof::text("again")),
            Err(ProofError::AlreadySubmitted)
        );
    }

    #[test]
    fn test_proof_summary() {
        let image = Proof {
            kind: ProofKind::Image,
            content: "blob:1".to_string(),
        };
        assert_eq!(image.summary(), "Image uploaded");
        assert_eq!(Proof::text("chapter 3").summary(), "chapter 3");
    }
}
