//! # Habits: client-side domain state for Morning Accountability
//!
//! Everything the feed, profile and onboarding screens need to render and
//! mutate locally. Nothing in this crate talks to the network or persists
//! anything; it is shared by the `ui` crate and compiles for WASM.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`post`] | Daily posts, the `planned → happening → completed` lifecycle, proof |
//! | [`ribbon`] | The seven-day date ribbon above the feed |
//! | [`tabs`] | Bottom navigation tabs |
//! | [`profile`] | Profile header summary derived from the signed-in viewer |
//! | [`onboarding`] | The four-step account setup wizard |
//! | [`feed`] | Compiled-in sample posts |

pub mod feed;
pub mod onboarding;
pub mod post;
pub mod profile;
pub mod ribbon;
pub mod tabs;

pub use feed::sample_feed;
pub use onboarding::{HabitOption, Onboarding, OnboardingError, OnboardingStep, HABIT_OPTIONS};
pub use post::{Post, PostAuthor, PostStatus, Proof, ProofError, ProofKind};
pub use profile::ProfileSummary;
pub use ribbon::{RibbonDay, WeekRibbon};
pub use tabs::Tab;
