//! # Database module: the process-lifetime user directory
//!
//! Users live in memory for as long as the server process runs. Nothing is
//! written to durable storage and nothing is ever deleted.
//!
//! ## Design
//!
//! [`UserDirectory`] is a cheaply clonable handle around an
//! `Arc<RwLock<HashMap<email, User>>>`. Every handler gets a clone through the
//! axum state. Inserting a user checks for an existing email while holding the
//! write lock, so two concurrent signups for the same address cannot both
//! succeed.
//!
//! ## Re-exports
//!
//! - [`UserDirectory`]: lookup by email or id, insert-if-absent, find-or-create.
//! - [`DirectoryError`]: the duplicate-email failure.

mod users;

pub use users::{DirectoryError, UserDirectory};
