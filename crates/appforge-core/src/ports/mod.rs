//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No HTTP client or file-format types in any signature
//! - The cache port is synchronous: it is local disk, and the engine runs to
//!   completion within one invocation
//! - The source port is async: it is the one network boundary

pub mod cache;
pub mod notification_source;
pub mod presenter;

use thiserror::Error;

pub use cache::{CacheEntry, CacheError, CacheStore};
pub use notification_source::{NotificationSourcePort, SourcePortError};
pub use presenter::NotificationPresenter;

use crate::domain::NotificationError;
use crate::paths::PathError;

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes, messages).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Notification loading or presentation failed.
    #[error(transparent)]
    Notification(#[from] NotificationError),

    /// Cache operation failed.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// Path resolution failed.
    #[error(transparent)]
    Path(#[from] PathError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}
