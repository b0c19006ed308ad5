//! Errors raised while loading, filtering and presenting notifications.

use thiserror::Error;

use crate::ports::{CacheError, SourcePortError};

/// Errors from the notifications subsystem.
///
/// None of these are fatal to the command that triggered the check; the
/// call site logs them and carries on.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The notifications document (or one record in it) is not valid JSON
    /// for the expected shape.
    #[error("Failed to parse notifications: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record has an empty identifier.
    #[error("Notification record has an empty id")]
    MissingId,

    /// A record carries a frequency outside the known set.
    #[error("Unrecognized notification frequency '{value}'")]
    InvalidFrequency {
        /// The offending value as it appeared in the document
        value: String,
    },

    /// A version bound could not be parsed as a semantic version.
    #[error("Invalid version bound '{value}'")]
    InvalidVersion {
        /// The offending value
        value: String,
    },

    /// A date bound is neither `YYYY-MM-DD` nor an RFC 3339 timestamp.
    #[error("Invalid date bound '{value}'")]
    InvalidDate {
        /// The offending value
        value: String,
    },

    /// Fetching the document from the remote source failed.
    #[error(transparent)]
    Source(#[from] SourcePortError),

    /// Reading or writing the durable cache failed.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// Writing a notification to the terminal failed.
    #[error("Failed to render notification: {0}")]
    Render(#[from] std::io::Error),
}
