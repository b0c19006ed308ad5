//! Internal error types for notification fetches.
//!
//! Mapped to `SourcePortError` at the port boundary.

use thiserror::Error;

/// Result type alias for notifications client operations.
pub type NoticesResult<T> = Result<T, NoticesError>;

#[derive(Debug, Error)]
pub enum NoticesError {
    /// The server answered with a non-success status.
    #[error("Notifications request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {message}")]
    ClientBuild { message: String },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The configured URL is not a valid absolute URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
