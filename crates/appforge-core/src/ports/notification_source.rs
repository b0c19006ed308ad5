//! Notification source port.
//!
//! Supplies the raw notifications document. Caching is not the source's
//! concern; the notification service wraps it in a cache-aside read.

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by notification source implementations.
#[derive(Debug, Error)]
pub enum SourcePortError {
    /// The request did not complete (DNS, TLS, timeout, connection reset).
    #[error("Network error: {message}")]
    Network { message: String },

    /// The server answered with a non-success status.
    #[error("Notifications request failed with status {status}: {url}")]
    HttpStatus { status: u16, url: String },

    /// The response body could not be read.
    #[error("Invalid response from notifications source: {message}")]
    InvalidResponse { message: String },

    /// The source is misconfigured (bad URL, client construction failed).
    #[error("Notifications source configuration error: {message}")]
    Configuration { message: String },
}

/// Port for fetching the raw notifications document.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationSourcePort: Send + Sync {
    /// The URL the document is fetched from. Part of the cache key.
    fn source_url(&self) -> String;

    /// Fetch the raw document text.
    async fn fetch_raw(&self) -> Result<String, SourcePortError>;
}
