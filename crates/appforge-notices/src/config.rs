//! Public configuration for the notifications client.

use std::time::Duration;

/// Where the notifications document lives unless configured otherwise.
pub const DEFAULT_NOTIFICATIONS_URL: &str =
    "https://raw.githubusercontent.com/appforge/cli/notifications/notifications.json";

/// Configuration for the notifications client.
///
/// # Example
///
/// ```
/// use appforge_notices::NoticesClientConfig;
/// use std::time::Duration;
///
/// let config = NoticesClientConfig::new()
///     .with_timeout(Duration::from_secs(3))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct NoticesClientConfig {
    /// URL of the notifications document
    pub(crate) url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl Default for NoticesClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_NOTIFICATIONS_URL.to_string(),
            user_agent: concat!("appforge-notices/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl NoticesClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the URL if one is given, keeping the current one otherwise.
    #[must_use]
    pub fn with_optional_url(self, url: Option<String>) -> Self {
        match url {
            Some(url) => self.with_url(url),
            None => self,
        }
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
