//! Notifications document client.

use tracing::debug;
use url::Url;

use crate::config::NoticesClientConfig;
use crate::error::NoticesResult;
use crate::http::{HttpBackend, ReqwestBackend};

/// Default notifications client using the reqwest HTTP backend.
pub type DefaultNoticesClient = NoticesClient<ReqwestBackend>;

/// Fetches the notifications document from a fixed URL.
///
/// Generic over the HTTP backend for testing; production code uses
/// [`DefaultNoticesClient`] through the `NotificationSourcePort` trait.
pub struct NoticesClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) url: Url,
}

impl DefaultNoticesClient {
    /// Create a client from `config`. Fails on an invalid URL.
    pub fn new(config: &NoticesClientConfig) -> NoticesResult<Self> {
        let url = Url::parse(&config.url)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self { backend, url })
    }
}

impl<B: HttpBackend> NoticesClient<B> {
    #[cfg(test)]
    pub(crate) const fn with_backend(url: Url, backend: B) -> Self {
        Self { backend, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch the raw document body.
    pub async fn fetch_document(&self) -> NoticesResult<String> {
        debug!(url = %self.url, "Fetching notifications document");
        self.backend.get_text(&self.url).await
    }
}
