//! HTTP backend abstraction.
//!
//! The client is generic over [`HttpBackend`] so tests can substitute a
//! canned backend for the network.

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::config::NoticesClientConfig;
use crate::error::{NoticesError, NoticesResult};

/// Trait for HTTP backends that fetch a response body as text.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET `url` and return the body. Non-2xx statuses are errors.
    async fn get_text(&self, url: &Url) -> NoticesResult<String>;
}

/// Production HTTP backend using reqwest.
///
/// Single attempt per request; the caller decides what a failure means.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(config: &NoticesClientConfig) -> NoticesResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| NoticesError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_text(&self, url: &Url) -> NoticesResult<String> {
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NoticesError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        debug!(%url, bytes = body.len(), "Fetched notifications");
        Ok(body)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned response for the fake backend.
    #[derive(Clone)]
    pub enum CannedResponse {
        Body(String),
        Status(u16),
    }

    /// A fake HTTP backend that answers every request the same way.
    pub struct FakeBackend {
        response: CannedResponse,
        requests: AtomicUsize,
    }

    impl FakeBackend {
        pub fn with_body(body: &str) -> Self {
            Self {
                response: CannedResponse::Body(body.to_string()),
                requests: AtomicUsize::new(0),
            }
        }

        pub fn with_status(status: u16) -> Self {
            Self {
                response: CannedResponse::Status(status),
                requests: AtomicUsize::new(0),
            }
        }

        pub fn requests(&self) -> usize {
            self.requests.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_text(&self, url: &Url) -> NoticesResult<String> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                CannedResponse::Body(body) => Ok(body.clone()),
                CannedResponse::Status(status) => Err(NoticesError::RequestFailed {
                    status: *status,
                    url: url.to_string(),
                }),
            }
        }
    }
}
