//! `NotificationSourcePort` implementation for `NoticesClient`.

use appforge_core::{NotificationSourcePort, SourcePortError};
use async_trait::async_trait;

use crate::client::NoticesClient;
use crate::error::NoticesError;
use crate::http::HttpBackend;

/// Convert internal `NoticesError` to core `SourcePortError`.
fn map_error(err: NoticesError) -> SourcePortError {
    match err {
        NoticesError::RequestFailed { status, url } => SourcePortError::HttpStatus { status, url },
        NoticesError::Network(e) if e.is_decode() || e.is_body() => {
            SourcePortError::InvalidResponse {
                message: e.to_string(),
            }
        }
        NoticesError::Network(e) => SourcePortError::Network {
            message: e.to_string(),
        },
        NoticesError::InvalidUrl(e) => SourcePortError::Configuration {
            message: e.to_string(),
        },
        NoticesError::ClientBuild { message } => SourcePortError::Configuration { message },
    }
}

#[async_trait]
impl<B: HttpBackend> NotificationSourcePort for NoticesClient<B> {
    fn source_url(&self) -> String {
        self.url.to_string()
    }

    async fn fetch_raw(&self) -> Result<String, SourcePortError> {
        self.fetch_document().await.map_err(map_error)
    }
}
