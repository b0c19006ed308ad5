use std::sync::atomic::{AtomicUsize, Ordering};

use appforge_core::{NotificationSourcePort, SourcePortError};
use async_trait::async_trait;

pub const URL: &str = "https://example.com/notifications.json";

/// Source that always answers with the same document.
pub struct StaticSource {
    body: Option<String>,
    fetches: AtomicUsize,
}

impl StaticSource {
    pub fn new(body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn offline() -> Self {
        Self {
            body: None,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotificationSourcePort for StaticSource {
    fn source_url(&self) -> String {
        URL.to_string()
    }

    async fn fetch_raw(&self) -> Result<String, SourcePortError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.body.clone().ok_or_else(|| SourcePortError::Network {
            message: "offline".to_string(),
        })
    }
}
