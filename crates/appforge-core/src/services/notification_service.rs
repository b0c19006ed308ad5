//! Notification service - fetch, filter, render, record.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::cache_aside::get_or_repopulate;
use crate::domain::{Notification, NotificationError, RequestContext, parse_document};
use crate::eligibility::{Eligibility, evaluate, select_eligible};
use crate::ports::{CacheError, CacheStore, NotificationPresenter, NotificationSourcePort};

/// How long a fetched notifications document is reused before refetching.
pub const NOTIFICATIONS_TTL: Duration = Duration::from_secs(24 * 3600);

/// Orchestrates the notifications subsystem over injected ports.
pub struct NotificationService {
    cache: Arc<dyn CacheStore>,
    source: Arc<dyn NotificationSourcePort>,
}

impl NotificationService {
    /// Create a new notification service.
    pub fn new(cache: Arc<dyn CacheStore>, source: Arc<dyn NotificationSourcePort>) -> Self {
        Self { cache, source }
    }

    /// Cache key under which the raw document from `url` is stored.
    pub fn document_cache_key(url: &str) -> String {
        format!("notifications-{url}")
    }

    /// Load all valid notifications, refetching the document when the
    /// cached copy is older than [`NOTIFICATIONS_TTL`].
    ///
    /// A response that is not JSON is rejected before it reaches the cache.
    pub async fn fetch_and_cache(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<Notification>, NotificationError> {
        let key = Self::document_cache_key(&self.source.source_url());

        let raw = get_or_repopulate(self.cache.as_ref(), &key, NOTIFICATIONS_TTL, now, || async {
            let body = self.source.fetch_raw().await?;
            serde_json::from_str::<serde_json::Value>(&body)?;
            debug!(bytes = body.len(), "Fetched notifications document");
            Ok::<_, NotificationError>(body)
        })
        .await?;

        parse_document(&raw)
    }

    /// Notifications eligible for display in `ctx`, in document order.
    pub async fn eligible(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<Notification>, NotificationError> {
        let notifications = self.fetch_and_cache(ctx.now).await?;
        Ok(select_eligible(&notifications, ctx, self.cache.as_ref()))
    }

    /// Render every eligible notification and record its display time.
    ///
    /// Returns the notifications that were rendered. Eligibility is decided
    /// for the whole batch before the first timestamp is written.
    pub async fn show_if_needed(
        &self,
        ctx: &RequestContext,
        presenter: &dyn NotificationPresenter,
    ) -> Result<Vec<Notification>, NotificationError> {
        let to_show = self.eligible(ctx).await?;

        for notification in &to_show {
            presenter.render(notification)?;
            self.record_shown(notification, ctx.now)?;
        }

        if !to_show.is_empty() {
            info!(
                command_id = %ctx.command_id,
                shown = to_show.len(),
                "Displayed notifications"
            );
        }
        Ok(to_show)
    }

    /// Record that `notification` was displayed at `at`.
    pub fn record_shown(
        &self,
        notification: &Notification,
        at: DateTime<Utc>,
    ) -> Result<(), CacheError> {
        self.cache.set(
            &notification.cache_key(),
            &at.timestamp_millis().to_string(),
        )
    }

    /// Every loaded notification paired with its eligibility in `ctx`.
    ///
    /// Read-only: nothing is recorded as shown.
    pub async fn inspect(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<(Notification, Eligibility)>, NotificationError> {
        let notifications = self.fetch_and_cache(ctx.now).await?;
        let cache = self.cache.as_ref();
        Ok(notifications
            .into_iter()
            .map(|n| {
                let eligibility = evaluate(&n, ctx, cache);
                (n, eligibility)
            })
            .collect())
    }
}
