//! Cache-aside reads with a time-to-live.

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::ports::{CacheEntry, CacheError, CacheStore};

/// Return the cached value for `key` if younger than `ttl`, otherwise run
/// `producer`, store its output stamped with `now`, and return it.
///
/// Producer errors propagate and leave the cache untouched, so a stale value
/// is never replaced by a failed fetch.
pub async fn get_or_repopulate<F, Fut, E>(
    cache: &dyn CacheStore,
    key: &str,
    ttl: Duration,
    now: DateTime<Utc>,
    producer: F,
) -> Result<String, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String, E>>,
    E: From<CacheError>,
{
    let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);

    if let Some(entry) = cache.get_entry(key)? {
        let age = entry.age_ms(now);
        if (0..ttl_ms).contains(&age) {
            debug!(%key, age_ms = age, "Cache hit");
            return Ok(entry.value);
        }
        debug!(%key, age_ms = age, "Cache entry expired");
    }

    let value = producer().await?;
    cache.set_entry(key, CacheEntry::new(value.clone(), now))?;
    Ok(value)
}
