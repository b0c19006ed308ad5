//! Durable key-value cache port.
//!
//! The cache outlives a single process: notification display timestamps must
//! survive between CLI invocations for frequency limits to hold. Concurrent
//! writers from separate processes are last-writer-wins.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored value together with the time it was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub value: String,
    /// Epoch milliseconds at which the value was stored.
    pub timestamp: i64,
}

impl CacheEntry {
    /// Create an entry stamped with `stored_at`.
    pub fn new(value: impl Into<String>, stored_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            timestamp: stored_at.timestamp_millis(),
        }
    }

    /// Milliseconds elapsed between storing this entry and `now`.
    ///
    /// Negative if the entry was stamped in the future (clock skew).
    pub fn age_ms(&self, now: DateTime<Utc>) -> i64 {
        now.timestamp_millis().saturating_sub(self.timestamp)
    }
}

/// Errors from cache backends.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Reading or writing the backing store failed.
    #[error("Cache I/O error at {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// The backing store could not be serialized.
    #[error("Cache serialization error: {0}")]
    Serialization(String),
}

/// Process-independent key-value store.
///
/// Implementations must make a `set` visible to every later `get`, including
/// `get` calls from a later process.
pub trait CacheStore: Send + Sync {
    /// Fetch the entry stored under `key`, if any.
    fn get_entry(&self, key: &str) -> Result<Option<CacheEntry>, CacheError>;

    /// Store `entry` under `key`, replacing any previous entry.
    fn set_entry(&self, key: &str, entry: CacheEntry) -> Result<(), CacheError>;

    /// Fetch only the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.get_entry(key)?.map(|entry| entry.value))
    }

    /// Store `value` under `key`, stamped with the current time.
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.set_entry(key, CacheEntry::new(value, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_age() {
        let stored = DateTime::from_timestamp_millis(1_000).unwrap();
        let entry = CacheEntry::new("v", stored);
        assert_eq!(entry.timestamp, 1_000);

        let later = DateTime::from_timestamp_millis(4_500).unwrap();
        assert_eq!(entry.age_ms(later), 3_500);

        let earlier = DateTime::from_timestamp_millis(500).unwrap();
        assert_eq!(entry.age_ms(earlier), -500);
    }

    #[test]
    fn test_entry_serializes_value_and_timestamp() {
        let entry = CacheEntry {
            value: "1704067200000".to_string(),
            timestamp: 42,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["value"], "1704067200000");
        assert_eq!(json["timestamp"], 42);
    }
}
