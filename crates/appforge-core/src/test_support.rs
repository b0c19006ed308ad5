//! Shared fakes for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::{CacheEntry, CacheError, CacheStore};

/// In-memory `CacheStore` for tests.
#[derive(Default)]
pub struct FakeCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl FakeCache {
    /// A cache pre-seeded with one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let cache = Self::default();
        cache.set(key, value).unwrap();
        cache
    }
}

impl CacheStore for FakeCache {
    fn get_entry(&self, key: &str) -> Result<Option<CacheEntry>, CacheError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set_entry(&self, key: &str, entry: CacheEntry) -> Result<(), CacheError> {
        self.entries.lock().unwrap().insert(key.to_string(), entry);
        Ok(())
    }
}
