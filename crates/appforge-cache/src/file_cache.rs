//! JSON file cache.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use appforge_core::{CacheEntry, CacheError, CacheStore, PathError, cache_path};
use tracing::{debug, warn};

type CacheMap = BTreeMap<String, CacheEntry>;

/// Durable cache stored as one JSON object keyed by cache key.
///
/// No state is held in memory between calls; every `get_entry` reads the
/// file and every `set_entry` rewrites it.
#[derive(Debug, Clone)]
pub struct FileCache {
    path: PathBuf,
}

impl FileCache {
    /// Use the cache file at `path`. The file and its parent directory are
    /// created on first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use the cache file in the appforge data directory.
    pub fn default_location() -> Result<Self, PathError> {
        Ok(Self::open(cache_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, err: &io::Error) -> CacheError {
        CacheError::Io {
            path: self.path.clone(),
            reason: err.to_string(),
        }
    }

    fn load(&self) -> Result<CacheMap, CacheError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(CacheMap::new()),
            Err(e) => return Err(self.io_error(&e)),
        };

        if content.trim().is_empty() {
            return Ok(CacheMap::new());
        }

        match serde_json::from_str(&content) {
            Ok(map) => Ok(map),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Cache file is corrupt, ignoring it");
                Ok(CacheMap::new())
            }
        }
    }

    /// Write `map` to a sibling temp file, then rename it over the cache.
    fn store(&self, map: &CacheMap) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(&e))?;
            }
        }

        let json =
            serde_json::to_string_pretty(map).map_err(|e| CacheError::Serialization(e.to_string()))?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, json).map_err(|e| self.io_error(&e))?;
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(self.io_error(&e));
        }
        Ok(())
    }

    // Per-process name so two writers never share a temp file.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(format!(".{}.tmp", std::process::id()));
        self.path.with_file_name(name)
    }
}

impl CacheStore for FileCache {
    fn get_entry(&self, key: &str) -> Result<Option<CacheEntry>, CacheError> {
        Ok(self.load()?.remove(key))
    }

    fn set_entry(&self, key: &str, entry: CacheEntry) -> Result<(), CacheError> {
        let mut map = self.load()?;
        map.insert(key.to_string(), entry);
        self.store(&map)?;
        debug!(%key, path = %self.path.display(), "Cache entry written");
        Ok(())
    }
}
