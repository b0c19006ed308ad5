//! Platform-specific data directory resolution.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "APPFORGE_DATA_DIR";

/// File name of the durable cache inside the data directory.
pub const CACHE_FILE_NAME: &str = "cache.json";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `APPFORGE_DATA_DIR` environment variable
/// 2. System data directory (e.g., `~/.local/share/appforge`), created if missing
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(DATA_DIR_ENV) {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(PathError::EmptyPath(DATA_DIR_ENV));
        }
        return Ok(PathBuf::from(trimmed));
    }

    let root = dirs::data_local_dir()
        .ok_or(PathError::NoDataDir)?
        .join("appforge");

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}

/// Location of the durable cache file.
pub fn cache_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(CACHE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};
    use tempfile::tempdir;

    #[test]
    fn test_data_root_honours_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _env = EnvVarGuard::set(DATA_DIR_ENV, temp.path().to_string_lossy().as_ref());

        assert_eq!(data_root().unwrap(), temp.path());
        assert_eq!(cache_path().unwrap(), temp.path().join(CACHE_FILE_NAME));
    }

    #[test]
    fn test_empty_override_is_rejected() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(DATA_DIR_ENV, "  ");

        assert!(matches!(data_root(), Err(PathError::EmptyPath(_))));
    }
}
