//! Path utilities for appforge data directories.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O
//! - Environment overrides take precedence over platform defaults

mod error;
mod platform;
mod resolver;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::PathError;
pub use platform::{CACHE_FILE_NAME, DATA_DIR_ENV, cache_path, data_root};
pub use resolver::ResolvedPaths;
