//! Paths command handler.

use anyhow::Result;

use appforge_core::ResolvedPaths;

/// Print the data directory and cache file in `key = value` format.
pub fn execute() -> Result<()> {
    let paths = ResolvedPaths::resolve()?;
    println!("{paths}");
    Ok(())
}
