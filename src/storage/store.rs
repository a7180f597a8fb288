use super::HashStore;
use super::codec::{self, ParsedStore};
use crate::error::ConfigError;
use crate::utils::atomic::write_atomic;
use anyhow::{Context, Result};
use std::path::Path;

/// File name of the trusted snapshot inside the data directory.
pub const BASELINE_FILE: &str = "baseline";
/// File name of the most recent scan inside the data directory.
pub const LAST_SCAN_FILE: &str = "last_scan";

/// Write `store` to `path`, replacing any previous file atomically.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(path: &Path, store: &HashStore) -> Result<()> {
    let text = codec::encode(store);
    write_atomic(path, text.as_bytes())
        .with_context(|| format!("Failed to save hash store: {}", path.display()))
}

/// Read and parse the store at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::StoreNotFound`] if the file does not exist, or an
/// I/O error if it cannot be read.
pub fn load(path: &Path) -> Result<ParsedStore> {
    if !path.exists() {
        return Err(ConfigError::StoreNotFound(path.to_path_buf()).into());
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read hash store: {}", path.display()))?;
    Ok(codec::decode(&text))
}
