use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace `path` with `contents` so readers see either the old file or the new one.
///
/// The data goes to a temporary file in the same directory, is flushed and
/// synced, and is then renamed over `path`. If anything fails before the
/// rename the temporary file is removed when it drops and `path` is untouched.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The temporary file cannot be created, written or synced
/// - The final rename fails
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory: {}", parent.display()))?;

    let mut tmp = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temporary file in {}", parent.display()))?;
    tmp.write_all(contents)
        .context("Failed to write temporary file")?;
    tmp.flush().context("Failed to flush temporary file")?;
    tmp.as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "atomically replaced file");
    Ok(())
}
