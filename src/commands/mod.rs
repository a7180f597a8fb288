pub mod add;
pub mod check;
pub mod init;
pub mod list;
pub mod remove;

use crate::FimContext;
use crate::storage::HashStore;
use crate::tracking::PathList;
use crate::utils::hash::hash_paths;
use anyhow::{Context, Result};
use std::path::Path;

/// Append `message` to the event log and echo the written line.
///
/// # Errors
///
/// Returns an error if the event log cannot be written.
pub fn log_event(ctx: &FimContext, message: &str) -> Result<()> {
    let line = ctx.event_log().append(message)?;
    crate::output::event(&line);
    Ok(())
}

/// Record a failed operation in the event log.
///
/// Logging failures are swallowed: the caller is already reporting an error.
pub fn log_failure(ctx: &FimContext, err: &anyhow::Error) {
    if let Err(log_err) = ctx.event_log().append(&format!("ERROR: {err:#}")) {
        tracing::warn!(error = %log_err, "could not record failure in event log");
    }
}

/// Create the default list with its seed entries when it is absent.
///
/// Only the default list is ever created implicitly; a user-supplied list
/// that does not exist is an error for the caller to report.
pub(crate) fn ensure_default_list(ctx: &FimContext, list_path: &Path) -> Result<()> {
    let list = PathList::new(list_path);
    if list.exists() || !ctx.is_default_list(list_path) {
        return Ok(());
    }

    let mut seeds = Vec::new();
    match std::env::current_exe() {
        Ok(exe) => seeds.push(("The monitor binary", exe.to_string_lossy().into_owned())),
        Err(e) => tracing::debug!(error = %e, "current executable unknown, not seeding it"),
    }
    seeds.push(("This list", list_path.to_string_lossy().into_owned()));

    list.bootstrap(&seeds)
        .with_context(|| format!("Failed to create default list: {}", list_path.display()))?;

    log_event(ctx, &format!("Created default list: {}", list_path.display()))?;
    log_event(ctx, "Edit it if needed, then run: fim init")?;
    Ok(())
}

/// Load `list_path` and hash every entry with the configured scan settings.
pub(crate) fn scan(ctx: &FimContext, list_path: &Path) -> Result<HashStore> {
    let paths = PathList::new(list_path).load(ctx.home.as_deref())?;

    let _span = tracing::debug_span!("scan", list = %list_path.display(), files = paths.len())
        .entered();
    let store = hash_paths(
        &paths,
        ctx.config.scan.chunk_size,
        ctx.config.scan.parallel,
    );

    for (path, outcome) in store.iter() {
        crate::output::verbose(&format!("{outcome}  {path}"));
    }

    let (digests, missing, errors) = store.summary();
    tracing::debug!(digests, missing, errors, "scan finished");

    Ok(store)
}
