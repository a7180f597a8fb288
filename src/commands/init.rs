use crate::FimContext;
use crate::storage::{HashStore, store};
use anyhow::{Context, Result};
use std::path::Path;

/// Hash every path in the list and record the result as the new baseline
///
/// The baseline is replaced unconditionally, and the same store is written to
/// the last scan so a following `check` starts from a clean state. When the
/// default list is used and does not exist yet, it is created first.
///
/// # Errors
///
/// Returns an error if:
/// - The list file does not exist (and is not the default list)
/// - The data or log directories cannot be created
/// - Either store cannot be written
pub fn execute(ctx: &FimContext, list_path: &Path) -> Result<HashStore> {
    ctx.ensure_dirs()?;
    super::ensure_default_list(ctx, list_path)?;

    let scanned = super::scan(ctx, list_path)?;

    let baseline = ctx.baseline_path();
    store::save(&baseline, &scanned).context("Failed to save baseline")?;
    store::save(&ctx.last_scan_path(), &scanned).context("Failed to save last scan")?;

    super::log_event(ctx, &format!("Baseline created: {}", baseline.display()))?;
    super::log_event(ctx, &format!("List used: {}", list_path.display()))?;

    Ok(scanned)
}
