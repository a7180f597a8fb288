use crate::FimContext;
use crate::diff::{DiffReport, Verdict, diff};
use crate::error::ConfigError;
use crate::output;
use crate::storage::{HashStore, store};
use crate::tracking::PathList;
use anyhow::{Context, Result};
use std::path::Path;

/// What a `check` found
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// The fresh scan, in list order
    pub scan: HashStore,
    /// Findings of baseline vs. fresh scan
    pub diff: DiffReport,
    /// Unparseable lines skipped across both stores
    pub malformed_lines: usize,
    /// Entries across both stores kept with a token that is not a digest or sentinel
    pub unrecognized_tokens: usize,
    /// Paths listed more than once in either store
    pub duplicate_paths: Vec<String>,
}

/// Rescan the list and report how it drifted from the baseline
///
/// The fresh scan replaces the last scan on disk before the comparison, so
/// both stores are read back through the same parser. Each finding and the
/// final verdict are written to the event log and echoed.
///
/// # Errors
///
/// Returns an error if:
/// - The list file does not exist
/// - No baseline has been created yet
/// - The last scan cannot be written or either store cannot be read
pub fn execute(ctx: &FimContext, list_path: &Path) -> Result<CheckReport> {
    if !PathList::new(list_path).exists() {
        return Err(ConfigError::ListNotFound(list_path.to_path_buf()).into());
    }
    let baseline_path = ctx.baseline_path();
    if !baseline_path.is_file() {
        return Err(ConfigError::BaselineNotFound(baseline_path).into());
    }
    ctx.ensure_dirs()?;

    let scanned = super::scan(ctx, list_path)?;
    let last_scan_path = ctx.last_scan_path();
    store::save(&last_scan_path, &scanned).context("Failed to save last scan")?;
    super::log_event(ctx, "Scan complete. Comparing with baseline...")?;

    let baseline = store::load(&baseline_path)?;
    let latest = store::load(&last_scan_path)?;

    let malformed_lines = baseline.malformed_lines + latest.malformed_lines;
    if malformed_lines > 0 {
        output::warning(&format!(
            "Skipped {malformed_lines} malformed line(s) in the hash stores"
        ));
    }

    let unrecognized_tokens = baseline.unrecognized_tokens + latest.unrecognized_tokens;
    if unrecognized_tokens > 0 {
        output::warning(&format!(
            "Kept {unrecognized_tokens} hash store entry(s) with an unrecognized token"
        ));
    }

    let mut duplicate_paths = baseline.duplicate_paths.clone();
    for path in &latest.duplicate_paths {
        if !duplicate_paths.contains(path) {
            duplicate_paths.push(path.clone());
        }
    }
    for path in &duplicate_paths {
        output::warning(&format!("Path listed more than once, last entry used: {path}"));
    }

    let report = diff(&baseline.entries, &latest.entries);

    let log = ctx.event_log();
    for finding in &report.findings {
        let line = log.append(&finding.to_string())?;
        output::finding(&line, finding);
    }

    let verdict = report.verdict();
    let message = match verdict {
        Verdict::Ok => "OK: No changes detected.".to_string(),
        Verdict::Alert(n) => format!(
            "ALERT: Detected {n} change(s). See log: {}",
            log.path().display()
        ),
    };
    let line = log.append(&message)?;
    output::verdict(&line, verdict);

    Ok(CheckReport {
        scan: scanned,
        diff: report,
        malformed_lines,
        unrecognized_tokens,
        duplicate_paths,
    })
}
