use crate::FimContext;
use crate::tracking::PathList;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Print the paths a scan of `list_path` would hash, in list order
///
/// Entries that are not currently regular files are marked, since a scan
/// would record them as `MISSING`. Nothing is written.
///
/// # Errors
///
/// Returns an error if the list does not exist or cannot be read.
pub fn execute(ctx: &FimContext, list_path: &Path) -> Result<Vec<String>> {
    let paths = PathList::new(list_path).load(ctx.home.as_deref())?;

    if paths.is_empty() {
        crate::output::warning(&format!("No paths in {}", list_path.display()));
    }

    for path in &paths {
        if Path::new(path).is_file() {
            println!("{path}");
        } else {
            println!("{} {}", path, "(not a regular file)".yellow());
        }
    }

    Ok(paths)
}
