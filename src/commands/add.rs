use crate::FimContext;
use crate::tracking::{AddOutcome, PathList};
use anyhow::Result;
use std::path::Path;

/// Append `path` to the list
///
/// The path is stored exactly as given (after trimming); `~/` stays
/// unexpanded in the file. The baseline is not touched, so a newly added path
/// shows up as new on the next `check` until `init` is run again.
///
/// # Errors
///
/// Returns an error if:
/// - The list does not exist and is not the default list
/// - `path` is empty or starts with `#`
/// - The list or the event log cannot be written
pub fn execute(ctx: &FimContext, path: &str, list_path: &Path) -> Result<AddOutcome> {
    ctx.ensure_dirs()?;
    super::ensure_default_list(ctx, list_path)?;

    let outcome = PathList::new(list_path).add(path)?;
    let entry = path.trim();
    match outcome {
        AddOutcome::Added => super::log_event(ctx, &format!("Added to list: {entry}"))?,
        AddOutcome::AlreadyPresent => {
            super::log_event(ctx, &format!("Already in list: {entry}"))?;
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::TestMonitor;

    #[test]
    fn test_add_then_add_again() -> Result<()> {
        let monitor = TestMonitor::new()?;
        let file = monitor.create_file("A.txt", "hello")?;
        let entry = file.to_string_lossy().into_owned();

        assert_eq!(execute(&monitor.context, &entry, &monitor.list_path)?, AddOutcome::Added);
        let once = std::fs::read(&monitor.list_path)?;
        assert_eq!(
            execute(&monitor.context, &entry, &monitor.list_path)?,
            AddOutcome::AlreadyPresent
        );
        assert_eq!(std::fs::read(&monitor.list_path)?, once);

        let messages: Vec<String> = monitor
            .context
            .event_log()
            .read()?
            .into_iter()
            .map(|e| e.message)
            .collect();
        assert_eq!(
            messages,
            vec![format!("Added to list: {entry}"), format!("Already in list: {entry}")]
        );
        Ok(())
    }

    #[test]
    fn test_add_keeps_tilde_unexpanded() -> Result<()> {
        let monitor = TestMonitor::new()?;
        execute(&monitor.context, "~/notes.txt", &monitor.list_path)?;

        let text = std::fs::read_to_string(&monitor.list_path)?;
        assert!(text.lines().any(|l| l == "~/notes.txt"));

        let loaded = PathList::new(&monitor.list_path).load(monitor.context.home.as_deref())?;
        let expected = monitor.temp_dir.path().join("notes.txt");
        assert_eq!(loaded, vec![expected.to_string_lossy().into_owned()]);
        Ok(())
    }

    #[test]
    fn test_add_to_missing_user_list_fails() -> Result<()> {
        let monitor = TestMonitor::new()?;
        let absent = monitor.temp_dir.path().join("absent.txt");
        assert!(execute(&monitor.context, "/etc/hosts", &absent).is_err());
        assert!(!absent.exists());
        Ok(())
    }

    #[test]
    fn test_add_bootstraps_default_list() -> Result<()> {
        let monitor = TestMonitor::new()?;
        let default_list = monitor.context.default_list.clone();

        execute(&monitor.context, "/etc/hosts", &default_list)?;
        let loaded = PathList::new(&default_list).load(None)?;
        assert!(loaded.contains(&default_list.to_string_lossy().into_owned()));
        assert_eq!(loaded.last().map(String::as_str), Some("/etc/hosts"));
        Ok(())
    }
}
