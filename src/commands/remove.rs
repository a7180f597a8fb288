use crate::FimContext;
use crate::tracking::PathList;
use anyhow::Result;
use std::path::Path;

/// Remove every line equal to `path` from the list
///
/// Returns the number of lines removed. The baseline keeps its entry, so the
/// path is reported as not scanned until `init` is run again.
///
/// # Errors
///
/// Returns an error if the list does not exist or cannot be rewritten.
pub fn execute(ctx: &FimContext, path: &str, list_path: &Path) -> Result<usize> {
    ctx.ensure_dirs()?;

    let removed = PathList::new(list_path).remove(path)?;
    let entry = path.trim();
    if removed > 0 {
        super::log_event(ctx, &format!("Removed from list: {entry}"))?;
    } else {
        super::log_event(ctx, &format!("Not in list: {entry}"))?;
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::test_utils::fixtures::TestMonitor;

    #[test]
    fn test_remove_tracked_path() -> Result<()> {
        let monitor = TestMonitor::new()?;
        let a = monitor.track("A.txt", "a")?;
        let b = monitor.track("B.txt", "b")?;

        assert_eq!(execute(&monitor.context, &a, &monitor.list_path)?, 1);
        let loaded = PathList::new(&monitor.list_path).load(None)?;
        assert_eq!(loaded, vec![b]);

        let text = std::fs::read_to_string(&monitor.list_path)?;
        assert!(text.starts_with("# test list\n"));
        Ok(())
    }

    #[test]
    fn test_remove_absent_path_is_not_an_error() -> Result<()> {
        let monitor = TestMonitor::new()?;
        assert_eq!(execute(&monitor.context, "/nowhere", &monitor.list_path)?, 0);

        let log = monitor.context.event_log().read()?;
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].message, "Not in list: /nowhere");
        Ok(())
    }

    #[test]
    fn test_remove_from_missing_list_fails() -> Result<()> {
        let monitor = TestMonitor::new()?;
        let absent = monitor.temp_dir.path().join("absent.txt");

        let err = execute(&monitor.context, "/x", &absent).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::ListNotFound(_))
        ));
        Ok(())
    }
}
