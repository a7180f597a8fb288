//! The path list: a plain text file naming every file fim watches.
//!
//! The list is meant to be edited by hand. Blank lines and `#` comments are
//! ignored when loading and preserved by [`PathList::remove`]; paths starting
//! with `~/` are expanded in memory only, the file keeps what the user wrote.

use crate::error::ConfigError;
use crate::utils::atomic::write_atomic;
use crate::utils::paths::expand_home;
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fixed comment block written at the top of a freshly created list.
const TEMPLATE_HEADER: &[&str] = &[
    "# One file per line.",
    "# Lines starting with # are comments (ignored).",
    "# Paths may be absolute, relative to the working directory, or start with ~/",
];

/// Result of [`PathList::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The path was appended
    Added,
    /// A line with exactly this path already exists
    AlreadyPresent,
}

/// Handle on a path list file
#[derive(Debug, Clone)]
pub struct PathList {
    path: PathBuf,
}

impl PathList {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the tracked paths in file order.
    ///
    /// Lines are trimmed; blank lines and lines starting with `#` are skipped;
    /// a leading `~/` is replaced with `home`. Nothing else is normalised.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ListNotFound`] if the list does not exist, or an
    /// I/O error if it cannot be read.
    pub fn load(&self, home: Option<&Path>) -> Result<Vec<String>> {
        let text = self.read()?;

        let paths: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| {
                if line.starts_with("~/") {
                    expand_home(line, home).to_string_lossy().into_owned()
                } else {
                    line.to_string()
                }
            })
            .collect();

        debug!(list = %self.path.display(), count = paths.len(), "loaded path list");
        Ok(paths)
    }

    /// Append `entry` unless a line with exactly that text is already present.
    ///
    /// The file always ends with a single newline afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The list does not exist ([`ConfigError::ListNotFound`])
    /// - `entry` is empty or would be read back as a comment
    /// - The file cannot be read or written
    pub fn add(&self, entry: &str) -> Result<AddOutcome> {
        let entry = entry.trim();
        if entry.is_empty() {
            bail!("Path cannot be empty");
        }
        if entry.starts_with('#') {
            bail!("Path cannot start with '#': it would be read as a comment");
        }

        let mut text = self.read()?;
        if text.lines().any(|line| line.trim() == entry) {
            return Ok(AddOutcome::AlreadyPresent);
        }

        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(entry);
        text.push('\n');

        write_atomic(&self.path, text.as_bytes())
            .with_context(|| format!("Failed to update list file: {}", self.path.display()))?;
        Ok(AddOutcome::Added)
    }

    /// Drop every line whose trimmed text equals `entry`.
    ///
    /// Comments and blank lines are kept. The file is rewritten with `\n`
    /// line endings and ends with exactly one newline. Returns how many lines
    /// were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `entry` is empty (it would match every blank line)
    /// - The list does not exist ([`ConfigError::ListNotFound`])
    /// - The file cannot be read or written
    pub fn remove(&self, entry: &str) -> Result<usize> {
        let entry = entry.trim();
        if entry.is_empty() {
            bail!("Path cannot be empty");
        }
        let text = self.read()?;

        let mut removed = 0;
        let kept: Vec<&str> = text
            .lines()
            .filter(|line| {
                let keep = line.trim() != entry;
                if !keep {
                    removed += 1;
                }
                keep
            })
            .collect();

        let mut out = kept.join("\n");
        out.push('\n');

        write_atomic(&self.path, out.as_bytes())
            .with_context(|| format!("Failed to update list file: {}", self.path.display()))?;
        Ok(removed)
    }

    /// Create the list with the comment header and `seeds` as the first entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the list already exists or cannot be written.
    pub fn bootstrap(&self, seeds: &[(&str, String)]) -> Result<()> {
        if self.path.exists() {
            bail!("List file already exists: {}", self.path.display());
        }

        let mut lines: Vec<String> = TEMPLATE_HEADER.iter().map(|s| (*s).to_string()).collect();
        for (comment, seed) in seeds {
            lines.push(String::new());
            lines.push(format!("# {comment}"));
            lines.push(seed.clone());
        }

        let mut text = lines.join("\n");
        text.push('\n');

        write_atomic(&self.path, text.as_bytes())
            .with_context(|| format!("Failed to create list file: {}", self.path.display()))
    }

    fn read(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(ConfigError::ListNotFound(self.path.clone()).into());
        }
        std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read list file: {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::is_config_error;
    use tempfile::{TempDir, tempdir};

    fn list_with(content: &str) -> (TempDir, PathList) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("critical_files.txt");
        std::fs::write(&path, content).unwrap();
        (dir, PathList::new(path))
    }

    #[test]
    fn test_load_skips_comments_and_blanks() {
        let (_dir, list) = list_with("# header\n\n/etc/passwd\n   \n  # indented comment\nnotes.txt\n");
        let paths = list.load(None).unwrap();
        assert_eq!(paths, vec!["/etc/passwd", "notes.txt"]);
    }

    #[test]
    fn test_load_trims_and_keeps_order() {
        let (_dir, list) = list_with("  z.txt  \r\na.txt\r\n\tm.txt\n");
        let paths = list.load(None).unwrap();
        assert_eq!(paths, vec!["z.txt", "a.txt", "m.txt"]);
    }

    #[test]
    fn test_load_expands_home() {
        let (_dir, list) = list_with("~/.bashrc\n/etc/hosts\n./rel//x\n");
        let paths = list.load(Some(Path::new("/home/alice"))).unwrap();
        assert_eq!(paths, vec!["/home/alice/.bashrc", "/etc/hosts", "./rel//x"]);

        // the file itself is not rewritten
        assert!(std::fs::read_to_string(list.path()).unwrap().starts_with("~/.bashrc"));
    }

    #[test]
    fn test_load_missing_list() {
        let dir = tempdir().unwrap();
        let err = PathList::new(dir.path().join("nope.txt")).load(None).unwrap_err();
        assert!(is_config_error(&err));
    }

    #[test]
    fn test_add_is_idempotent() {
        let (_dir, list) = list_with("# header\n/etc/passwd\n");
        assert_eq!(list.add("notes.txt").unwrap(), AddOutcome::Added);
        assert_eq!(list.add("notes.txt").unwrap(), AddOutcome::AlreadyPresent);
        assert_eq!(list.add("  /etc/passwd ").unwrap(), AddOutcome::AlreadyPresent);

        let text = std::fs::read_to_string(list.path()).unwrap();
        assert_eq!(text, "# header\n/etc/passwd\nnotes.txt\n");
    }

    #[test]
    fn test_add_fixes_missing_trailing_newline() {
        let (_dir, list) = list_with("a.txt");
        list.add("b.txt").unwrap();
        assert_eq!(std::fs::read_to_string(list.path()).unwrap(), "a.txt\nb.txt\n");
    }

    #[test]
    fn test_add_to_empty_list() {
        let (_dir, list) = list_with("");
        list.add("a.txt").unwrap();
        assert_eq!(std::fs::read_to_string(list.path()).unwrap(), "a.txt\n");
    }

    #[test]
    fn test_add_does_not_stack_blank_lines() {
        let (_dir, list) = list_with("a.txt\n\n");
        list.add("b.txt").unwrap();
        assert_eq!(std::fs::read_to_string(list.path()).unwrap(), "a.txt\n\nb.txt\n");
    }

    #[test]
    fn test_add_rejects_comment_and_empty() {
        let (_dir, list) = list_with("a.txt\n");
        assert!(list.add("# not a path").is_err());
        assert!(list.add("   ").is_err());
    }

    #[test]
    fn test_add_missing_list() {
        let dir = tempdir().unwrap();
        let err = PathList::new(dir.path().join("nope.txt")).add("a").unwrap_err();
        assert!(is_config_error(&err));
    }

    #[test]
    fn test_remove_preserves_comments() {
        let (_dir, list) = list_with("# header\n\na.txt\n  b.txt\n# b.txt\nb.txt\nc.txt");
        assert_eq!(list.remove("b.txt").unwrap(), 2);

        let text = std::fs::read_to_string(list.path()).unwrap();
        assert_eq!(text, "# header\n\na.txt\n# b.txt\nc.txt\n");
    }

    #[test]
    fn test_remove_empty_entry_rejected() {
        let original = "a.txt\n\n# note\n\nb.txt\n";
        let (_dir, list) = list_with(original);
        assert!(list.remove("").is_err());
        assert!(list.remove("   ").is_err());
        assert_eq!(std::fs::read_to_string(list.path()).unwrap(), original);
    }

    #[test]
    fn test_remove_normalizes_crlf() {
        let (_dir, list) = list_with("a.txt\r\nb.txt\r\n");
        assert_eq!(list.remove("a.txt").unwrap(), 1);
        assert_eq!(std::fs::read_to_string(list.path()).unwrap(), "b.txt\n");
    }

    #[test]
    fn test_remove_absent_path_is_noop() {
        let (_dir, list) = list_with("a.txt\n");
        assert_eq!(list.remove("zzz").unwrap(), 0);
        assert_eq!(std::fs::read_to_string(list.path()).unwrap(), "a.txt\n");
    }

    #[test]
    fn test_remove_last_entry_leaves_newline() {
        let (_dir, list) = list_with("a.txt\n");
        list.remove("a.txt").unwrap();
        assert_eq!(std::fs::read_to_string(list.path()).unwrap(), "\n");
    }

    #[test]
    fn test_bootstrap() {
        let dir = tempdir().unwrap();
        let list = PathList::new(dir.path().join("critical_files.txt"));
        list.bootstrap(&[
            ("The fim binary:", "/usr/bin/fim".to_string()),
            ("This list file:", list.path().display().to_string()),
        ])
        .unwrap();

        let paths = list.load(None).unwrap();
        assert_eq!(
            paths,
            vec!["/usr/bin/fim".to_string(), list.path().display().to_string()]
        );
        assert!(list.bootstrap(&[]).is_err());
    }
}
