use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// File name of the event log inside the log directory.
pub const LOG_FILE: &str = "fim.log";

/// Timestamp layout used between the brackets of every log line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single line of the event log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Local time the event was written
    pub timestamp: NaiveDateTime,
    pub message: String,
}

impl LogEntry {
    /// Create an entry stamped with the current local time
    #[must_use]
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().naive_local(),
            message: message.into(),
        }
    }

    /// Format entry as `[YYYY-MM-DD HH:MM:SS] message`
    #[must_use]
    pub fn to_line(&self) -> String {
        format!("[{}] {}", self.timestamp.format(TIMESTAMP_FORMAT), self.message)
    }

    /// Parse a line written by [`LogEntry::to_line`]
    ///
    /// # Errors
    ///
    /// Returns an error if the line has no bracketed timestamp or the
    /// timestamp does not parse.
    pub fn from_line(line: &str) -> Result<Self> {
        let rest = line
            .strip_prefix('[')
            .context("Log line does not start with '['")?;
        let (stamp, message) = rest
            .split_once("] ")
            .context("Log line has no closing bracket")?;
        let timestamp = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
            .with_context(|| format!("Invalid log timestamp: {stamp}"))?;

        Ok(Self {
            timestamp,
            message: message.to_string(),
        })
    }
}

/// Append-only operator log.
///
/// Every operation narrates what it did here, and `check` writes each finding
/// and its verdict, so the log is also the anomaly report.
#[derive(Debug, Clone)]
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    /// Log stored as [`LOG_FILE`] inside `log_dir`
    #[must_use]
    pub fn new(log_dir: &Path) -> Self {
        Self {
            path: log_dir.join(LOG_FILE),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `message` with the current timestamp and return the written line.
    ///
    /// # Errors
    ///
    /// Returns an error if the log directory or file cannot be created or written.
    pub fn append(&self, message: &str) -> Result<String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let line = LogEntry::now(message).to_line();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open event log: {}", self.path.display()))?;

        writeln!(file, "{line}")?;
        file.flush()?;

        Ok(line)
    }

    /// Read every entry; malformed lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the log exists but cannot be read.
    pub fn read(&self) -> Result<Vec<LogEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = fs::File::open(&self.path)?;
        let reader = BufReader::new(file);

        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match LogEntry::from_line(&line) {
                Ok(entry) => entries.push(entry),
                Err(e) => tracing::debug!(error = %e, "skipping malformed log line"),
            }
        }

        Ok(entries)
    }
}
