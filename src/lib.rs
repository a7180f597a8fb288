//! # fimon - File Integrity Monitor
//!
//! fimon keeps a SHA-256 baseline of a hand-maintained list of files and, on
//! demand, rescans them to report what drifted: files that disappeared, became
//! unreadable, changed content, or were added to the list since the baseline.
//!
//! ## Architecture
//!
//! - [`tracking`]: the path list file (load, add, remove, bootstrap)
//! - [`utils::hash`]: streaming SHA-256 with `MISSING`/`ERROR` sentinels
//! - [`storage`]: outcomes, the `sha256sum`-style store format, atomic saves
//! - [`diff`]: classification of baseline vs. scan into findings
//! - [`commands`]: `init`, `check`, `add`, `remove`, `list`
//! - [`eventlog`]: append-only timestamped operator log
//!
//! ## Example Usage
//!
//! ```no_run
//! use fimon::FimContext;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = FimContext::new()?;
//! let list = ctx.default_list.clone();
//!
//! fimon::commands::add::execute(&ctx, "/etc/passwd", &list)?;
//! fimon::commands::init::execute(&ctx, &list)?;
//!
//! let report = fimon::commands::check::execute(&ctx, &list)?;
//! println!("{} finding(s)", report.diff.count());
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Command implementations.
pub mod commands;

/// Configuration file parsing and validation.
pub mod config;

/// Baseline vs. scan comparison.
pub mod diff;

/// Typed configuration errors.
pub mod error;

/// Append-only operator event log.
pub mod eventlog;

/// Diagnostic `tracing` setup.
pub mod logging;

/// Terminal output formatting.
pub mod output;

/// Hash store model, text format and files.
pub mod storage;

/// The tracked path list.
pub mod tracking;

/// Utility functions and helpers.
pub mod utils;

#[cfg(test)]
mod test_utils;

use anyhow::{Context, Result};
use config::{CONFIG_FILE, Config};
use eventlog::EventLog;
use std::path::{Path, PathBuf};
use storage::store::{BASELINE_FILE, LAST_SCAN_FILE};

/// Current version of the fim binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default root directory name within the home directory.
pub const DEFAULT_ROOT_DIR: &str = ".fim";

/// Environment variable overriding the root directory.
pub const ROOT_ENV: &str = "FIM_HOME";

/// Everything an operation needs to know about where state lives.
///
/// Built once at startup and passed to every command, so nothing reads
/// process-wide constants and tests can point a context at a temporary
/// directory.
///
/// # Examples
///
/// ```no_run
/// use fimon::FimContext;
///
/// # fn main() -> anyhow::Result<()> {
/// // Root from FIM_HOME or ~/.fim
/// let ctx = FimContext::new()?;
///
/// // Explicit root, no environment lookups (for testing)
/// let ctx = FimContext::new_explicit("/tmp/fim-test".into())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FimContext {
    /// Root directory holding the config file and, by default, all state.
    pub root: PathBuf,

    /// Directory holding `baseline` and `last_scan`.
    pub data_dir: PathBuf,

    /// Directory holding the event log.
    pub log_dir: PathBuf,

    /// List used when a command is not given one.
    pub default_list: PathBuf,

    /// Home directory used to expand `~/` in the list, if known.
    pub home: Option<PathBuf>,

    /// Loaded configuration settings.
    pub config: Config,
}

impl FimContext {
    /// Creates a context rooted at `$FIM_HOME`, or `~/.fim` when unset.
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined and
    /// `FIM_HOME` is unset, or if `config.toml` is invalid.
    pub fn new() -> Result<Self> {
        let root = match std::env::var_os(ROOT_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => dirs::home_dir()
                .context("Could not find home directory (set FIM_HOME)")?
                .join(DEFAULT_ROOT_DIR),
        };

        let mut ctx = Self::new_explicit(root)?;
        ctx.home = dirs::home_dir();
        Ok(ctx)
    }

    /// Creates a context for `root` without consulting the environment.
    ///
    /// `home` is left unset, so `~/` entries stay unexpanded until the caller
    /// fills it in.
    ///
    /// # Errors
    /// Returns an error if `<root>/config.toml` exists and is invalid.
    pub fn new_explicit(root: PathBuf) -> Result<Self> {
        let config = Config::load(&root.join(CONFIG_FILE))?;
        Ok(Self::with_config(root, config))
    }

    /// Creates a context from an already loaded configuration.
    #[must_use]
    pub fn with_config(root: PathBuf, config: Config) -> Self {
        let data_dir = Config::resolve(&root, &config.core.data_dir);
        let log_dir = Config::resolve(&root, &config.core.log_dir);
        let default_list = Config::resolve(&root, &config.core.default_list);

        Self {
            root,
            data_dir,
            log_dir,
            default_list,
            home: None,
            config,
        }
    }

    /// Path of the baseline store.
    #[must_use]
    pub fn baseline_path(&self) -> PathBuf {
        self.data_dir.join(BASELINE_FILE)
    }

    /// Path of the last scan store.
    #[must_use]
    pub fn last_scan_path(&self) -> PathBuf {
        self.data_dir.join(LAST_SCAN_FILE)
    }

    /// The operator event log.
    #[must_use]
    pub fn event_log(&self) -> EventLog {
        EventLog::new(&self.log_dir)
    }

    /// The list to use when the user passed `list`, or the default list.
    #[must_use]
    pub fn list_or_default(&self, list: Option<PathBuf>) -> PathBuf {
        list.unwrap_or_else(|| self.default_list.clone())
    }

    /// Whether `list` names the default list.
    #[must_use]
    pub fn is_default_list(&self, list: &Path) -> bool {
        utils::paths::same_file(list, &self.default_list)
    }

    /// Ensures the data and log directories exist.
    ///
    /// # Errors
    /// Returns an error if a directory cannot be created.
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir).with_context(|| {
            format!("Failed to create data directory: {}", self.data_dir.display())
        })?;
        std::fs::create_dir_all(&self.log_dir).with_context(|| {
            format!("Failed to create log directory: {}", self.log_dir.display())
        })?;
        Ok(())
    }
}
