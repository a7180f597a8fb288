pub mod validator;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional configuration file inside the fim root.
pub const CONFIG_FILE: &str = "config.toml";

/// Settings read from `<root>/config.toml`.
///
/// Every field has a default, so a missing file or a partial file is fine.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,

    #[serde(default)]
    pub scan: ScanConfig,
}

/// Locations of the persisted state. Relative paths are resolved against the root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoreConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    #[serde(default = "default_list")]
    pub default_list: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Read buffer size used while hashing, in bytes
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Hash files on the rayon pool instead of one after another
    #[serde(default)]
    pub parallel: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_dir: default_log_dir(),
            default_list: default_list(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            parallel: false,
        }
    }
}

impl Config {
    /// Load configuration from a file
    ///
    /// A missing file yields the defaults; nothing is written to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file contains invalid TOML
    /// - A value fails validation
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        validator::ConfigValidator::new().warn_unknown_fields(&content);
        validator::validate(&config)?;

        Ok(config)
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Cannot create parent directories
    /// - Cannot write to the file
    /// - TOML serialization fails
    pub fn save(&self, path: &Path) -> Result<()> {
        let toml_str = toml::to_string_pretty(self)?;
        crate::utils::atomic::write_atomic(path, toml_str.as_bytes())
            .with_context(|| format!("Failed to save config file: {}", path.display()))
    }

    /// Resolve a configured location against the root directory.
    #[must_use]
    pub fn resolve(root: &Path, configured: &Path) -> PathBuf {
        if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            root.join(configured)
        }
    }
}

// Default functions for serde
fn default_data_dir() -> PathBuf {
    PathBuf::from("db")
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_list() -> PathBuf {
    PathBuf::from("critical_files.txt")
}

const fn default_chunk_size() -> usize {
    1_048_576 // 1MB
}
