//! Typed errors for required files and settings.
//!
//! Everything else in the crate propagates `anyhow::Error`; these variants are
//! the fatal configuration problems an operator has to fix before a command can
//! run. Callers that need to tell them apart downcast the `anyhow::Error`.

use std::path::PathBuf;
use thiserror::Error;

/// A required file or setting is missing or invalid.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The path list file does not exist.
    #[error("List file not found: {}", .0.display())]
    ListNotFound(PathBuf),

    /// `check` was run before any `init`.
    #[error("Baseline not found: {}. Run: fim init", .0.display())]
    BaselineNotFound(PathBuf),

    /// A hash store file that should exist does not.
    #[error("File not found: {}", .0.display())]
    StoreNotFound(PathBuf),

    /// A value in `config.toml` is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Returns true if `err` wraps a [`ConfigError`].
#[must_use]
pub fn is_config_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ConfigError>().is_some()
}
