use super::Config;
use crate::error::ConfigError;
use colored::Colorize;
use std::collections::HashSet;

/// Knows which `config.toml` fields fim understands
pub struct ConfigValidator {
    /// Set of valid configuration fields
    known_fields: HashSet<&'static str>,
}

impl ConfigValidator {
    /// Create a new validator with known configuration fields
    #[must_use]
    pub fn new() -> Self {
        let known_fields = [
            "core",
            "core.data_dir",
            "core.log_dir",
            "core.default_list",
            "scan",
            "scan.chunk_size",
            "scan.parallel",
        ]
        .into_iter()
        .collect();

        Self { known_fields }
    }

    /// Collect the dotted keys of `content` that fim does not know about.
    ///
    /// Content that is not valid TOML yields no keys; parsing errors are
    /// reported by [`Config::load`].
    #[must_use]
    pub fn unknown_fields(&self, content: &str) -> Vec<String> {
        let Ok(parsed) = toml::from_str::<toml::Table>(content) else {
            return Vec::new();
        };

        let mut unknown = Vec::new();
        self.check_table(&parsed, "", &mut unknown);
        unknown
    }

    /// Print a warning for every unknown field in `content`
    pub fn warn_unknown_fields(&self, content: &str) {
        let unknown = self.unknown_fields(content);
        if unknown.is_empty() {
            return;
        }

        eprintln!("{}", "Configuration warnings:".yellow().bold());
        for field in unknown {
            tracing::warn!(field = %field, "unknown configuration field");
            eprintln!("  Unknown configuration field: {}", field.yellow());
        }
        eprintln!();
    }

    /// Recursively checks a TOML table for unknown fields
    fn check_table(&self, table: &toml::Table, prefix: &str, unknown: &mut Vec<String>) {
        for (key, value) in table {
            let full_key = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };

            if !self.known_fields.contains(full_key.as_str()) {
                unknown.push(full_key);
                continue;
            }

            if let toml::Value::Table(inner) = value {
                self.check_table(inner, &full_key, unknown);
            }
        }
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject values that would make fim unusable.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidConfig`] when the chunk size is zero or a
/// location is empty.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.scan.chunk_size == 0 {
        return Err(ConfigError::InvalidConfig(
            "scan.chunk_size must be greater than zero".to_string(),
        ));
    }

    for (name, value) in [
        ("core.data_dir", &config.core.data_dir),
        ("core.log_dir", &config.core.log_dir),
        ("core.default_list", &config.core.default_list),
    ] {
        if value.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfig(format!("{name} cannot be empty")));
        }
    }

    Ok(())
}
