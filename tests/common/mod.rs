#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use fimon::FimContext;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated fim root plus a directory of watched files
pub struct TestMonitor {
    pub temp_dir: TempDir,
    pub ctx: FimContext,
    pub list_path: PathBuf,
}

impl TestMonitor {
    /// Create a monitor rooted at `<tmp>/.fim` with an empty user list at `<tmp>/watch.txt`
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let mut ctx = FimContext::new_explicit(temp_dir.path().join(".fim"))?;
        ctx.home = Some(temp_dir.path().to_path_buf());

        let list_path = temp_dir.path().join("watch.txt");
        fs::write(&list_path, "# watched by tests\n")?;

        Ok(Self {
            temp_dir,
            ctx,
            list_path,
        })
    }

    /// Get the temporary directory path
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `<tmp>/<name>` and return the absolute path as a string
    pub fn write(&self, name: &str, content: &[u8]) -> Result<String> {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path.to_string_lossy().into_owned())
    }

    /// Write a file and add it to the list through the library
    pub fn track(&self, name: &str, content: &[u8]) -> Result<String> {
        let path = self.write(name, content)?;
        fimon::commands::add::execute(&self.ctx, &path, &self.list_path)?;
        Ok(path)
    }

    /// Messages of every event log entry, oldest first
    pub fn log_messages(&self) -> Result<Vec<String>> {
        Ok(self
            .ctx
            .event_log()
            .read()?
            .into_iter()
            .map(|e| e.message)
            .collect())
    }

    /// The `fim` binary pointed at this monitor's root
    pub fn fim(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("fim")?;
        cmd.env("FIM_HOME", &self.ctx.root)
            .env("HOME", self.path())
            .env_remove("FIM_LOG")
            .env("NO_COLOR", "1")
            .current_dir(self.path());
        Ok(cmd)
    }
}
