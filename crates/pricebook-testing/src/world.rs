//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for creating isolated data directories,
//! pre-seeding persisted state, and executing CLI commands against them.

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use pricebook_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["add", "Tea", "50"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".pricebook");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Get the data directory path (.pricebook).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write the persisted items entry directly, bypassing the CLI. Used
    /// to simulate pre-existing or corrupt state.
    pub fn seed_items_entry(&self, content: &str) -> Result<()> {
        let path = self.data_dir.join("items.json");
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to seed {}", path.display()))?;
        Ok(())
    }

    /// Read the raw persisted items entry, or `None` when no entry exists.
    pub fn items_entry(&self) -> Option<String> {
        std::fs::read_to_string(self.data_dir.join("items.json")).ok()
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the pricebook binary with the given arguments in this
    /// environment and capture the result.
    pub fn run(&self, args: &[&str]) -> Result<CommandResult> {
        let mut cmd = Command::cargo_bin("pricebook").context("pricebook binary not built")?;
        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output().context("Failed to execute pricebook")?;
        Ok(CommandResult { output })
    }
}

/// Captured outcome of one CLI invocation.
pub struct CommandResult {
    output: std::process::Output,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.stdout()).context("stdout is not valid JSON")
    }
}
