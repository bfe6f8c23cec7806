//! Configuration directory management for testing
//!
//! Builds a throwaway XDG config tree that a spawned `tforge` process can be
//! pointed at through its environment, without touching the test process's
//! own environment.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Application directory name under `XDG_CONFIG_HOME`
const APPLICATION: &str = "tforge";

/// A temporary XDG config home holding a tforge config directory
pub struct ConfigDirsTestGuard {
  /// Keeps the tree alive until the guard is dropped
  pub temp_dir: TempDir,
  /// The tforge config directory inside the temporary tree
  pub config_dir: PathBuf,
}

impl ConfigDirsTestGuard {
  /// Create an empty config tree; no config file is written
  pub fn new() -> anyhow::Result<Self> {
    let temp_dir = TempDir::new().context("Failed to create temporary directory")?;
    let config_dir = temp_dir.path().join("config").join(APPLICATION);

    Ok(Self { temp_dir, config_dir })
  }

  /// Create a config tree with a stored config file
  pub fn with_config(base_url: &str, username: &str, password: &str) -> anyhow::Result<Self> {
    let guard = Self::new()?;
    guard.write_config(base_url, username, password)?;
    Ok(guard)
  }

  /// Value to use for `XDG_CONFIG_HOME` in a spawned process
  pub fn xdg_config_home(&self) -> PathBuf {
    self.temp_dir.path().join("config")
  }

  /// Get the path to the config file
  pub fn config_path(&self) -> PathBuf {
    self.config_dir.join("config.json")
  }

  /// Write a config file in the format the CLI stores
  pub fn write_config(&self, base_url: &str, username: &str, password: &str) -> anyhow::Result<()> {
    fs::create_dir_all(&self.config_dir).context("Failed to create config directory")?;
    let content = serde_json::to_string_pretty(&json!({
        "base_url": base_url,
        "username": username,
        "password": password,
    }))?;
    fs::write(self.config_path(), content).context("Failed to write config file")
  }

  /// Read the stored config file back as JSON
  pub fn read_config(&self) -> anyhow::Result<Value> {
    let content = fs::read_to_string(self.config_path()).context("Failed to read config file")?;
    Ok(serde_json::from_str(&content)?)
  }
}
