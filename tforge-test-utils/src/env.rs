//! Environment variable management for testing
//!
//! This module overrides the XDG config directory and clears the `TFORGE_*` connection
//! overrides for the lifetime of a guard, restoring the originals on drop.

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

/// A test environment that points the XDG config directory at a per-test temporary
/// directory and hides any `TFORGE_*` variables set by the developer
pub struct EnvTestGuard {
  /// The temporary directory holding the XDG config directory
  pub temp_dir: TempDir,
  /// Original values of every variable this guard touched
  saved: Vec<(&'static str, Option<String>)>,
}

impl Default for EnvTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl EnvTestGuard {
  /// XDG config variable name
  pub const XDG_CONFIG_HOME: &'static str = "XDG_CONFIG_HOME";

  /// Connection overrides read by the CLI
  pub const TFORGE_VARS: [&'static str; 3] = ["TFORGE_BASE_URL", "TFORGE_USERNAME", "TFORGE_PASSWORD"];

  /// Create a new test environment with an overridden XDG config directory
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let config_dir = temp_dir.path().join("config");
    std::fs::create_dir_all(&config_dir).expect("Failed to create XDG config directory");

    let mut saved = vec![(Self::XDG_CONFIG_HOME, env::var(Self::XDG_CONFIG_HOME).ok())];
    unsafe {
      env::set_var(Self::XDG_CONFIG_HOME, &config_dir);
    }

    for name in Self::TFORGE_VARS {
      saved.push((name, env::var(name).ok()));
      unsafe {
        env::remove_var(name);
      }
    }

    Self { temp_dir, saved }
  }

  /// Get the path to the XDG config directory
  pub fn config_dir(&self) -> PathBuf {
    self.temp_dir.path().join("config")
  }
}

impl Drop for EnvTestGuard {
  fn drop(&mut self) {
    for (name, original) in &self.saved {
      match original {
        Some(val) => unsafe {
          env::set_var(name, val);
        },
        None => unsafe {
          env::remove_var(name);
        },
      }
    }
  }
}
