//! # Configuration Management
//!
//! Stores the TicketForge connection settings as JSON in the user's config
//! directory (XDG on Linux) and applies `TFORGE_*` environment overrides when
//! loading them.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use tforge_client::Config;
use tforge_client::consts::DEFAULT_BASE_URL;
use tracing::debug;

use crate::consts::{CONFIG_FILE_NAME, ENV_BASE_URL, ENV_PASSWORD, ENV_USERNAME};

/// Represents the configuration directory for the tforge application
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
}

impl ConfigDirs {
  /// Create a new ConfigDirs instance from the platform project directories
  pub fn new() -> Result<Self> {
    let proj_dirs = ProjectDirs::from("dev", "ticketforge", "tforge").context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
    })
  }

  /// Use an explicit config directory
  pub fn at(config_dir: impl Into<PathBuf>) -> Self {
    Self {
      config_dir: config_dir.into(),
    }
  }

  /// Get the config directory
  pub fn config_dir(&self) -> &PathBuf {
    &self.config_dir
  }

  /// Get the path to the config file
  pub fn config_path(&self) -> PathBuf {
    self.config_dir.join(CONFIG_FILE_NAME)
  }

  /// Create the config directory
  pub fn init(&self) -> Result<()> {
    fs::create_dir_all(&self.config_dir).context("Failed to create config directory")
  }
}

/// Connection settings taken from `TFORGE_*` environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
  pub base_url: Option<String>,
  pub username: Option<String>,
  pub password: Option<String>,
}

impl EnvOverrides {
  /// Read overrides from the process environment, ignoring empty values
  pub fn from_env() -> Self {
    let read = |name: &str| env::var(name).ok().filter(|value| !value.is_empty());
    Self {
      base_url: read(ENV_BASE_URL),
      username: read(ENV_USERNAME),
      password: read(ENV_PASSWORD),
    }
  }

  fn apply(self, mut config: Config) -> Config {
    if let Some(base_url) = self.base_url {
      config.base_url = base_url;
    }
    if let Some(username) = self.username {
      config.username = username;
    }
    if let Some(password) = self.password {
      config.password = password;
    }
    config
  }
}

/// Read the stored config file, if there is one
pub fn read_stored_config(dirs: &ConfigDirs) -> Result<Option<Config>> {
  let path = dirs.config_path();
  if !path.exists() {
    return Ok(None);
  }

  let content = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
  let config =
    serde_json::from_str(&content).with_context(|| format!("Failed to parse config file {}", path.display()))?;
  Ok(Some(config))
}

/// Load the effective config: the stored file with environment overrides on
/// top, or the environment alone when it supplies both credentials.
pub fn load_config_with(dirs: &ConfigDirs, overrides: EnvOverrides) -> Result<Config> {
  if let Some(stored) = read_stored_config(dirs)? {
    debug!("Loaded config from {}", dirs.config_path().display());
    return Ok(overrides.apply(stored));
  }

  match (&overrides.username, &overrides.password) {
    (Some(_), Some(_)) => {
      debug!("No config file; using environment credentials");
      let base = Config::new(DEFAULT_BASE_URL, "", "");
      Ok(overrides.apply(base))
    }
    _ => bail!("Config not found. Run: tforge setup"),
  }
}

/// Load the effective config from the default location and environment
pub fn load_config() -> Result<Config> {
  load_config_with(&ConfigDirs::new()?, EnvOverrides::from_env())
}

/// Write the config file, readable only by the current user on Unix
pub fn save_config(dirs: &ConfigDirs, config: &Config) -> Result<PathBuf> {
  dirs.init()?;
  let path = dirs.config_path();
  let content = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
  fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

  #[cfg(unix)]
  {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
      .with_context(|| format!("Failed to restrict permissions on {}", path.display()))?;
  }

  debug!("Saved config to {}", path.display());
  Ok(path)
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;
  use tforge_test_utils::EnvTestGuard;

  use super::*;

  fn sample_config() -> Config {
    Config::new("https://tickets.example.com", "alice", "s3cret")
  }

  #[cfg(target_os = "linux")]
  #[test]
  fn test_config_dirs_follow_xdg_config_home() {
    let test_env = EnvTestGuard::new();

    let dirs = ConfigDirs::new().unwrap();

    assert!(dirs.config_dir().starts_with(test_env.config_dir()));
    assert!(dirs.config_path().ends_with("config.json"));
  }

  #[test]
  fn test_save_then_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let dirs = ConfigDirs::at(temp_dir.path().join("tforge"));

    let path = save_config(&dirs, &sample_config()).unwrap();
    assert!(path.exists());

    let loaded = load_config_with(&dirs, EnvOverrides::default()).unwrap();
    assert_eq!(loaded, sample_config());
  }

  #[cfg(unix)]
  #[test]
  fn test_saved_config_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let dirs = ConfigDirs::at(temp_dir.path());

    let path = save_config(&dirs, &sample_config()).unwrap();
    let mode = fs::metadata(path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
  }

  #[test]
  fn test_missing_config_points_to_setup() {
    let temp_dir = TempDir::new().unwrap();
    let dirs = ConfigDirs::at(temp_dir.path());

    let err = load_config_with(&dirs, EnvOverrides::default()).unwrap_err();
    assert!(err.to_string().contains("tforge setup"));
  }

  #[test]
  fn test_env_overrides_win_over_file() {
    let temp_dir = TempDir::new().unwrap();
    let dirs = ConfigDirs::at(temp_dir.path());
    save_config(&dirs, &sample_config()).unwrap();

    let overrides = EnvOverrides {
      base_url: Some("http://localhost:3000".to_string()),
      ..Default::default()
    };
    let loaded = load_config_with(&dirs, overrides).unwrap();

    assert_eq!(loaded.base_url, "http://localhost:3000");
    assert_eq!(loaded.username, "alice");
    assert_eq!(loaded.password, "s3cret");
  }

  #[test]
  fn test_env_only_config_uses_default_base_url() {
    let temp_dir = TempDir::new().unwrap();
    let dirs = ConfigDirs::at(temp_dir.path());

    let overrides = EnvOverrides {
      base_url: None,
      username: Some("bob".to_string()),
      password: Some("pw".to_string()),
    };
    let loaded = load_config_with(&dirs, overrides).unwrap();

    assert_eq!(loaded.base_url, DEFAULT_BASE_URL);
    assert_eq!(loaded.username, "bob");
  }

  #[test]
  fn test_env_without_password_is_not_enough() {
    let temp_dir = TempDir::new().unwrap();
    let dirs = ConfigDirs::at(temp_dir.path());

    let overrides = EnvOverrides {
      username: Some("bob".to_string()),
      ..Default::default()
    };
    assert!(load_config_with(&dirs, overrides).is_err());
  }

  #[test]
  fn test_corrupt_config_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let dirs = ConfigDirs::at(temp_dir.path());
    fs::write(dirs.config_path(), "{not json").unwrap();

    let err = load_config_with(&dirs, EnvOverrides::default()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
  }
}
