//! Constants for the tforge CLI
//!
//! Environment variable names, file names, and defaults used across the
//! command handlers.

/// Environment variable overriding the configured base URL
pub const ENV_BASE_URL: &str = "TFORGE_BASE_URL";

/// Environment variable overriding the configured username
pub const ENV_USERNAME: &str = "TFORGE_USERNAME";

/// Environment variable overriding the configured password
pub const ENV_PASSWORD: &str = "TFORGE_PASSWORD";

/// Name of the persisted connection settings file
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Number of tickets shown by `tforge list` when no limit is given
pub const DEFAULT_LIST_LIMIT: u32 = 5;
