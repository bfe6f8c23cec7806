//! # Setup Command
//!
//! Verifies connection settings against the server and stores them.

use anyhow::{Context, Result};
use clap::Args;
use tforge_client::Config;
use tforge_client::consts::DEFAULT_BASE_URL;
use tracing::info;

use crate::clients::create_client_from_config;
use crate::config::{ConfigDirs, save_config};
use crate::prompts::{password_or_prompt, text_or_prompt};
use crate::utils::output::{format_path, print_info, print_success};

/// Arguments for the setup command
#[derive(Args)]
pub struct SetupArgs {
  /// TicketForge server URL
  #[arg(long, default_value = DEFAULT_BASE_URL)]
  pub base_url: String,

  /// Username (prompted for when omitted)
  #[arg(long)]
  pub username: Option<String>,

  /// Password (prompted for without echo when omitted)
  #[arg(long)]
  pub password: Option<String>,
}

pub(crate) fn handle_setup_command(args: SetupArgs) -> Result<()> {
  let username = text_or_prompt(args.username, "Username")?;
  let password = password_or_prompt(args.password, "Password")?;
  let config = Config::new(args.base_url, username, password);

  let client = create_client_from_config(config.clone())?;
  client.health_check().context("Connection check failed")?;
  info!("Credentials verified against {}", client.base_url());

  let dirs = ConfigDirs::new()?;
  let path = save_config(&dirs, &config)?;

  print_success("Setup complete. Connection verified.");
  print_info(&format!("Config saved to {}", format_path(&path.display().to_string())));
  Ok(())
}
