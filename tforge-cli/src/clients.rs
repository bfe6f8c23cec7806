//! # Client Creation
//!
//! Builds an authenticated TicketForge client from the stored configuration.

use anyhow::{Context, Result};
use tforge_client::{Config, TicketForgeClient};

use crate::config::load_config;

/// Creates a TicketForge client from a config value
pub fn create_client_from_config(config: Config) -> Result<TicketForgeClient> {
  TicketForgeClient::new(config).context("Failed to create TicketForge client")
}

/// Creates a TicketForge client from the stored config and environment
pub fn create_client() -> Result<TicketForgeClient> {
  let config = load_config()?;
  create_client_from_config(config)
}
