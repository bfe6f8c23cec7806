//! # TicketForge HTTP Client
//!
//! Owns the connection-reusing session and the immutable [`Config`] it was
//! built from. Requests are issued through [`TicketForgeClient::execute`] in
//! `transport.rs`; the domain operations live under `endpoints/`.

use std::fmt;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::backoff::{Sleeper, ThreadSleeper};
use crate::consts::{DEFAULT_TIMEOUT, USER_AGENT, WORKITEM_ROUTE};
use crate::error::{Result, TicketForgeError};

/// Connection settings for a TicketForge instance
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  pub base_url: String,
  pub username: String,
  pub password: String,
}

impl Config {
  pub fn new(base_url: impl Into<String>, username: impl Into<String>, password: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into(),
      username: username.into(),
      password: password.into(),
    }
  }

  /// Base URL with trailing slashes removed, ready to have a route appended
  pub fn api_root(&self) -> &str {
    self.base_url.trim_end_matches('/')
  }
}

impl fmt::Debug for Config {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Config")
      .field("base_url", &self.base_url)
      .field("username", &self.username)
      .field("password", &"<redacted>")
      .finish()
  }
}

/// Represents a TicketForge API client
///
/// One instance owns one session. Requests are issued one at a time; share
/// an instance across threads only behind your own synchronization.
pub struct TicketForgeClient {
  pub(crate) session: Client,
  pub(crate) base_url: String,
  pub(crate) config: Config,
  pub(crate) sleeper: Box<dyn Sleeper>,
}

impl TicketForgeClient {
  /// Create a new client, building its session once
  pub fn new(config: Config) -> Result<Self> {
    Url::parse(config.api_root())
      .map_err(|e| TicketForgeError::validation(format!("Invalid base URL '{}': {e}", config.base_url)))?;

    let session = build_session()?;
    let base_url = config.api_root().to_string();
    debug!("Created TicketForge client for {} as {}", base_url, config.username);

    Ok(Self {
      session,
      base_url,
      config,
      sleeper: Box::new(ThreadSleeper),
    })
  }

  /// Replace how the client waits between rate-limited attempts
  pub fn with_sleeper(mut self, sleeper: impl Sleeper + 'static) -> Self {
    self.sleeper = Box::new(sleeper);
    self
  }

  /// The configuration this client was built from
  pub fn config(&self) -> &Config {
    &self.config
  }

  /// The base URL every route is appended to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// URL of a single work item.
  ///
  /// The ref is opaque and always becomes exactly one path segment: `/`, `?`,
  /// `#` and the like are percent-encoded. Empty and dot-segment refs are
  /// rejected since they would name a different resource.
  pub(crate) fn workitem_url(&self, reference: &str) -> Result<Url> {
    if matches!(reference, "" | "." | "..") {
      return Err(TicketForgeError::validation(format!("Invalid work item ref '{reference}'")));
    }

    let mut url = Url::parse(&self.base_url)
      .map_err(|e| TicketForgeError::validation(format!("Invalid base URL '{}': {e}", self.base_url)))?;
    url
      .path_segments_mut()
      .map_err(|()| TicketForgeError::validation(format!("Base URL '{}' cannot take a path", self.base_url)))?
      .pop_if_empty()
      .extend(WORKITEM_ROUTE)
      .push(reference);
    Ok(url)
  }
}

fn build_session() -> Result<Client> {
  let mut headers = HeaderMap::new();
  headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
  headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

  Client::builder()
    .default_headers(headers)
    .user_agent(USER_AGENT)
    .timeout(DEFAULT_TIMEOUT)
    .build()
    .map_err(TicketForgeError::Network)
}

/// Create a TicketForge client from credentials
pub fn create_ticketforge_client(base_url: &str, username: &str, password: &str) -> Result<TicketForgeClient> {
  TicketForgeClient::new(Config::new(base_url, username, password))
}
