//! # Client Errors
//!
//! Every failure surfaced by the TicketForge client is normalized into
//! [`TicketForgeError`], so callers only ever deal with one error channel.

use serde_json::Value;
use thiserror::Error;

/// Errors returned by the TicketForge client
#[derive(Debug, Error)]
pub enum TicketForgeError {
  /// The request never produced a response (DNS, connection, timeout)
  #[error("Network error: {0}")]
  Network(#[source] reqwest::Error),

  /// Every attempt of a single logical request was answered with HTTP 429
  #[error("Rate limit exceeded after {attempts} attempts. Please retry.")]
  RateLimitExceeded { attempts: u32 },

  /// The server answered with a non-2xx, non-429 status
  #[error("API error {status}: {body}")]
  Api { status: u16, body: Value },

  /// A local precondition failed before anything was sent
  #[error("{0}")]
  Validation(String),

  /// A 2xx body was not valid JSON or did not have the expected shape
  #[error("Failed to decode TicketForge response: {0}")]
  Decode(#[from] serde_json::Error),
}

impl TicketForgeError {
  pub(crate) fn validation(message: impl Into<String>) -> Self {
    Self::Validation(message.into())
  }

  /// HTTP status of an [`TicketForgeError::Api`] error
  pub fn status(&self) -> Option<u16> {
    match self {
      Self::Api { status, .. } => Some(*status),
      _ => None,
    }
  }
}

/// Result alias used throughout the client
pub type Result<T> = std::result::Result<T, TicketForgeError>;
