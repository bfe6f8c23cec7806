//! # Request Transport
//!
//! Executes one logical request against TicketForge: authentication,
//! bounded retry on HTTP 429, and normalization of every failure into
//! [`TicketForgeError`].

use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::backoff::{MAX_ATTEMPTS, rate_limit_delay};
use crate::client::TicketForgeClient;
use crate::consts::RATE_LIMIT_RESET_HEADER;
use crate::error::{Result, TicketForgeError};

/// Outcome of a single attempt that did not fail outright
#[derive(Debug, PartialEq)]
pub(crate) enum Attempt {
  /// 2xx; `None` when the body was empty
  Success(Option<Value>),
  /// 429; wait this long before the next attempt
  RateLimited(std::time::Duration),
}

/// Classify a response by status, reset header and body text.
pub(crate) fn classify(
  status: StatusCode,
  reset_header: Option<&str>,
  body: String,
  now: DateTime<Utc>,
) -> Result<Attempt> {
  if status == StatusCode::TOO_MANY_REQUESTS {
    return Ok(Attempt::RateLimited(rate_limit_delay(reset_header, now)));
  }

  if status.is_success() {
    if body.is_empty() {
      return Ok(Attempt::Success(None));
    }
    return Ok(Attempt::Success(Some(serde_json::from_str(&body)?)));
  }

  let body = serde_json::from_str::<Value>(&body).unwrap_or_else(|_| Value::String(body));
  Err(TicketForgeError::Api {
    status: status.as_u16(),
    body,
  })
}

impl TicketForgeClient {
  /// Execute one logical request and return the parsed JSON body.
  ///
  /// `path` is appended to the base URL as is, so it must already be
  /// percent-encoded. `query` pairs are URL-encoded and `body` is sent as
  /// JSON. Returns `None` for an empty 2xx body.
  ///
  /// A 429 is retried up to [`MAX_ATTEMPTS`] times in total. The back-off
  /// sleep happens only between attempts, never after the last one, so a
  /// third 429 fails at once with [`TicketForgeError::RateLimitExceeded`].
  /// Callers used to a sleep after every 429 will see the final failure one
  /// back-off delay sooner.
  pub fn execute(
    &self,
    method: Method,
    path: &str,
    query: &[(&str, String)],
    body: Option<&Value>,
  ) -> Result<Option<Value>> {
    let url = format!("{}{}", self.base_url, path);
    self.execute_url(method, &url, query, body)
  }

  /// [`TicketForgeClient::execute`] against a complete, already encoded URL
  pub(crate) fn execute_url(
    &self,
    method: Method,
    url: &str,
    query: &[(&str, String)],
    body: Option<&Value>,
  ) -> Result<Option<Value>> {
    for attempt in 1..=MAX_ATTEMPTS {
      debug!("{} {} (attempt {}/{})", method, url, attempt, MAX_ATTEMPTS);

      let mut request = self
        .session
        .request(method.clone(), url)
        .basic_auth(&self.config.username, Some(&self.config.password));
      if !query.is_empty() {
        request = request.query(query);
      }
      if let Some(body) = body {
        trace!("Request body: {}", body);
        request = request.json(body);
      }

      let response = request.send().map_err(TicketForgeError::Network)?;
      let status = response.status();
      let reset_header = response
        .headers()
        .get(RATE_LIMIT_RESET_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
      let text = response.text().map_err(TicketForgeError::Network)?;

      match classify(status, reset_header.as_deref(), text, Utc::now())? {
        Attempt::Success(value) => {
          debug!("{} {} -> {}", method, url, status);
          return Ok(value);
        }
        Attempt::RateLimited(delay) => {
          if attempt == MAX_ATTEMPTS {
            break;
          }
          warn!(
            "Rate limited by TicketForge (attempt {}/{}), retrying in {:.1}s",
            attempt,
            MAX_ATTEMPTS,
            delay.as_secs_f64()
          );
          self.sleeper.sleep(delay);
        }
      }
    }

    warn!("Giving up on {} {} after {} rate-limited attempts", method, url, MAX_ATTEMPTS);
    Err(TicketForgeError::RateLimitExceeded { attempts: MAX_ATTEMPTS })
  }
}
