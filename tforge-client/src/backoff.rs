//! # Rate Limit Back-off
//!
//! Pure helpers that turn a 429 response into a sleep duration, plus the
//! [`Sleeper`] seam the transport uses to actually wait.

use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, Utc};

/// Maximum number of attempts for one logical request
pub const MAX_ATTEMPTS: u32 = 3;

/// Delay used when a 429 carries no usable reset timestamp
pub const FALLBACK_DELAY: Duration = Duration::from_secs(2);

/// Upper bound on the delay derived from a reset timestamp
pub const MAX_RESET_DELAY: Duration = Duration::from_secs(30);

/// Added on top of the time remaining until the reset instant
const RESET_GRACE: Duration = Duration::from_secs(1);

/// Offset-less layouts accepted in the reset header, read as UTC
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an `x-ratelimit-reset` header value.
///
/// Accepts RFC 3339 timestamps (a trailing `Z` means UTC) as well as
/// timestamps without an offset, which are taken to be UTC.
pub fn parse_rate_limit_reset(value: &str) -> Option<DateTime<Utc>> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }

  if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
    return Some(parsed.with_timezone(&Utc));
  }

  NAIVE_LAYOUTS
    .iter()
    .find_map(|layout| NaiveDateTime::parse_from_str(value, layout).ok())
    .map(|naive| naive.and_utc())
}

/// Compute how long to wait after a 429 response.
///
/// With a parseable reset header the delay is the time left until the reset
/// plus one second, capped at [`MAX_RESET_DELAY`]. A reset in the past waits
/// only the one second. Otherwise the delay is [`FALLBACK_DELAY`].
pub fn rate_limit_delay(reset_header: Option<&str>, now: DateTime<Utc>) -> Duration {
  match reset_header.and_then(parse_rate_limit_reset) {
    Some(reset) => {
      let remaining = (reset - now).to_std().unwrap_or(Duration::ZERO);
      (remaining + RESET_GRACE).min(MAX_RESET_DELAY)
    }
    None => FALLBACK_DELAY,
  }
}

/// Blocks the calling thread between rate-limited attempts
pub trait Sleeper: Send + Sync {
  fn sleep(&self, duration: Duration);
}

/// [`Sleeper`] backed by [`std::thread::sleep`]
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
  fn sleep(&self, duration: Duration) {
    std::thread::sleep(duration);
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
  }

  #[test]
  fn test_parse_zulu_and_offset_forms_agree() {
    let zulu = parse_rate_limit_reset("2025-03-01T12:00:10Z").unwrap();
    let offset = parse_rate_limit_reset("2025-03-01T12:00:10+00:00").unwrap();
    assert_eq!(zulu, offset);
    assert_eq!(zulu, Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 10).unwrap());
  }

  #[test]
  fn test_parse_non_utc_offset() {
    let parsed = parse_rate_limit_reset("2025-03-01T14:00:10+02:00").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 10).unwrap());
  }

  #[test]
  fn test_parse_naive_timestamp_as_utc() {
    let parsed = parse_rate_limit_reset("2025-03-01T12:00:10.250").unwrap();
    assert_eq!(parsed.timestamp(), fixed_now().timestamp() + 10);
  }

  #[test]
  fn test_parse_rejects_garbage() {
    assert!(parse_rate_limit_reset("").is_none());
    assert!(parse_rate_limit_reset("   ").is_none());
    assert!(parse_rate_limit_reset("soon").is_none());
    assert!(parse_rate_limit_reset("1740830410").is_none());
  }

  #[test]
  fn test_delay_until_reset_plus_grace() {
    let delay = rate_limit_delay(Some("2025-03-01T12:00:10Z"), fixed_now());
    assert_eq!(delay, Duration::from_secs(11));
  }

  #[test]
  fn test_delay_keeps_sub_second_precision() {
    let delay = rate_limit_delay(Some("2025-03-01T12:00:04.500Z"), fixed_now());
    assert_eq!(delay, Duration::from_millis(5_500));
  }

  #[test]
  fn test_delay_is_capped() {
    let delay = rate_limit_delay(Some("2025-03-01T13:00:00Z"), fixed_now());
    assert_eq!(delay, MAX_RESET_DELAY);
  }

  #[test]
  fn test_delay_for_past_reset_is_grace_only() {
    let delay = rate_limit_delay(Some("2025-03-01T11:59:00Z"), fixed_now());
    assert_eq!(delay, Duration::from_secs(1));
  }

  #[test]
  fn test_delay_falls_back_without_usable_header() {
    assert_eq!(rate_limit_delay(None, fixed_now()), FALLBACK_DELAY);
    assert_eq!(rate_limit_delay(Some("not-a-date"), fixed_now()), FALLBACK_DELAY);
  }
}
