//! Helpers shared by the client's unit tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::backoff::Sleeper;
use crate::client::{Config, TicketForgeClient};

/// Records requested sleeps instead of blocking
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingSleeper {
  sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
  pub(crate) fn recorded(&self) -> Vec<Duration> {
    self.sleeps.lock().expect("sleeper mutex poisoned").clone()
  }
}

impl Sleeper for RecordingSleeper {
  fn sleep(&self, duration: Duration) {
    self.sleeps.lock().expect("sleeper mutex poisoned").push(duration);
  }
}

/// Client pointed at `base_url` with `test_user:test_pass` and a recording sleeper
pub(crate) fn test_client(base_url: &str) -> (TicketForgeClient, RecordingSleeper) {
  let sleeper = RecordingSleeper::default();
  let client = TicketForgeClient::new(Config::new(base_url, "test_user", "test_pass"))
    .expect("Failed to create test client")
    .with_sleeper(sleeper.clone());
  (client, sleeper)
}

/// Run blocking client code off the async test runtime.
///
/// The blocking reqwest client must not be created or dropped inside an async
/// context, so the whole closure runs on the blocking pool.
pub(crate) async fn run_blocking<T, F>(f: F) -> T
where
  F: FnOnce() -> T + Send + 'static,
  T: Send + 'static,
{
  tokio::task::spawn_blocking(f)
    .await
    .expect("Blocking test task panicked")
}
