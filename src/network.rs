use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::trace;

pub const DEFAULT_MAX_DELAY_MS: u64 = 800;

/// Artificial stand-in for network round-trip time.
///
/// A keyed call sleeps a random 0..max duration the first time the key is
/// seen and returns immediately on repeats. A call without a key forgets
/// every seen key, then sleeps. A zero max disables sleeping entirely.
#[derive(Debug)]
pub struct FakeNetwork {
    pub seen: HashSet<String>,
    pub max_delay: Duration,
}

impl FakeNetwork {
    pub fn new(max_delay: Duration) -> Self {
        FakeNetwork {
            seen: HashSet::new(),
            max_delay,
        }
    }

    /// Max delay from `FAKE_LATENCY_MS`, falling back to
    /// [`DEFAULT_MAX_DELAY_MS`].
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let ms = std::env::var("FAKE_LATENCY_MS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_MAX_DELAY_MS);
        Self::new(Duration::from_millis(ms))
    }

    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&mut self, key: Option<&str>) {
        let Some(key) = key else {
            self.seen.clear();
            self.sleep();
            return;
        };

        if !self.seen.insert(key.to_string()) {
            trace!(key, "seen before, skipping delay");
            return;
        }
        self.sleep();
    }

    pub fn reset(&mut self) {
        self.seen.clear();
    }

    fn sleep(&self) {
        let cap = self.max_delay.as_millis() as u64;
        if cap == 0 {
            return;
        }

        let ms = rand::thread_rng().gen_range(0..cap);
        trace!(ms, "sleeping");
        thread::sleep(Duration::from_millis(ms));
    }
}
