use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Minimum-interval gate for outgoing requests.
///
/// The remote site throttles aggressive clients, so every request goes
/// through one shared gate that enforces a floor on start-to-start
/// spacing. The first request is never delayed.
pub struct Throttle {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl Throttle {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    /// Block until at least the minimum interval has passed since the
    /// previous request, then record this attempt.
    ///
    /// The timestamp advances on every attempt, including ones whose
    /// HTTP call later fails.
    pub fn wait(&self) {
        let mut last = self.last_request.lock().expect("throttle mutex poisoned");

        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                let remaining = self.min_interval - elapsed;
                tracing::debug!("Throttling request: sleeping {:?}", remaining);
                std::thread::sleep(remaining);
            }
        }

        *last = Some(Instant::now());
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}
