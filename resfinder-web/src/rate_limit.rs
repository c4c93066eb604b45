use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::clock::Clock;

struct Window {
    count: u32,
    reset_at: Instant,
}

/// Fixed-window request counter keyed by an arbitrary identifier.
///
/// A window opens on the first call for a key and is replaced lazily by the
/// first call that arrives after it has expired.
pub struct RateLimiter {
    windows: DashMap<String, Window>,
    limit: u32,
    window: Duration,
    clock: Arc<dyn Clock>,
}

impl RateLimiter {
    pub fn new(limit: u32, window: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            windows: DashMap::new(),
            limit,
            window,
            clock,
        }
    }

    /// Counts one call against `key`. Returns `false` once the window is full.
    pub fn check(&self, key: &str) -> bool {
        let now = self.clock.now();
        let mut window = self
            .windows
            .entry(key.to_string())
            .or_insert_with(|| Window {
                count: 0,
                reset_at: now + self.window,
            });

        if now > window.reset_at {
            *window = Window {
                count: 0,
                reset_at: now + self.window,
            };
        }

        if window.count >= self.limit {
            return false;
        }

        window.count += 1;
        true
    }
}
