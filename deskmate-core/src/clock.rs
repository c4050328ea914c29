//! Clock seam for the simulated service latency.
//!
//! The worker pauses through this trait instead of calling
//! `thread::sleep` directly, so tests swap in [`InstantClock`] and the full
//! request/response path runs without real timers.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Something that can stand in for network latency.
pub trait Clock: Send {
    fn pause(&self, duration: Duration);
}

/// Real wall-clock pauses.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn pause(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Returns immediately, recording the total pause requested. Clones share
/// the same counter so a test can keep one handle and give the worker the
/// other.
#[derive(Debug, Clone, Default)]
pub struct InstantClock {
    paused: Arc<Mutex<Duration>>,
}

impl InstantClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total simulated time requested so far.
    pub fn total_paused(&self) -> Duration {
        *self.paused.lock().expect("clock mutex poisoned")
    }
}

impl Clock for InstantClock {
    fn pause(&self, duration: Duration) {
        let mut total = self.paused.lock().expect("clock mutex poisoned");
        *total += duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_clock_records_without_sleeping() {
        let clock = InstantClock::new();
        let handle = clock.clone();

        let start = std::time::Instant::now();
        clock.pause(Duration::from_millis(800));
        clock.pause(Duration::from_millis(800));
        assert!(start.elapsed() < Duration::from_millis(100));

        assert_eq!(handle.total_paused(), Duration::from_millis(1600));
    }
}
