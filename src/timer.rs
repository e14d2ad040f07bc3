use std::time::{Duration, Instant};

/// Result of polling the capture timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// Whole seconds left on the visible countdown.
    pub remaining_secs: u64,
    /// The capture interval has elapsed.
    pub due: bool,
}

/// Countdown between captures, driven by periodic polling.
///
/// The timer never fires on its own; accuracy is bounded by how often
/// [`CaptureTimer::poll`] is called.
#[derive(Clone, Debug)]
pub struct CaptureTimer {
    interval: Duration,
    started: Instant,
}

impl CaptureTimer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            started: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn poll(&self, now: Instant) -> Tick {
        let elapsed = now.saturating_duration_since(self.started);
        Tick {
            remaining_secs: self.interval.as_secs().saturating_sub(elapsed.as_secs()),
            due: elapsed >= self.interval,
        }
    }

    pub fn restart(&mut self, now: Instant) {
        self.started = now;
    }
}
