use std::time::{Duration, Instant};

/// Interval between session ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// How long the event loop waits for input before checking the tick source
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Something that decides when the session should receive a tick
pub trait TickSource {
    /// Returns true when a tick is due at `now`
    fn poll_tick(&mut self, now: Instant) -> bool;
}

/// Fires at most once per poll when an interval has passed since the last tick.
/// Missed ticks (e.g. while the process was suspended) are not replayed.
#[derive(Debug, Clone)]
pub struct IntervalTicker {
    interval: Duration,
    last_tick: Instant,
}

impl IntervalTicker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_tick: now,
        }
    }

    pub fn every_second(now: Instant) -> Self {
        Self::new(TICK_INTERVAL, now)
    }
}

impl TickSource for IntervalTicker {
    fn poll_tick(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) >= self.interval {
            self.last_tick = now;
            true
        } else {
            false
        }
    }
}
