use std::time::{Duration, Instant};

/// Fixed-interval tick scheduler for the game loop.
///
/// Ticks are scheduled on a fixed grid (`last_tick += interval`) so slow
/// frames do not push later ticks back. If the loop falls more than one
/// interval behind, the grid is re-anchored at `now` instead of bursting.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    interval: Duration,
    last_tick: Instant,
}

impl TickClock {
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_tick: now,
        }
    }

    /// Returns true when a step is due, and advances the schedule.
    ///
    /// Always false while the game is over: the clock stays parked until
    /// [`TickClock::rearm`].
    pub fn should_step(&mut self, is_over: bool, now: Instant) -> bool {
        if is_over || now.saturating_duration_since(self.last_tick) < self.interval {
            return false;
        }

        self.last_tick += self.interval;
        if now.saturating_duration_since(self.last_tick) >= self.interval {
            self.last_tick = now;
        }
        true
    }

    /// Restarts the schedule at `now`; used after a restart.
    pub fn rearm(&mut self, now: Instant) {
        self.last_tick = now;
    }

    /// How long the loop may wait for input before the next tick is due,
    /// capped at `max_wait`.
    #[must_use]
    pub fn poll_timeout(&self, is_over: bool, now: Instant, max_wait: Duration) -> Duration {
        if is_over {
            return max_wait;
        }

        self.interval
            .saturating_sub(now.saturating_duration_since(self.last_tick))
            .min(max_wait)
    }
}
