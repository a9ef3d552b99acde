//! Frame Clock
//!
//! Fixed-interval ticks that drive one input poll each.

use std::time::{Duration, Instant};

/// Schedules frame ticks at a fixed interval.
///
/// Missed ticks are dropped rather than replayed, so a stalled loop resumes
/// with a single tick.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    next_tick: Instant,
    ticks: u64,
}

impl FrameClock {
    /// Create a clock whose first tick is due at `start`.
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            next_tick: start,
            ticks: 0,
        }
    }

    /// Check whether a tick is due at `now`.
    pub fn tick_due(&self, now: Instant) -> bool {
        now >= self.next_tick
    }

    /// Record a tick at `now` and schedule the next one.
    pub fn advance(&mut self, now: Instant) {
        self.ticks += 1;
        self.next_tick += self.interval;
        if self.next_tick <= now {
            self.next_tick = now + self.interval;
        }
    }

    /// When the next tick is due.
    pub fn next_deadline(&self) -> Instant {
        self.next_tick
    }

    /// Ticks taken so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(100);

    #[test]
    fn test_first_tick_due_at_start() {
        let start = Instant::now();
        let clock = FrameClock::new(STEP, start);
        assert!(clock.tick_due(start));
        assert_eq!(clock.ticks(), 0);
    }

    #[test]
    fn test_advance_schedules_next() {
        let start = Instant::now();
        let mut clock = FrameClock::new(STEP, start);
        clock.advance(start);

        assert_eq!(clock.ticks(), 1);
        assert_eq!(clock.next_deadline(), start + STEP);
        assert!(!clock.tick_due(start + Duration::from_millis(50)));
        assert!(clock.tick_due(start + STEP));
    }

    #[test]
    fn test_late_tick_keeps_cadence() {
        let start = Instant::now();
        let mut clock = FrameClock::new(STEP, start);
        clock.advance(start + Duration::from_millis(30));

        assert_eq!(clock.next_deadline(), start + STEP);
    }

    #[test]
    fn test_stall_skips_missed_ticks() {
        let start = Instant::now();
        let mut clock = FrameClock::new(STEP, start);
        clock.advance(start);

        let late = start + Duration::from_millis(550);
        assert!(clock.tick_due(late));
        clock.advance(late);

        assert_eq!(clock.next_deadline(), late + STEP);
        assert!(!clock.tick_due(late));
    }
}
