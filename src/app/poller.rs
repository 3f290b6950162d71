// LogMonitor - app/poller.rs
//
// Fixed-interval tick source. egui has no timers, so the poller is driven by
// the frame loop: each frame asks whether a tick is due, and the GUI
// schedules its next repaint for `time_until_due`.

use std::time::{Duration, Instant};

/// Recurring timer that reports when the next reload should happen.
#[derive(Debug, Clone)]
pub struct Poller {
    interval: Duration,
    /// Instant at which the next tick becomes due. None = due immediately.
    next_due: Option<Instant>,
}

impl Poller {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a tick is due at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        self.next_due.map_or(true, |due| now >= due)
    }

    /// Consume a tick if one is due, scheduling the next one.
    ///
    /// Missed ticks are not replayed: the next tick is always one interval
    /// after `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.next_due = Some(now + self.interval);
        true
    }

    /// Time remaining until the next tick (zero if already due).
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due
            .map_or(Duration::ZERO, |due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_poll_is_due_immediately() {
        let mut poller = Poller::new(Duration::from_millis(100));
        let now = Instant::now();
        assert!(poller.is_due(now));
        assert!(poller.poll(now));
        assert!(!poller.poll(now));
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut poller = Poller::new(Duration::from_millis(100));
        let t0 = Instant::now();
        assert!(poller.poll(t0));
        assert!(!poller.poll(t0 + Duration::from_millis(99)));
        assert!(poller.poll(t0 + Duration::from_millis(100)));
        assert_eq!(
            poller.time_until_due(t0 + Duration::from_millis(130)),
            Duration::from_millis(70)
        );
    }

    #[test]
    fn test_missed_ticks_are_not_replayed() {
        let mut poller = Poller::new(Duration::from_millis(100));
        let t0 = Instant::now();
        poller.poll(t0);
        let late = t0 + Duration::from_millis(1_000);
        assert!(poller.poll(late));
        assert!(!poller.poll(late + Duration::from_millis(50)));
    }
}
