//! Trailing-edge debounce driven by an external clock.
//!
//! The caller passes `now` explicitly so the UI frame loop, the CLI and the
//! tests all share the same logic without a timer thread.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debounced<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debounced<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a new value. Any previously pending value is replaced and the
    /// quiet period restarts from `now`.
    pub fn set(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending value is released.
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, at)| (*at + self.delay).saturating_duration_since(now))
    }

    /// Release the pending value once the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = match &self.pending {
            Some((_, at)) => now.saturating_duration_since(*at) >= self.delay,
            None => false,
        };
        if ready {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(250);

    #[test]
    fn nothing_before_delay() {
        let t0 = Instant::now();
        let mut d = Debounced::new(DELAY);
        d.set(1, t0);
        assert_eq!(d.poll(t0 + Duration::from_millis(249)), None);
        assert!(d.is_pending());
        assert_eq!(d.poll(t0 + DELAY), Some(1));
        assert!(!d.is_pending());
        assert_eq!(d.poll(t0 + Duration::from_secs(5)), None);
    }

    #[test]
    fn burst_collapses_to_last_value() {
        let t0 = Instant::now();
        let mut d = Debounced::new(DELAY);
        d.set(3, t0);
        d.set(4, t0 + Duration::from_millis(100));
        d.set(5, t0 + Duration::from_millis(200));
        // 250ms after the first edit but only 50ms after the last one.
        assert_eq!(d.poll(t0 + Duration::from_millis(250)), None);
        assert_eq!(d.poll(t0 + Duration::from_millis(450)), Some(5));
    }

    #[test]
    fn remaining_time_counts_down() {
        let t0 = Instant::now();
        let mut d: Debounced<u8> = Debounced::new(DELAY);
        assert_eq!(d.time_remaining(t0), None);
        d.set(1, t0);
        assert_eq!(
            d.time_remaining(t0 + Duration::from_millis(100)),
            Some(Duration::from_millis(150))
        );
        assert_eq!(d.time_remaining(t0 + Duration::from_secs(1)), Some(Duration::ZERO));
    }

    #[test]
    fn cancel_drops_pending() {
        let t0 = Instant::now();
        let mut d = Debounced::new(DELAY);
        d.set("x", t0);
        assert_eq!(d.cancel(), Some("x"));
        assert_eq!(d.poll(t0 + DELAY), None);
    }
}
