//! Time-based input debouncing

use crate::consts::DEBOUNCE_INTERVAL;

/// Rejects repeats of a held input that arrive within `min_interval` seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputDebouncer {
    /// Time of the last accepted event (seconds, host clock)
    pub last_event_time: f64,
    /// Minimum spacing between accepted events
    pub min_interval: f64,
}

impl Default for InputDebouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_INTERVAL)
    }
}

impl InputDebouncer {
    pub fn new(min_interval: f64) -> Self {
        Self {
            last_event_time: f64::NEG_INFINITY,
            min_interval,
        }
    }

    /// Accept the event at `now` if enough time has passed since the last one
    pub fn accept(&mut self, now: f64) -> bool {
        if now - self.last_event_time > self.min_interval {
            self.last_event_time = now;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_event_accepted() {
        let mut d = InputDebouncer::default();
        assert!(d.accept(0.0));
        assert_eq!(d.last_event_time, 0.0);
    }

    #[test]
    fn test_rejects_within_interval() {
        let mut d = InputDebouncer::new(0.25);
        assert!(d.accept(1.0));
        assert!(!d.accept(1.1));
        assert!(!d.accept(1.25));
        // Rejected events don't extend the window
        assert!(d.accept(1.26));
    }

    #[test]
    fn test_held_key_repeats_at_interval() {
        let mut d = InputDebouncer::new(0.25);
        let accepted: Vec<f64> = (0..16)
            .map(|frame| frame as f64 * 0.125)
            .filter(|&t| d.accept(t))
            .collect();
        assert_eq!(accepted, vec![0.0, 0.375, 0.75, 1.125, 1.5, 1.875]);
    }
}
