//! Scroll-driven polygon resolution

use crate::consts::{MIN_FAN_SEGMENTS, MIN_SEGMENTS};

/// Current polygon segment count with a lower usability floor
///
/// Scrolling up adds a segment without bound; scrolling down removes one
/// only while above the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentCount {
    value: u32,
    min: u32,
}

impl Default for SegmentCount {
    fn default() -> Self {
        Self::new(MIN_SEGMENTS, MIN_SEGMENTS)
    }
}

impl SegmentCount {
    /// `initial` is raised to `min`; `min` itself never drops below a valid fan
    pub fn new(initial: u32, min: u32) -> Self {
        let min = min.max(MIN_FAN_SEGMENTS);
        Self {
            value: initial.max(min),
            min,
        }
    }

    #[inline]
    pub fn get(&self) -> u32 {
        self.value
    }

    #[inline]
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Apply one frame's scroll delta, returning the new count if it changed
    pub fn apply_scroll(&mut self, delta: f32) -> Option<u32> {
        if delta > 0.0 {
            self.value = self.value.saturating_add(1);
            Some(self.value)
        } else if delta < 0.0 && self.value > self.min {
            self.value -= 1;
            Some(self.value)
        } else {
            None
        }
    }
}
