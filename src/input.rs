//! Per-frame input snapshot
//!
//! The host polls its window system once per frame and fills a
//! [`FrameInput`]. Scenes read it synchronously; nothing calls back into
//! scene state from input handlers.

use std::collections::HashSet;

/// Keys the labs react to
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Space,
    Digit1,
    Digit2,
    Digit3,
    /// Platform-dependent key not represented here
    Unknown(u32),
}

impl Key {
    /// Palette slot selected by a digit key (`1` -> 0)
    pub fn palette_slot(&self) -> Option<usize> {
        match self {
            Key::Digit1 => Some(0),
            Key::Digit2 => Some(1),
            Key::Digit3 => Some(2),
            _ => None,
        }
    }
}

/// Everything a scene needs to know about one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Keys currently held
    pub keys_down: HashSet<Key>,
    /// Keys that went down since the previous frame (subset of `keys_down`)
    pub keys_pressed: HashSet<Key>,
    /// Vertical scroll accumulated since the previous frame
    pub scroll_delta: f32,
    /// Seconds since the previous frame
    pub delta_time: f32,
    /// Host clock in seconds
    pub time: f64,
}

impl FrameInput {
    /// Empty input at `time`, `delta_time` seconds after the previous frame
    pub fn at(time: f64, delta_time: f32) -> Self {
        Self {
            time,
            delta_time,
            ..Default::default()
        }
    }

    /// Key held since an earlier frame
    pub fn with_key_down(mut self, key: Key) -> Self {
        self.keys_down.insert(key);
        self
    }

    /// Key that went down this frame; it also counts as held
    pub fn with_key_pressed(mut self, key: Key) -> Self {
        self.keys_pressed.insert(key);
        self.keys_down.insert(key);
        self
    }

    pub fn with_scroll(mut self, delta: f32) -> Self {
        self.scroll_delta += delta;
        self
    }

    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// Press edge: true only on the frame the key went down
    #[inline]
    pub fn was_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    #[inline]
    pub fn frame_delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Palette slot of the held digit keys; the highest digit wins
    pub fn palette_slot(&self) -> Option<usize> {
        self.keys_down.iter().filter_map(Key::palette_slot).max()
    }
}
