//! Circle Lab - procedural polygons and a bouncing disc for small rendering labs
//!
//! Core modules:
//! - `geometry`: Fan-triangulated regular polygons and the scroll-driven segment count
//! - `sim`: Disc kinematics inside a rectangular arena, input debouncing
//! - `input`: Per-frame input snapshot filled by the host
//! - `scene`: Host composition (circle lab, bounce lab) over a `RenderBackend`
//! - `renderer`: Vertex layout, CPU recording backend, wgpu backend
//! - `settings`: JSON configuration

pub mod error;
pub mod geometry;
pub mod input;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::Settings;

use glam::Vec2;

/// Lab configuration constants
pub mod consts {
    /// Arena dimensions (window size of the bounce lab, in pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Disc defaults
    pub const DISC_RADIUS: f32 = 25.0;
    /// Launch speed magnitude (units/second before scaling)
    pub const LAUNCH_SPEED: f32 = 100.0;
    /// Multiplier applied to velocity * dt every step
    pub const SPEED_SCALE: f32 = 10.0;

    /// Circle lab polygon radius (normalized device units)
    pub const POLYGON_RADIUS: f32 = 0.7;
    /// Segment count floor enforced at the input boundary
    pub const MIN_SEGMENTS: u32 = 8;
    /// Fewest segments that still form a triangle fan
    pub const MIN_FAN_SEGMENTS: u32 = 3;
    /// Segment count of the unit disc drawn by the bounce lab
    pub const DISC_SEGMENTS: u32 = 100;

    /// Minimum seconds between accepted texture toggles
    pub const DEBOUNCE_INTERVAL: f64 = 0.25;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
