//! Simulation module
//!
//! Disc kinematics and input timing. This module is pure:
//! - Time only arrives as an explicit delta from the host
//! - Randomness only through a caller-supplied RNG
//! - No rendering or platform dependencies

pub mod debounce;
pub mod disc;

pub use debounce::InputDebouncer;
pub use disc::{Arena, CollisionEvent, DiscPhase, DiscState, Wall};
