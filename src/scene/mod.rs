//! Host-side composition of the core
//!
//! One frame is: host fills a [`FrameInput`](crate::input::FrameInput) →
//! scene decides intents (launch, resize, recolor) → calls the pure core →
//! pushes results through a [`RenderBackend`](crate::renderer::RenderBackend).

pub mod bounce;
pub mod circle;

pub use bounce::BounceScene;
pub use circle::{CircleFrame, CircleScene};
