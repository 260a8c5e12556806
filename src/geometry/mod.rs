//! Procedural geometry
//!
//! Pure functions only: nothing here touches the graphics backend. Callers
//! own the generated data and push it to the GPU themselves.

pub mod polygon;
pub mod segments;

pub use polygon::{Polygon, TexCoords, rebuild};
pub use segments::SegmentCount;
