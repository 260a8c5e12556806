//! Rendering backends
//!
//! Scenes talk to the graphics API only through [`RenderBackend`]. The
//! [`RecordingBackend`] keeps everything on the CPU; [`GpuBackend`] owns wgpu
//! buffers and a small textured-polygon pipeline.

pub mod gpu;
pub mod recording;
pub mod vertex;

pub use gpu::GpuBackend;
pub use recording::RecordingBackend;
pub use vertex::Vertex;

use glam::Mat4;

/// Uniform names understood by the backends
pub mod uniforms {
    /// Polygon tint in the circle labs
    pub const TINT: &str = "uColor";
    /// Disc colour in the bounce lab
    pub const COLOR: &str = "color";
    pub const MODEL: &str = "model";
    pub const PROJECTION: &str = "projection";
}

/// Graphics services a scene needs from its host
pub trait RenderBackend {
    /// Replace the vertex buffer with interleaved floats, `stride` per vertex
    fn upload_vertex_data(&mut self, data: &[f32], stride: usize);

    /// Replace the index buffer (triangle list)
    fn upload_index_data(&mut self, indices: &[u32]);

    fn set_uniform_vec3(&mut self, name: &str, value: [f32; 3]);

    fn set_uniform_mat4(&mut self, name: &str, value: Mat4);

    /// Bind one of the host-loaded textures
    fn select_texture(&mut self, slot: usize);
}
