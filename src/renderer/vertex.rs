//! Vertex types for polygon rendering

use bytemuck::{Pod, Zeroable};

/// Polygon vertex with position and texture coordinates
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    /// Floats per vertex
    pub const STRIDE: usize = 5;

    pub const fn new(position: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Self {
            position,
            tex_coords,
        }
    }

    /// Rebuild vertices from an interleaved `x, y, z[, u, v]` buffer
    ///
    /// `stride` must be 3 or 5; texture coordinates default to zero for 3.
    pub fn from_interleaved(data: &[f32], stride: usize) -> Vec<Vertex> {
        if stride != 3 && stride != Self::STRIDE {
            log::warn!("Unsupported vertex stride {stride}, expected 3 or 5");
            return Vec::new();
        }
        data.chunks_exact(stride)
            .map(|v| {
                let uv = if stride == Self::STRIDE { [v[3], v[4]] } else { [0.0, 0.0] };
                Vertex::new([v[0], v[1], v[2]], uv)
            })
            .collect()
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Colors used by the labs
pub mod colors {
    pub const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
    pub const RED: [f32; 3] = [1.0, 0.0, 0.0];
    pub const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
    pub const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
    pub const CYAN: [f32; 3] = [0.0, 1.0, 1.0];
}
