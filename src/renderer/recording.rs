//! CPU-side backend that records what a scene uploads

use std::collections::HashMap;

use glam::Mat4;

use super::RenderBackend;
use super::vertex::Vertex;

/// Keeps the latest uploads and counts how often each kind happened
#[derive(Debug, Default, Clone)]
pub struct RecordingBackend {
    pub vertex_data: Vec<f32>,
    pub stride: usize,
    pub indices: Vec<u32>,
    pub vec3_uniforms: HashMap<String, [f32; 3]>,
    pub mat4_uniforms: HashMap<String, Mat4>,
    pub texture_slot: Option<usize>,
    pub vertex_uploads: u32,
    pub index_uploads: u32,
    pub vec3_writes: u32,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vec3(&self, name: &str) -> Option<[f32; 3]> {
        self.vec3_uniforms.get(name).copied()
    }

    pub fn mat4(&self, name: &str) -> Option<Mat4> {
        self.mat4_uniforms.get(name).copied()
    }

    /// Number of vertices in the last vertex upload
    pub fn vertex_count(&self) -> usize {
        if self.stride == 0 {
            0
        } else {
            self.vertex_data.len() / self.stride
        }
    }

    /// Last vertex upload decoded into GPU vertices
    pub fn vertices(&self) -> Vec<Vertex> {
        Vertex::from_interleaved(&self.vertex_data, self.stride)
    }
}

impl RenderBackend for RecordingBackend {
    fn upload_vertex_data(&mut self, data: &[f32], stride: usize) {
        self.vertex_data = data.to_vec();
        self.stride = stride;
        self.vertex_uploads += 1;
    }

    fn upload_index_data(&mut self, indices: &[u32]) {
        self.indices = indices.to_vec();
        self.index_uploads += 1;
    }

    fn set_uniform_vec3(&mut self, name: &str, value: [f32; 3]) {
        self.vec3_uniforms.insert(name.to_owned(), value);
        self.vec3_writes += 1;
    }

    fn set_uniform_mat4(&mut self, name: &str, value: Mat4) {
        self.mat4_uniforms.insert(name.to_owned(), value);
    }

    fn select_texture(&mut self, slot: usize) {
        self.texture_slot = Some(slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_latest_upload() {
        let mut backend = RecordingBackend::new();
        backend.upload_vertex_data(&[0.0; 15], 5);
        backend.upload_vertex_data(&[0.0; 9], 3);
        backend.upload_index_data(&[0, 1, 2]);

        assert_eq!(backend.vertex_uploads, 2);
        assert_eq!(backend.vertex_count(), 3);
        assert_eq!(backend.vertices().len(), 3);
        assert_eq!(backend.indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_uniforms() {
        let mut backend = RecordingBackend::new();
        backend.set_uniform_vec3("color", [0.1, 0.2, 0.3]);
        backend.set_uniform_mat4("model", Mat4::IDENTITY);
        backend.select_texture(1);

        assert_eq!(backend.vec3("color"), Some([0.1, 0.2, 0.3]));
        assert_eq!(backend.mat4("model"), Some(Mat4::IDENTITY));
        assert_eq!(backend.vec3("missing"), None);
        assert_eq!(backend.texture_slot, Some(1));
    }
}
