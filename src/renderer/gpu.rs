//! wgpu-backed render backend
//!
//! The host owns the window, surface and device; this backend owns the
//! polygon buffers, one uniform block, the registered textures and the
//! pipeline that draws them.
//!
//! Textures live in bind group 1. Slot `i` is the `i`-th texture registered
//! with [`GpuBackend::add_texture`] or [`GpuBackend::add_rgba_texture`];
//! until a registered slot is selected a 1x1 white texture is bound, so an
//! untextured polygon draws in its flat color.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use super::vertex::{Vertex, colors};
use super::{RenderBackend, uniforms};
use crate::error::{Error, Result};

// Must match `Uniforms` in shader.wgsl
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
struct Uniforms {
    model: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
    color: [f32; 4],
    tint: [f32; 4],
}

impl Default for Uniforms {
    fn default() -> Self {
        let white = [colors::WHITE[0], colors::WHITE[1], colors::WHITE[2], 1.0];
        Self {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            color: white,
            tint: white,
        }
    }
}

/// Store a vec3 uniform into its field; false for an unknown name
fn route_vec3(uniforms: &mut Uniforms, name: &str, value: [f32; 3]) -> bool {
    let rgba = [value[0], value[1], value[2], 1.0];
    match name {
        uniforms::COLOR => uniforms.color = rgba,
        uniforms::TINT => uniforms.tint = rgba,
        _ => {
            log::warn!("Unknown vec3 uniform: {}", name);
            return false;
        }
    }
    true
}

/// Store a mat4 uniform into its field; false for an unknown name
fn route_mat4(uniforms: &mut Uniforms, name: &str, value: Mat4) -> bool {
    let cols = value.to_cols_array_2d();
    match name {
        uniforms::MODEL => uniforms.model = cols,
        uniforms::PROJECTION => uniforms.projection = cols,
        _ => {
            log::warn!("Unknown mat4 uniform: {}", name);
            return false;
        }
    }
    true
}

/// GPU buffers and pipeline for one polygon
pub struct GpuBackend {
    device: wgpu::Device,
    queue: wgpu::Queue,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    uniforms: Uniforms,
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    index_count: u32,
    texture_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    white_texture: wgpu::BindGroup,
    textures: Vec<wgpu::BindGroup>,
    texture_slot: Option<usize>,
}

impl GpuBackend {
    pub fn new(device: wgpu::Device, queue: wgpu::Queue, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("polygon_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let uniforms = Uniforms::default();
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("uniforms"),
            contents: bytemuck::bytes_of(&uniforms),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("polygon_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("polygon_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("polygon_texture_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("polygon_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let white_view = upload_rgba(&device, &queue, "white_texture", 1, 1, &[255; 4]);
        let white_texture =
            texture_bind_group(&device, &texture_layout, &white_view, &sampler, "white");

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("polygon_pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout, &texture_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("polygon_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::info!("Polygon pipeline created for {:?}", format);

        Self {
            device,
            queue,
            pipeline,
            uniform_buffer,
            bind_group,
            uniforms,
            vertex_buffer: None,
            index_buffer: None,
            index_count: 0,
            texture_layout,
            sampler,
            white_texture,
            textures: Vec::new(),
            texture_slot: None,
        }
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Registered slot currently bound, `None` while the white fallback is
    pub fn texture_slot(&self) -> Option<usize> {
        self.texture_slot
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Register a host-loaded texture and return its slot
    pub fn add_texture(&mut self, view: &wgpu::TextureView, sampler: &wgpu::Sampler) -> usize {
        let slot = self.textures.len();
        let label = format!("texture_slot_{slot}");
        let layout = &self.texture_layout;
        let bind_group = texture_bind_group(&self.device, layout, view, sampler, &label);
        self.textures.push(bind_group);
        log::debug!("Registered texture slot {}", slot);
        slot
    }

    /// Upload tightly packed RGBA8 pixels and register them as the next slot
    pub fn add_rgba_texture(&mut self, width: u32, height: u32, rgba: &[u8]) -> Result<usize> {
        let expected = width as usize * height as usize * 4;
        if width == 0 || height == 0 || rgba.len() != expected {
            return Err(Error::InvalidArgument(format!(
                "{}x{} RGBA texture needs {} bytes, got {}",
                width,
                height,
                expected,
                rgba.len()
            )));
        }
        let view = upload_rgba(&self.device, &self.queue, "slot_texture", width, height, rgba);
        let sampler = self.sampler.clone();
        Ok(self.add_texture(&view, &sampler))
    }

    /// Record an indexed draw of the current polygon into `pass`
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        let (Some(vertices), Some(indices)) = (&self.vertex_buffer, &self.index_buffer) else {
            return;
        };
        let texture = self
            .texture_slot
            .and_then(|slot| self.textures.get(slot))
            .unwrap_or(&self.white_texture);
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_bind_group(1, texture, &[]);
        pass.set_vertex_buffer(0, vertices.slice(..));
        pass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }

    fn write_uniforms(&self) {
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&self.uniforms));
    }
}

/// Create a sampled 2D texture from RGBA8 pixels and return its view
fn upload_rgba(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    width: u32,
    height: u32,
    rgba: &[u8],
) -> wgpu::TextureView {
    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        size,
    );
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn texture_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

impl RenderBackend for GpuBackend {
    fn upload_vertex_data(&mut self, data: &[f32], stride: usize) {
        let vertices = Vertex::from_interleaved(data, stride);
        if vertices.is_empty() {
            self.vertex_buffer = None;
            return;
        }
        // Geometry only changes on rebuild, so a fresh buffer is fine
        self.vertex_buffer = Some(self.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("polygon_vertices"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        ));
    }

    fn upload_index_data(&mut self, indices: &[u32]) {
        self.index_count = indices.len() as u32;
        if indices.is_empty() {
            self.index_buffer = None;
            return;
        }
        self.index_buffer = Some(self.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("polygon_indices"),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        ));
    }

    fn set_uniform_vec3(&mut self, name: &str, value: [f32; 3]) {
        if route_vec3(&mut self.uniforms, name, value) {
            self.write_uniforms();
        }
    }

    fn set_uniform_mat4(&mut self, name: &str, value: Mat4) {
        if route_mat4(&mut self.uniforms, name, value) {
            self.write_uniforms();
        }
    }

    fn select_texture(&mut self, slot: usize) {
        if slot < self.textures.len() {
            self.texture_slot = Some(slot);
        } else {
            log::warn!(
                "Texture slot {} not registered ({} available), drawing untextured",
                slot,
                self.textures.len()
            );
            self.texture_slot = None;
        }
    }
}
