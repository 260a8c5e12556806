//! Circle lab: a scroll-resizable polygon with color keys and texture toggle

use crate::error::Result;
use crate::geometry::{Polygon, SegmentCount, TexCoords, rebuild};
use crate::input::{FrameInput, Key};
use crate::renderer::{RenderBackend, uniforms};
use crate::settings::Settings;
use crate::sim::InputDebouncer;

/// Number of textures the space bar cycles through
pub const TEXTURE_SLOTS: usize = 2;

/// What changed during one circle frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CircleFrame {
    /// New segment count, if the polygon was rebuilt
    pub rebuilt: Option<u32>,
    /// Palette slot written to the tint uniform
    pub tint: Option<usize>,
    /// Texture slot selected this frame
    pub texture: Option<usize>,
}

pub struct CircleScene {
    radius: f32,
    tex: TexCoords,
    segments: SegmentCount,
    polygon: Polygon,
    palette: [[f32; 3]; 3],
    initial_tint: [f32; 3],
    debouncer: InputDebouncer,
    texture_slot: usize,
}

impl CircleScene {
    pub fn new(settings: &Settings) -> Result<Self> {
        let segments = SegmentCount::new(settings.initial_segments, settings.min_segments);
        let tex = settings.tex_coords();
        let polygon = rebuild(settings.polygon_radius, segments.get(), tex)?;

        log::info!(
            "Circle scene: radius={}, segments={}, textured={}",
            settings.polygon_radius,
            segments.get(),
            settings.textured
        );

        Ok(Self {
            radius: settings.polygon_radius,
            tex,
            segments,
            polygon,
            palette: settings.palette,
            initial_tint: settings.initial_tint,
            debouncer: InputDebouncer::new(settings.debounce_interval),
            texture_slot: 0,
        })
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn segments(&self) -> u32 {
        self.segments.get()
    }

    pub fn texture_slot(&self) -> usize {
        self.texture_slot
    }

    /// Initial upload: geometry, starting tint and texture
    pub fn upload_all(&self, backend: &mut impl RenderBackend) {
        self.upload_geometry(backend);
        backend.set_uniform_vec3(uniforms::TINT, self.initial_tint);
        if self.tex == TexCoords::Directional {
            backend.select_texture(self.texture_slot);
        }
    }

    fn upload_geometry(&self, backend: &mut impl RenderBackend) {
        backend.upload_vertex_data(&self.polygon.vertex_data(), self.polygon.stride());
        backend.upload_index_data(&self.polygon.indices);
    }

    /// Process one frame of input
    ///
    /// The polygon is rebuilt and re-uploaded only when the segment count
    /// actually changes. On error nothing is modified.
    pub fn frame(
        &mut self,
        input: &FrameInput,
        backend: &mut impl RenderBackend,
    ) -> Result<CircleFrame> {
        let mut report = CircleFrame::default();

        let mut segments = self.segments;
        if let Some(n) = segments.apply_scroll(input.scroll_delta) {
            let polygon = rebuild(self.radius, n, self.tex)?;
            self.segments = segments;
            self.polygon = polygon;
            self.upload_geometry(backend);
            log::info!("Circle rebuilt with {} segments", n);
            report.rebuilt = Some(n);
        }

        if let Some(slot) = input.palette_slot() {
            backend.set_uniform_vec3(uniforms::TINT, self.palette[slot]);
            report.tint = Some(slot);
        }

        if self.tex == TexCoords::Directional
            && input.is_key_down(Key::Space)
            && self.debouncer.accept(input.time)
        {
            self.texture_slot = (self.texture_slot + 1) % TEXTURE_SLOTS;
            backend.select_texture(self.texture_slot);
            log::debug!("Texture slot {}", self.texture_slot);
            report.texture = Some(self.texture_slot);
        }

        Ok(report)
    }
}
