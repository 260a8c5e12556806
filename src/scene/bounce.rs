//! Bounce lab: a disc launched with the space bar, recolored on every wall hit

use glam::{Mat4, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::error::Result;
use crate::geometry::{Polygon, TexCoords, rebuild};
use crate::input::{FrameInput, Key};
use crate::renderer::vertex::colors;
use crate::renderer::{RenderBackend, uniforms};
use crate::settings::Settings;
use crate::sim::{CollisionEvent, DiscState};

pub struct BounceScene {
    disc: DiscState,
    /// Unit disc, placed and sized by the model matrix
    mesh: Polygon,
    rng: Pcg32,
    launch_speed: f32,
    speed_scale: f32,
    color: [f32; 3],
    collisions: u64,
}

impl BounceScene {
    pub fn new(settings: &Settings) -> Result<Self> {
        let mesh = rebuild(1.0, settings.disc_segments, TexCoords::Omit)?;
        let disc = DiscState::at_rest(settings.arena(), settings.disc_radius);

        log::info!(
            "Bounce scene: arena={}x{}, disc radius={}, seed={}",
            disc.arena.width,
            disc.arena.height,
            disc.radius,
            settings.seed
        );

        Ok(Self {
            disc,
            mesh,
            rng: Pcg32::seed_from_u64(settings.seed),
            launch_speed: settings.launch_speed,
            speed_scale: settings.speed_scale,
            color: colors::WHITE,
            collisions: 0,
        })
    }

    pub fn disc(&self) -> &DiscState {
        &self.disc
    }

    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    /// Collisions since the scene was created
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    /// Screen-space projection with y pointing down
    pub fn projection(&self) -> Mat4 {
        let arena = self.disc.arena;
        Mat4::orthographic_rh_gl(0.0, arena.width, arena.height, 0.0, -1.0, 1.0)
    }

    /// Places the unit disc at the current position, scaled to the radius
    pub fn model(&self) -> Mat4 {
        let r = self.disc.radius;
        Mat4::from_translation(self.disc.position.extend(0.0))
            * Mat4::from_scale(Vec3::new(r, r, 1.0))
    }

    pub fn upload_all(&self, backend: &mut impl RenderBackend) {
        backend.upload_vertex_data(&self.mesh.vertex_data(), self.mesh.stride());
        backend.upload_index_data(&self.mesh.indices);
        backend.set_uniform_mat4(uniforms::PROJECTION, self.projection());
        backend.set_uniform_mat4(uniforms::MODEL, self.model());
        backend.set_uniform_vec3(uniforms::COLOR, self.color);
    }

    /// Process one frame: launch on a space press, step, recolor on collision
    pub fn frame(
        &mut self,
        input: &FrameInput,
        backend: &mut impl RenderBackend,
    ) -> Option<CollisionEvent> {
        if input.was_pressed(Key::Space)
            && self.disc.launch_random(&mut self.rng, self.launch_speed)
        {
            log::info!("Disc launched with velocity {:?}", self.disc.velocity);
        }

        let event = self.disc.step(input.frame_delta_time(), self.speed_scale);
        if event.is_some() {
            self.collisions += 1;
            self.color = [
                self.rng.random_range(0.0..=1.0),
                self.rng.random_range(0.0..=1.0),
                self.rng.random_range(0.0..=1.0),
            ];
            backend.set_uniform_vec3(uniforms::COLOR, self.color);
        }

        backend.set_uniform_mat4(uniforms::MODEL, self.model());
        event
    }
}
