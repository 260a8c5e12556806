//! Disc kinematics inside an axis-aligned arena
//!
//! The arena spans `[0, width] x [0, height]` with y growing downward, the
//! same convention as the orthographic projection the bounce lab draws with.
//! Walls reflect elastically: the offending velocity component is negated
//! and the position is clamped back inside, so speed never changes.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH, DISC_RADIUS};

/// Rectangular bounds of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a disc of this radius fits with its center at `pos`
    pub fn contains_disc(&self, pos: Vec2, radius: f32) -> bool {
        pos.x >= radius
            && pos.x <= self.width - radius
            && pos.y >= radius
            && pos.y <= self.height - radius
    }
}

/// Disc lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DiscPhase {
    /// Waiting for the launch trigger
    #[default]
    AtRest,
    /// Free-moving; there is no way back to rest
    Moving,
}

/// Arena edge that stopped the disc
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
    /// y = 0 edge
    Top,
    /// y = height edge
    Bottom,
}

/// Signal that at least one axis was corrected during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionEvent {
    /// Wall hit on the x axis, if any
    pub x_wall: Option<Wall>,
    /// Wall hit on the y axis, if any
    pub y_wall: Option<Wall>,
}

impl CollisionEvent {
    /// Both axes were corrected in the same step
    pub fn is_corner(&self) -> bool {
        self.x_wall.is_some() && self.y_wall.is_some()
    }
}

/// A single simulated disc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub phase: DiscPhase,
    pub arena: Arena,
}

impl Default for DiscState {
    fn default() -> Self {
        Self::at_rest(Arena::default(), DISC_RADIUS)
    }
}

impl DiscState {
    /// A resting disc at the arena center
    ///
    /// The arena must be at least `2 * radius` on both axes.
    pub fn at_rest(arena: Arena, radius: f32) -> Self {
        debug_assert!(
            arena.width >= 2.0 * radius && arena.height >= 2.0 * radius,
            "arena {}x{} cannot hold a disc of radius {}",
            arena.width,
            arena.height,
            radius
        );
        Self {
            position: arena.center(),
            velocity: Vec2::ZERO,
            radius,
            phase: DiscPhase::AtRest,
            arena,
        }
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.phase == DiscPhase::Moving
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Start moving along `direction` (radians) at `speed`
    ///
    /// Returns false without touching the state if the disc already moves.
    pub fn launch(&mut self, direction: f32, speed: f32) -> bool {
        if self.is_moving() {
            return false;
        }
        self.velocity = Vec2::from_angle(direction) * speed;
        self.phase = DiscPhase::Moving;
        log::debug!(
            "Disc launched: direction={:.3} rad, velocity={:?}",
            direction,
            self.velocity
        );
        true
    }

    /// Launch in a direction sampled uniformly from `[0, 2π)`
    pub fn launch_random<R: Rng>(&mut self, rng: &mut R, speed: f32) -> bool {
        if self.is_moving() {
            return false;
        }
        let direction = rng.random_range(0.0..TAU);
        self.launch(direction, speed)
    }

    /// Advance by `velocity * delta_time * speed_scale` and resolve wall hits
    ///
    /// Each axis is checked independently after the move, so a corner hit
    /// corrects and reflects both. On return the disc is always inside
    /// `[radius, dimension - radius]` on both axes.
    pub fn step(&mut self, delta_time: f32, speed_scale: f32) -> Option<CollisionEvent> {
        if !self.is_moving() {
            return None;
        }

        self.position += self.velocity * delta_time * speed_scale;

        let r = self.radius;
        let x_wall = resolve_axis(
            &mut self.position.x,
            &mut self.velocity.x,
            r,
            self.arena.width,
            Wall::Left,
            Wall::Right,
        );
        let y_wall = resolve_axis(
            &mut self.position.y,
            &mut self.velocity.y,
            r,
            self.arena.height,
            Wall::Top,
            Wall::Bottom,
        );

        if x_wall.is_none() && y_wall.is_none() {
            return None;
        }

        let event = CollisionEvent { x_wall, y_wall };
        log::debug!("Disc collision {:?} at {:?}", event, self.position);
        Some(event)
    }
}

/// Clamp one coordinate into `[radius, extent - radius]`, reflecting on contact
fn resolve_axis(
    pos: &mut f32,
    vel: &mut f32,
    radius: f32,
    extent: f32,
    low: Wall,
    high: Wall,
) -> Option<Wall> {
    if *pos - radius < 0.0 {
        *pos = radius;
        *vel = -*vel;
        Some(low)
    } else if *pos + radius > extent {
        *pos = extent - radius;
        *vel = -*vel;
        Some(high)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn moving(pos: Vec2, vel: Vec2) -> DiscState {
        DiscState {
            position: pos,
            velocity: vel,
            radius: 25.0,
            phase: DiscPhase::Moving,
            arena: Arena::new(800.0, 600.0),
        }
    }

    #[test]
    fn test_starts_at_rest_in_center() {
        let disc = DiscState::default();
        assert_eq!(disc.phase, DiscPhase::AtRest);
        assert_eq!(disc.position, Vec2::new(400.0, 300.0));
        assert_eq!(disc.velocity, Vec2::ZERO);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cannot hold a disc")]
    fn test_at_rest_rejects_undersized_arena() {
        DiscState::at_rest(Arena::new(40.0, 600.0), 25.0);
    }

    #[test]
    fn test_at_rest_accepts_exact_fit() {
        let disc = DiscState::at_rest(Arena::new(50.0, 50.0), 25.0);
        assert!(disc.arena.contains_disc(disc.position, disc.radius));
    }

    #[test]
    fn test_step_at_rest_is_noop() {
        let mut disc = DiscState::default();
        let before = disc.clone();
        assert!(disc.step(1.0, 10.0).is_none());
        assert_eq!(disc, before);
    }

    #[test]
    fn test_straight_line_no_collision() {
        let mut disc = moving(Vec2::new(400.0, 300.0), Vec2::new(0.0, 50.0));
        let event = disc.step(1.0, 1.0);
        assert!(event.is_none());
        assert_eq!(disc.position, Vec2::new(400.0, 350.0));
        assert_eq!(disc.velocity, Vec2::new(0.0, 50.0));
    }

    #[test]
    fn test_left_wall_collision() {
        let mut disc = moving(Vec2::new(20.0, 300.0), Vec2::new(-100.0, 0.0));
        let event = disc.step(1.0, 1.0).expect("left wall should be hit");
        assert_eq!(event.x_wall, Some(Wall::Left));
        assert_eq!(event.y_wall, None);
        assert_eq!(disc.position, Vec2::new(25.0, 300.0));
        assert_eq!(disc.velocity, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_right_and_bottom_walls() {
        let mut disc = moving(Vec2::new(770.0, 300.0), Vec2::new(10.0, 0.0));
        let event = disc.step(1.0, 1.0).unwrap();
        assert_eq!(event.x_wall, Some(Wall::Right));
        assert_eq!(disc.position.x, 775.0);
        assert_eq!(disc.velocity.x, -10.0);

        let mut disc = moving(Vec2::new(400.0, 570.0), Vec2::new(0.0, 10.0));
        let event = disc.step(1.0, 1.0).unwrap();
        assert_eq!(event.y_wall, Some(Wall::Bottom));
        assert_eq!(disc.position.y, 575.0);
        assert_eq!(disc.velocity.y, -10.0);
    }

    #[test]
    fn test_corner_hit_reflects_both_axes() {
        let mut disc = moving(Vec2::new(30.0, 30.0), Vec2::new(-10.0, -10.0));
        let event = disc.step(1.0, 1.0).unwrap();
        assert!(event.is_corner());
        assert_eq!(event.x_wall, Some(Wall::Left));
        assert_eq!(event.y_wall, Some(Wall::Top));
        assert_eq!(disc.position, Vec2::new(25.0, 25.0));
        assert_eq!(disc.velocity, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_speed_scale_multiplies_displacement() {
        let mut disc = moving(Vec2::new(400.0, 300.0), Vec2::new(1.0, 0.0));
        disc.step(0.5, 10.0);
        assert_eq!(disc.position, Vec2::new(405.0, 300.0));
    }

    #[test]
    fn test_launch_twice_keeps_first_velocity() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut disc = DiscState::default();

        assert!(disc.launch_random(&mut rng, 100.0));
        assert!(disc.is_moving());
        let first = disc.velocity;

        assert!(!disc.launch_random(&mut rng, 100.0));
        assert!(!disc.launch(0.0, 500.0));
        assert_eq!(disc.velocity, first);
        assert!((first.length() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_launch_direction() {
        let mut disc = DiscState::default();
        disc.launch(std::f32::consts::FRAC_PI_2, 100.0);
        assert!(disc.velocity.x.abs() < 1e-4);
        assert!((disc.velocity.y - 100.0).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_stays_in_arena(
            seed in any::<u64>(),
            steps in proptest::collection::vec(0.0001f32..0.5, 1..200),
            scale in 0.1f32..20.0,
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut disc = DiscState::default();
            disc.launch_random(&mut rng, 100.0);
            for dt in steps {
                disc.step(dt, scale);
                prop_assert!(disc.arena.contains_disc(disc.position, disc.radius),
                    "escaped to {:?}", disc.position);
            }
        }

        #[test]
        fn prop_speed_preserved(
            x in 25.0f32..775.0,
            y in 25.0f32..575.0,
            angle in 0.0f32..TAU,
            speed in 1.0f32..1000.0,
            dt in 0.0001f32..2.0,
        ) {
            let mut disc = moving(Vec2::new(x, y), Vec2::from_angle(angle) * speed);
            let before = disc.speed();
            disc.step(dt, 10.0);
            prop_assert!((disc.speed() - before).abs() <= before * 1e-6);
        }
    }
}
