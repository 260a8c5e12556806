//! Lab settings
//!
//! Loaded from an optional JSON file; every field falls back to the defaults
//! the labs were tuned with.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::geometry::TexCoords;
use crate::renderer::vertex::colors;
use crate::sim::Arena;

/// Settings for both labs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Circle lab ===
    /// Polygon radius in normalized device units
    pub polygon_radius: f32,
    /// Segment count at startup
    pub initial_segments: u32,
    /// Scroll-down floor for the segment count
    pub min_segments: u32,
    /// Generate texture coordinates for the circle
    pub textured: bool,
    /// Minimum seconds between texture toggles
    pub debounce_interval: f64,
    /// Colors bound to keys 1, 2 and 3
    pub palette: [[f32; 3]; 3],
    /// Tint before any color key is pressed
    pub initial_tint: [f32; 3],

    // === Bounce lab ===
    pub arena_width: f32,
    pub arena_height: f32,
    pub disc_radius: f32,
    /// Segments of the unit disc mesh
    pub disc_segments: u32,
    /// Launch speed magnitude
    pub launch_speed: f32,
    /// Extra multiplier on every step's displacement
    pub speed_scale: f32,
    /// RNG seed for launch directions and collision colors
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            polygon_radius: POLYGON_RADIUS,
            initial_segments: MIN_SEGMENTS,
            min_segments: MIN_SEGMENTS,
            textured: true,
            debounce_interval: DEBOUNCE_INTERVAL,
            palette: [colors::YELLOW, colors::GREEN, colors::CYAN],
            initial_tint: colors::RED,

            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            disc_radius: DISC_RADIUS,
            disc_segments: DISC_SEGMENTS,
            launch_speed: LAUNCH_SPEED,
            speed_scale: SPEED_SCALE,
            seed: 0x5eed,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file and validate them
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.polygon_radius > 0.0) {
            return Err(Error::Settings(format!(
                "polygon_radius must be positive, got {}",
                self.polygon_radius
            )));
        }
        if self.min_segments < MIN_FAN_SEGMENTS || self.disc_segments < MIN_FAN_SEGMENTS {
            return Err(Error::Settings(format!(
                "segment counts must be at least {MIN_FAN_SEGMENTS}"
            )));
        }
        if !(self.disc_radius > 0.0) {
            return Err(Error::Settings(format!(
                "disc_radius must be positive, got {}",
                self.disc_radius
            )));
        }
        let diameter = 2.0 * self.disc_radius;
        if !(self.arena_width >= diameter && self.arena_height >= diameter) {
            return Err(Error::Settings(format!(
                "arena {}x{} cannot hold a disc of radius {}",
                self.arena_width, self.arena_height, self.disc_radius
            )));
        }
        if !(self.launch_speed >= 0.0 && self.speed_scale >= 0.0) {
            return Err(Error::Settings(
                "launch_speed and speed_scale must be non-negative".into(),
            ));
        }
        if !(self.debounce_interval >= 0.0) {
            return Err(Error::Settings(
                "debounce_interval must be non-negative".into(),
            ));
        }
        Ok(())
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    pub fn tex_coords(&self) -> TexCoords {
        if self.textured {
            TexCoords::Directional
        } else {
            TexCoords::Omit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        settings.validate().unwrap();
        assert_eq!(settings.arena(), Arena::new(800.0, 600.0));
        assert_eq!(settings.tex_coords(), TexCoords::Directional);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "disc_radius": 10.0, "textured": false }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.disc_radius, 10.0);
        assert_eq!(settings.tex_coords(), TexCoords::Omit);
        assert_eq!(settings.launch_speed, LAUNCH_SPEED);
    }

    #[test]
    fn test_rejects_oversized_disc() {
        let err = Settings::from_json(r#"{ "disc_radius": 500.0 }"#).unwrap_err();
        assert!(matches!(err, Error::Settings(_)));
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_save_and_load() {
        let name = format!("circle-lab-settings-{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        let mut settings = Settings::default();
        settings.seed = 42;
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
