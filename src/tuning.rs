//! Game tuning
//!
//! Every balance number the simulation reads lives here, so a match can be
//! built with a custom configuration instead of touching shared constants.
//! Any subset of fields can be overridden from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::ArenaBounds;

/// Errors from loading a tuning file
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Virtual joystick sizing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoystickTuning {
    pub base_radius: f32,
    pub thumb_radius: f32,
    pub dead_zone: f32,
    /// Gap between the base circle and the screen corner
    pub edge_pad: f32,
}

impl Default for JoystickTuning {
    fn default() -> Self {
        Self {
            base_radius: JOYSTICK_BASE_RADIUS,
            thumb_radius: JOYSTICK_THUMB_RADIUS,
            dead_zone: JOYSTICK_DEAD_ZONE,
            edge_pad: JOYSTICK_EDGE_PAD,
        }
    }
}

impl JoystickTuning {
    /// Distance from the screen corner to a joystick center on each axis
    pub fn corner_offset(&self) -> f32 {
        self.base_radius + self.edge_pad
    }
}

/// Immutable match configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub world_width: f32,
    pub world_height: f32,
    pub ground_y: f32,
    pub max_frame_dt: f32,

    // === Players ===
    pub player_radius: f32,
    pub max_health: f32,
    pub spawn_fractions: [f32; 2],

    // === Movement ===
    pub move_speed: f32,
    pub jump_velocity: f32,
    pub gravity: f32,

    // === Input ===
    pub joystick: JoystickTuning,
    pub stick_axis_dead_zone: f32,
    pub stick_jump_threshold: f32,
    pub max_pointers: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            ground_y: GROUND_Y,
            max_frame_dt: MAX_FRAME_DT,

            player_radius: PLAYER_RADIUS,
            max_health: MAX_HEALTH,
            spawn_fractions: [P1_SPAWN_FRACTION, P2_SPAWN_FRACTION],

            move_speed: MOVE_SPEED,
            jump_velocity: JUMP_VELOCITY,
            gravity: GRAVITY,

            joystick: JoystickTuning::default(),
            stick_axis_dead_zone: STICK_AXIS_DEAD_ZONE,
            stick_jump_threshold: STICK_JUMP_THRESHOLD,
            max_pointers: MAX_POINTERS,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning document; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a tuning file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                log::warn!("Using default tuning: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Floor and side walls of the arena
    pub fn bounds(&self) -> ArenaBounds {
        ArenaBounds {
            ground_y: self.ground_y,
            min_x: 0.0,
            max_x: self.world_width,
        }
    }

    /// Clamp a frame delta to the largest step the simulation integrates
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        dt.min(self.max_frame_dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let tuning = Tuning::default();
        assert_eq!(tuning.move_speed, 250.0);
        assert_eq!(tuning.jump_velocity, 400.0);
        assert_eq!(tuning.gravity, -900.0);
        assert_eq!(tuning.player_radius, 30.0);
        assert_eq!(tuning.ground_y, 60.0);
        assert_eq!(tuning.joystick.corner_offset(), 158.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning =
            Tuning::from_json(r#"{ "move_speed": 300.0, "joystick": { "dead_zone": 5.0 } }"#)
                .unwrap();
        assert_eq!(tuning.move_speed, 300.0);
        assert_eq!(tuning.joystick.dead_zone, 5.0);
        assert_eq!(tuning.joystick.base_radius, JOYSTICK_BASE_RADIUS);
        assert_eq!(tuning.gravity, GRAVITY);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("/nonexistent/rage-arena/tuning.json");
        assert!(matches!(Tuning::load(path), Err(TuningError::Io(_))));
        assert_eq!(Tuning::load_or_default(Some(path)), Tuning::default());
    }

    #[test]
    fn test_clamp_dt() {
        let tuning = Tuning::default();
        assert_eq!(tuning.clamp_dt(1.0 / 60.0), 1.0 / 60.0);
        assert_eq!(tuning.clamp_dt(0.5), MAX_FRAME_DT);
    }
}
