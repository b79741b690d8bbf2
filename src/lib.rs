//! Rage Arena - a two-player local arena fighter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collisions, per-frame tick)
//! - `input`: Keyboard and virtual joystick input, merged into movement intent
//! - `hud`: Health bar layout handed to the renderer
//! - `screen`: Screen lifecycle and the renderer/input collaborator traits
//! - `tuning`: Data-driven game balance

pub mod hud;
pub mod input;
pub mod screen;
pub mod sim;
pub mod tuning;

pub use screen::{ArenaScreen, Renderer, Screen};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Virtual world dimensions (world units)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 480.0;
    /// Floor plane height
    pub const GROUND_Y: f32 = 60.0;

    /// Largest frame delta the simulation will integrate (caps lag spikes)
    pub const MAX_FRAME_DT: f32 = 1.0 / 30.0;

    /// Player body defaults
    pub const PLAYER_RADIUS: f32 = 30.0;
    pub const MAX_HEALTH: f32 = 100.0;
    /// Spawn x positions as a fraction of world width
    pub const P1_SPAWN_FRACTION: f32 = 0.2;
    pub const P2_SPAWN_FRACTION: f32 = 0.8;

    /// Movement tuning
    pub const MOVE_SPEED: f32 = 250.0;
    pub const JUMP_VELOCITY: f32 = 400.0;
    /// Downward acceleration (units/s², negative = down)
    pub const GRAVITY: f32 = -900.0;

    /// Virtual joystick sizing (screen pixels)
    pub const JOYSTICK_BASE_RADIUS: f32 = 128.0;
    pub const JOYSTICK_THUMB_RADIUS: f32 = 48.0;
    /// Drags shorter than this are ignored
    pub const JOYSTICK_DEAD_ZONE: f32 = 20.0;
    /// Gap between the joystick base and the screen edges
    pub const JOYSTICK_EDGE_PAD: f32 = 30.0;

    /// Horizontal stick deflection needed before the joystick overrides keys
    pub const STICK_AXIS_DEAD_ZONE: f32 = 0.15;
    /// Upward stick deflection that triggers a jump
    pub const STICK_JUMP_THRESHOLD: f32 = 0.5;

    /// Simultaneous pointers scanned per frame
    pub const MAX_POINTERS: usize = 10;
}
