//! Player input
//!
//! Two input sources drive each fighter: a fixed set of keyboard keys and an
//! on-screen virtual joystick. Both are folded into one `MovementIntent` per
//! player per frame.

pub mod intent;
pub mod joystick;
pub mod keys;

pub use intent::{MovementIntent, resolve_intent};
pub use joystick::{JoystickSnapshot, JoystickState, TouchControls, VirtualJoystick};
pub use keys::{Key, KeyBindings, KeyState, KeyboardTracker};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Side;

/// Identifier of an active touch/pointer
pub type PointerId = u32;

/// An active pointer in screen space (Y up)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    pub id: PointerId,
    pub pos: Vec2,
}

impl Pointer {
    pub fn new(id: PointerId, x: f32, y: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(x, y),
        }
    }

    /// Build from window coordinates (origin top-left, Y down)
    pub fn from_top_left(id: PointerId, x: f32, y: f32, screen_height: f32) -> Self {
        Self::new(id, x, screen_height - y)
    }

    /// Which player's half of the screen this pointer is on
    pub fn side(&self, screen_width: f32) -> Side {
        if self.pos.x < screen_width / 2.0 {
            Side::P1
        } else {
            Side::P2
        }
    }
}

/// Where keyboard and pointer state comes from each frame
pub trait InputSource {
    /// Key is currently down
    fn is_key_held(&self, key: Key) -> bool;
    /// Key went down since the previous frame
    fn is_key_just_pressed(&self, key: Key) -> bool;
    /// Active pointers, in stable scan order
    fn pointers(&self) -> Vec<Pointer>;

    /// Key state for one player under their bindings
    fn key_state(&self, bindings: &KeyBindings) -> KeyState {
        KeyState {
            left: self.is_key_held(bindings.left),
            right: self.is_key_held(bindings.right),
            jump_pressed: self.is_key_just_pressed(bindings.jump),
        }
    }
}
