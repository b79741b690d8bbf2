//! Keyboard + joystick merge
//!
//! Evaluation order is part of the contract: the negative key, then the
//! positive key, then the joystick. Later sources overwrite earlier ones, so
//! holding both keys moves right and an active stick beats the keyboard.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::KeyState;
use crate::tuning::Tuning;

/// One player's resolved movement for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MovementIntent {
    /// Horizontal velocity to assign to the body (not an acceleration)
    pub velocity_x: f32,
    /// Jump was requested this frame
    pub jump: bool,
}

/// Fold keyboard state and joystick output into a movement intent
pub fn resolve_intent(keys: &KeyState, stick: Vec2, tuning: &Tuning) -> MovementIntent {
    let mut intent = MovementIntent::default();

    if keys.left {
        intent.velocity_x = -tuning.move_speed;
    }
    if keys.right {
        intent.velocity_x = tuning.move_speed;
    }
    if keys.jump_pressed {
        intent.jump = true;
    }

    // Proportional stick control, with its own outer dead zone
    if stick.x.abs() > tuning.stick_axis_dead_zone {
        intent.velocity_x = stick.x * tuning.move_speed;
    }
    // Held upward drag re-requests a jump every frame
    if stick.y > tuning.stick_jump_threshold {
        intent.jump = true;
    }

    intent
}
