//! Circular player bodies
//!
//! A body falls under gravity, rests on a flat floor and is held inside the
//! side walls. Horizontal velocity is set from input every frame, so walls
//! only clamp position and never touch `vel.x`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Fixed floor and side walls, shared read-only by every body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub ground_y: f32,
    pub min_x: f32,
    pub max_x: f32,
}

/// Which way a body is looking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1 for left, +1 for right
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// A circular fighter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
    pub grounded: bool,
    pub facing: Facing,
    pub health: f32,
    pub max_health: f32,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32, max_health: f32) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            grounded: false,
            facing: Facing::default(),
            health: max_health,
            max_health,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Integrate one frame: gravity, velocity, then floor and wall clamping
    pub fn update(&mut self, dt: f32, bounds: &ArenaBounds, gravity: f32) {
        debug_assert!(dt.is_finite() && dt >= 0.0, "bad frame delta {dt}");

        if !self.grounded {
            self.vel.y += gravity * dt;
        }

        self.pos += self.vel * dt;

        // Hard floor, checked after integration
        if self.pos.y - self.radius <= bounds.ground_y {
            self.pos.y = bounds.ground_y + self.radius;
            self.vel.y = 0.0;
            self.grounded = true;
        } else {
            self.grounded = false;
        }

        if self.pos.x - self.radius < bounds.min_x {
            self.pos.x = bounds.min_x + self.radius;
        }
        if self.pos.x + self.radius > bounds.max_x {
            self.pos.x = bounds.max_x - self.radius;
        }
    }

    /// Launch upward if standing on the floor. Returns whether the jump happened.
    pub fn jump(&mut self, jump_velocity: f32) -> bool {
        if !self.grounded {
            return false;
        }
        self.vel.y = jump_velocity;
        self.grounded = false;
        true
    }

    /// Turn toward `other`. Equal x resolves to `Left`.
    pub fn face_opponent(&mut self, other: &Body) {
        self.facing = if other.pos.x > self.pos.x {
            Facing::Right
        } else {
            Facing::Left
        };
    }

    /// Health bar fill fraction, never negative
    pub fn health_percent(&self) -> f32 {
        (self.health / self.max_health).max(0.0)
    }
}
