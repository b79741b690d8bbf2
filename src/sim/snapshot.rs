//! Read-only frame data for the renderer

use glam::Vec2;
use serde::Serialize;

use super::body::{Body, Facing};
use super::state::{ArenaState, Background, Side};
use crate::hud::{HealthBar, HudLayout};
use crate::input::JoystickSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub pos: Vec2,
    pub radius: f32,
    pub facing: Facing,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            pos: body.pos,
            radius: body.radius(),
            facing: body.facing,
        }
    }
}

/// One player's drawable state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorSnapshot {
    pub side: Side,
    pub body: BodySnapshot,
    pub joystick: JoystickSnapshot,
    /// Health fill fraction, never negative
    pub health_percent: f32,
    pub health_bar: HealthBar,
}

/// Everything the renderer is handed after a frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub background: Background,
    /// World size the bodies live in; the renderer fits it to the screen
    pub world_size: Vec2,
    pub ground_y: f32,
    pub screen_size: Vec2,
    pub actors: [ActorSnapshot; 2],
}

impl FrameSnapshot {
    pub fn actor(&self, side: Side) -> &ActorSnapshot {
        &self.actors[side.index()]
    }
}

impl ArenaState {
    pub fn snapshot(&self) -> FrameSnapshot {
        let hud = HudLayout::new(self.screen_size());
        let actors = Side::ALL.map(|side| {
            let body = self.body(side);
            let health_percent = body.health_percent();
            ActorSnapshot {
                side,
                body: BodySnapshot::from(body),
                joystick: self.touch.stick(side).snapshot(),
                health_percent,
                health_bar: hud.health_bar(side, health_percent),
            }
        });

        FrameSnapshot {
            frame: self.frame,
            background: self.background,
            world_size: Vec2::new(self.tuning.world_width, self.tuning.world_height),
            ground_y: self.bounds.ground_y,
            screen_size: self.screen_size(),
            actors,
        }
    }
}
