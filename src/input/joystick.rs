//! On-screen virtual joysticks
//!
//! Each player gets a fixed joystick base in a bottom corner of the screen.
//! A pointer on that player's half of the screen drags the thumb; the output
//! is the drag direction scaled by how far the thumb travelled, saturating at
//! the base radius.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{Pointer, PointerId};
use crate::sim::Side;
use crate::tuning::{JoystickTuning, Tuning};

/// Whether a pointer is driving the joystick this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JoystickState {
    #[default]
    Idle,
    Dragging { pointer: PointerId },
}

/// Read-only joystick data for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JoystickSnapshot {
    pub center: Vec2,
    pub thumb: Vec2,
    pub base_radius: f32,
    pub thumb_radius: f32,
}

/// A single fixed-base virtual joystick
#[derive(Debug, Clone)]
pub struct VirtualJoystick {
    center: Vec2,
    thumb: Vec2,
    base_radius: f32,
    thumb_radius: f32,
    dead_zone: f32,
    state: JoystickState,
    /// Normalized output, each axis in [-1, 1]
    direction: Vec2,
}

impl VirtualJoystick {
    pub fn new(center: Vec2, tuning: &JoystickTuning) -> Self {
        debug_assert!(tuning.base_radius > 0.0, "joystick base radius must be positive");
        Self {
            center,
            thumb: center,
            base_radius: tuning.base_radius,
            thumb_radius: tuning.thumb_radius,
            dead_zone: tuning.dead_zone,
            state: JoystickState::Idle,
            direction: Vec2::ZERO,
        }
    }

    /// Re-evaluate from this frame's candidate pointers
    ///
    /// The first candidate binds; any others are ignored. With no candidate
    /// the joystick goes idle and the thumb snaps back to center.
    pub fn update<'a>(&mut self, candidates: impl IntoIterator<Item = &'a Pointer>) {
        let previous = self.state;

        self.state = JoystickState::Idle;
        self.thumb = self.center;
        self.direction = Vec2::ZERO;

        if let Some(pointer) = candidates.into_iter().next() {
            self.state = JoystickState::Dragging { pointer: pointer.id };
            self.drag_to(pointer.pos);
        }

        if self.state != previous {
            log::debug!("Joystick at {:?}: {:?} -> {:?}", self.center, previous, self.state);
        }
    }

    fn drag_to(&mut self, target: Vec2) {
        let delta = target - self.center;
        let dist = delta.length();

        // Inside the dead zone (and the zero-length drag) count as no input
        if dist < self.dead_zone || dist == 0.0 {
            return;
        }

        let clamped = dist.min(self.base_radius);
        let unit = delta / dist;

        self.thumb = self.center + unit * clamped;
        self.direction = unit * (clamped / self.base_radius);
    }

    /// Move the base; the thumb snaps back until the next update
    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
        self.thumb = center;
        self.direction = Vec2::ZERO;
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn thumb(&self) -> Vec2 {
        self.thumb
    }

    pub fn state(&self) -> JoystickState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, JoystickState::Dragging { .. })
    }

    pub fn snapshot(&self) -> JoystickSnapshot {
        JoystickSnapshot {
            center: self.center,
            thumb: self.thumb,
            base_radius: self.base_radius,
            thumb_radius: self.thumb_radius,
        }
    }
}

/// Both players' joysticks, laid out in screen space
#[derive(Debug, Clone)]
pub struct TouchControls {
    screen_size: Vec2,
    corner_offset: f32,
    max_pointers: usize,
    sticks: [VirtualJoystick; 2],
}

impl TouchControls {
    pub fn new(screen_size: Vec2, tuning: &Tuning) -> Self {
        let corner_offset = tuning.joystick.corner_offset();
        let [p1, p2] = Self::centers(screen_size, corner_offset);
        Self {
            screen_size,
            corner_offset,
            max_pointers: tuning.max_pointers,
            sticks: [
                VirtualJoystick::new(p1, &tuning.joystick),
                VirtualJoystick::new(p2, &tuning.joystick),
            ],
        }
    }

    /// P1 bottom-left, P2 bottom-right
    fn centers(screen_size: Vec2, offset: f32) -> [Vec2; 2] {
        [
            Vec2::new(offset, offset),
            Vec2::new(screen_size.x - offset, offset),
        ]
    }

    /// Re-lay out the bases for a new screen size
    pub fn resize(&mut self, screen_size: Vec2) {
        self.screen_size = screen_size;
        let centers = Self::centers(screen_size, self.corner_offset);
        for (stick, center) in self.sticks.iter_mut().zip(centers) {
            stick.set_center(center);
        }
    }

    /// Bind pointers to joysticks by screen half and update both
    pub fn update(&mut self, pointers: &[Pointer]) {
        let scanned = &pointers[..pointers.len().min(self.max_pointers)];
        let width = self.screen_size.x;
        for side in Side::ALL {
            self.sticks[side.index()].update(scanned.iter().filter(|p| p.side(width) == side));
        }
    }

    pub fn stick(&self, side: Side) -> &VirtualJoystick {
        &self.sticks[side.index()]
    }

    pub fn direction(&self, side: Side) -> Vec2 {
        self.stick(side).direction()
    }

    pub fn screen_size(&self) -> Vec2 {
        self.screen_size
    }
}
