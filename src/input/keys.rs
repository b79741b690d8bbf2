//! Keyboard bindings and edge detection

use serde::{Deserialize, Serialize};

use crate::sim::Side;

/// Keys the arena listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    A,
    D,
    W,
    Left,
    Right,
    Up,
}

/// One player's movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub left: Key,
    pub right: Key,
    pub jump: Key,
}

impl KeyBindings {
    /// P1 uses A/D/W, P2 the arrow keys
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::P1 => Self {
                left: Key::A,
                right: Key::D,
                jump: Key::W,
            },
            Side::P2 => Self {
                left: Key::Left,
                right: Key::Right,
                jump: Key::Up,
            },
        }
    }

    pub fn keys(&self) -> [Key; 3] {
        [self.left, self.right, self.jump]
    }
}

/// Keyboard state for one player on one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    /// Jump key went down this frame (not held-repeat)
    pub jump_pressed: bool,
}

/// Derives "just pressed" edges from successive held-key samples
///
/// For input sources that can only report whether a key is down.
#[derive(Debug, Clone, Default)]
pub struct KeyboardTracker {
    held: Vec<Key>,
    pressed: Vec<Key>,
}

impl KeyboardTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this frame's held keys
    pub fn sample(&mut self, held: &[Key]) {
        self.pressed = held
            .iter()
            .copied()
            .filter(|key| !self.held.contains(key))
            .collect();
        self.held = held.to_vec();
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn just_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings() {
        let p1 = KeyBindings::for_side(Side::P1);
        assert_eq!(p1.keys(), [Key::A, Key::D, Key::W]);
        let p2 = KeyBindings::for_side(Side::P2);
        assert_eq!(p2.keys(), [Key::Left, Key::Right, Key::Up]);
    }

    #[test]
    fn test_tracker_reports_press_edge_once() {
        let mut tracker = KeyboardTracker::new();

        tracker.sample(&[Key::W]);
        assert!(tracker.is_held(Key::W));
        assert!(tracker.just_pressed(Key::W));

        // Held, not re-pressed
        tracker.sample(&[Key::W, Key::D]);
        assert!(tracker.is_held(Key::W));
        assert!(!tracker.just_pressed(Key::W));
        assert!(tracker.just_pressed(Key::D));

        tracker.sample(&[]);
        assert!(!tracker.is_held(Key::W));
        assert!(!tracker.just_pressed(Key::W));

        tracker.sample(&[Key::W]);
        assert!(tracker.just_pressed(Key::W));
    }
}
