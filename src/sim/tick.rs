//! Per-frame simulation step
//!
//! The order inside `tick` is fixed: input, integration, collision, facing.
//! Collision has to see post-integration positions and facing has to see
//! post-collision positions.

use super::collision::resolve_body_collision;
use super::state::{ArenaState, Side};
use crate::input::{InputSource, KeyBindings, KeyState, MovementIntent, Pointer, resolve_intent};

/// Input for a single frame (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Keyboard state, indexed by `Side::index`
    pub keys: [KeyState; 2],
    /// Active pointers in screen space (Y up), in scan order
    pub pointers: Vec<Pointer>,
}

impl TickInput {
    /// Sample an input source using the standard per-player bindings
    pub fn from_source(source: &impl InputSource) -> Self {
        Self {
            keys: Side::ALL.map(|side| source.key_state(&KeyBindings::for_side(side))),
            pointers: source.pointers(),
        }
    }
}

/// Advance the arena by one frame
///
/// `dt` is the measured frame time; it is clamped to `tuning.max_frame_dt`.
/// Returns the movement intent applied to each player.
pub fn tick(state: &mut ArenaState, input: &TickInput, dt: f32) -> [MovementIntent; 2] {
    let dt = state.tuning.clamp_dt(dt);

    // Input
    state.touch.update(&input.pointers);
    let intents = Side::ALL.map(|side| {
        resolve_intent(
            &input.keys[side.index()],
            state.touch.direction(side),
            &state.tuning,
        )
    });
    for side in Side::ALL {
        apply_intent(state, side, &intents[side.index()]);
    }

    // Integration
    let gravity = state.tuning.gravity;
    for body in &mut state.bodies {
        body.update(dt, &state.bounds, gravity);
    }

    // Collision
    let [p1, p2] = &mut state.bodies;
    let contact = resolve_body_collision(p1, p2);
    if contact.hit {
        log::trace!(
            "Frame {}: players overlapped by {:.2}",
            state.frame,
            contact.penetration
        );
    }

    // Facing
    p1.face_opponent(p2);
    p2.face_opponent(p1);

    state.frame += 1;
    state.elapsed += dt;

    intents
}

fn apply_intent(state: &mut ArenaState, side: Side, intent: &MovementIntent) {
    let jump_velocity = state.tuning.jump_velocity;
    let body = state.body_mut(side);
    body.vel.x = intent.velocity_x;
    if intent.jump && body.jump(jump_velocity) {
        log::debug!("{} jumped", side.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::Facing;
    use crate::tuning::Tuning;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;
    const SCREEN: Vec2 = Vec2::new(1280.0, 720.0);

    fn arena() -> ArenaState {
        ArenaState::new(42, Tuning::default(), SCREEN)
    }

    fn settle(state: &mut ArenaState) {
        tick(state, &TickInput::default(), DT);
    }

    #[test]
    fn test_idle_frame_grounds_players() {
        let mut state = arena();
        settle(&mut state);

        for side in Side::ALL {
            let body = state.body(side);
            assert!(body.grounded);
            assert_eq!(body.pos.y, GROUND_Y + PLAYER_RADIUS);
            assert_eq!(body.vel, Vec2::ZERO);
        }
        assert_eq!(state.body(Side::P1).facing, Facing::Right);
        assert_eq!(state.body(Side::P2).facing, Facing::Left);
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_keyboard_moves_player() {
        let mut state = arena();
        settle(&mut state);
        let start_x = state.body(Side::P1).pos.x;

        let mut input = TickInput::default();
        input.keys[Side::P1.index()].right = true;
        let intents = tick(&mut state, &input, DT);

        assert_eq!(intents[0].velocity_x, MOVE_SPEED);
        assert_eq!(state.body(Side::P1).vel.x, MOVE_SPEED);
        assert!((state.body(Side::P1).pos.x - (start_x + MOVE_SPEED * DT)).abs() < 1e-3);

        // Velocity control: releasing the key stops immediately
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.body(Side::P1).vel.x, 0.0);
    }

    #[test]
    fn test_keyboard_jump_needs_press_edge() {
        let mut state = arena();
        settle(&mut state);

        let mut input = TickInput::default();
        input.keys[Side::P2.index()].jump_pressed = true;
        tick(&mut state, &input, DT);
        let body = state.body(Side::P2);
        assert!(!body.grounded);
        assert!(body.pos.y > GROUND_Y + PLAYER_RADIUS);
    }

    #[test]
    fn test_joystick_drives_player() {
        let mut state = arena();
        settle(&mut state);
        let center = state.touch.stick(Side::P2).center();

        // Drag P2's stick fully left
        let input = TickInput {
            pointers: vec![Pointer::new(0, center.x - 200.0, center.y)],
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.body(Side::P2).vel.x, -MOVE_SPEED);
        assert_eq!(state.body(Side::P1).vel.x, 0.0);
    }

    #[test]
    fn test_held_stick_jump_repeats_when_grounded() {
        let mut state = arena();
        settle(&mut state);
        let center = state.touch.stick(Side::P1).center();
        let input = TickInput {
            pointers: vec![Pointer::new(0, center.x, center.y + 200.0)],
            ..Default::default()
        };

        tick(&mut state, &input, DT);
        assert!(!state.body(Side::P1).grounded);

        // Keep holding: every landing is followed by another jump
        let mut jumps = 1;
        for _ in 0..240 {
            let before = state.body(Side::P1).vel.y;
            tick(&mut state, &input, DT);
            let after = state.body(Side::P1).vel.y;
            if after > before + 1.0 {
                jumps += 1;
            }
        }
        assert!(jumps >= 3);
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut state = arena();
        settle(&mut state);
        let start_x = state.body(Side::P1).pos.x;

        let mut input = TickInput::default();
        input.keys[Side::P1.index()].right = true;
        tick(&mut state, &input, 1.0);

        let moved = state.body(Side::P1).pos.x - start_x;
        assert!((moved - MOVE_SPEED * MAX_FRAME_DT).abs() < 1e-3);
    }

    #[test]
    fn test_players_collide_and_face_after_collision() {
        let mut state = arena();
        settle(&mut state);
        state.body_mut(Side::P1).pos.x = 390.0;
        state.body_mut(Side::P2).pos.x = 400.0;

        tick(&mut state, &TickInput::default(), DT);

        let p1 = state.body(Side::P1);
        let p2 = state.body(Side::P2);
        assert!((p2.pos.x - p1.pos.x - 2.0 * PLAYER_RADIUS).abs() < 1e-3);
        assert_eq!(p1.facing, Facing::Right);
        assert_eq!(p2.facing, Facing::Left);
    }

    #[test]
    fn test_walking_into_opponent_is_blocked() {
        let mut state = arena();
        settle(&mut state);

        let mut input = TickInput::default();
        input.keys[Side::P1.index()].right = true;
        input.keys[Side::P2.index()].left = true;
        for _ in 0..200 {
            tick(&mut state, &input, DT);
            let gap = state.body(Side::P2).pos.x - state.body(Side::P1).pos.x;
            assert!(gap >= 2.0 * PLAYER_RADIUS - 1e-2);
        }
    }

    #[test]
    fn test_deterministic_replay() {
        let mut a = arena();
        let mut b = arena();
        let center = a.touch.stick(Side::P2).center();

        for i in 0..120 {
            let mut input = TickInput::default();
            input.keys[Side::P1.index()].right = i % 40 < 20;
            input.keys[Side::P1.index()].jump_pressed = i % 30 == 0;
            if i % 50 < 25 {
                input.pointers.push(Pointer::new(1, center.x - 90.0, center.y + 90.0));
            }
            let dt = DT + (i % 3) as f32 * 0.001;
            tick(&mut a, &input, dt);
            tick(&mut b, &input, dt);
        }

        for side in Side::ALL {
            assert_eq!(a.body(side).pos, b.body(side).pos);
            assert_eq!(a.body(side).vel, b.body(side).vel);
        }
        assert_eq!(a.background, b.background);
    }

    #[test]
    fn test_health_never_changes() {
        let mut state = arena();
        let mut input = TickInput::default();
        input.keys[Side::P1.index()].right = true;
        input.keys[Side::P2.index()].left = true;
        for _ in 0..300 {
            tick(&mut state, &input, DT);
        }
        for side in Side::ALL {
            assert_eq!(state.body(side).health_percent(), 1.0);
        }
    }
}
