//! Arena state and core simulation types
//!
//! Everything a match mutates from frame to frame lives in `ArenaState`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{ArenaBounds, Body};
use crate::input::TouchControls;
use crate::tuning::Tuning;

/// Which player a piece of per-player state belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Left spawn, left joystick
    P1,
    /// Right spawn, right joystick
    P2,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::P1, Side::P2];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::P1 => 0,
            Side::P2 => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::P1 => Side::P2,
            Side::P2 => Side::P1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::P1 => "P1",
            Side::P2 => "P2",
        }
    }
}

/// Arena backdrop, picked once per match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Background {
    /// Green hills
    Hills,
    /// Desert flatland
    Desert,
    /// Valley dip
    Valley,
}

impl Background {
    pub const ALL: [Background; 3] = [Background::Hills, Background::Desert, Background::Valley];

    /// Uniform pick among all variants
    pub fn roll(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// RNG state wrapper so a match can be replayed from its seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct ArenaState {
    /// Match seed for reproducibility
    pub rng_state: RngState,
    /// Immutable configuration
    pub tuning: Tuning,
    pub bounds: ArenaBounds,
    pub background: Background,
    /// Indexed by `Side::index`
    pub bodies: [Body; 2],
    /// Both virtual joysticks (screen space)
    pub touch: TouchControls,
    /// Frames simulated so far
    pub frame: u64,
    /// Simulated seconds (sum of clamped deltas)
    pub elapsed: f32,
}

impl ArenaState {
    /// Start a match: spawn both players on the floor and roll the backdrop
    pub fn new(seed: u64, tuning: Tuning, screen_size: Vec2) -> Self {
        let rng_state = RngState::new(seed);
        let background = Background::roll(&mut rng_state.to_rng());
        let bounds = tuning.bounds();
        let bodies = Side::ALL.map(|side| Self::spawn_body(&tuning, side));
        let touch = TouchControls::new(screen_size, &tuning);

        log::info!("Match started (seed {}, background {:?})", seed, background);

        Self {
            rng_state,
            tuning,
            bounds,
            background,
            bodies,
            touch,
            frame: 0,
            elapsed: 0.0,
        }
    }

    fn spawn_body(tuning: &Tuning, side: Side) -> Body {
        let x = tuning.world_width * tuning.spawn_fractions[side.index()];
        let y = tuning.ground_y + tuning.player_radius;
        Body::new(Vec2::new(x, y), tuning.player_radius, tuning.max_health)
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    pub fn body(&self, side: Side) -> &Body {
        &self.bodies[side.index()]
    }

    pub fn body_mut(&mut self, side: Side) -> &mut Body {
        &mut self.bodies[side.index()]
    }

    /// Screen dimensions the joysticks and HUD are laid out for
    pub fn screen_size(&self) -> Vec2 {
        self.touch.screen_size()
    }

    pub fn resize(&mut self, screen_size: Vec2) {
        self.touch.resize(screen_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_positions() {
        let state = ArenaState::new(1, Tuning::default(), Vec2::new(1280.0, 720.0));
        assert_eq!(state.body(Side::P1).pos, Vec2::new(160.0, 90.0));
        assert_eq!(state.body(Side::P2).pos, Vec2::new(640.0, 90.0));
        assert_eq!(state.body(Side::P1).radius(), 30.0);
        assert_eq!(state.frame, 0);
        assert_eq!(state.seed(), 1);
    }

    #[test]
    fn test_background_is_seeded() {
        for seed in 0..32 {
            let a = ArenaState::new(seed, Tuning::default(), Vec2::new(800.0, 480.0));
            let b = ArenaState::new(seed, Tuning::default(), Vec2::new(800.0, 480.0));
            assert_eq!(a.background, b.background);
        }
    }

    #[test]
    fn test_background_covers_all_variants() {
        let mut seen = Vec::new();
        for seed in 0..200 {
            let bg = Background::roll(&mut RngState::new(seed).to_rng());
            if !seen.contains(&bg) {
                seen.push(bg);
            }
        }
        assert_eq!(seen.len(), Background::ALL.len());
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::P1.opponent(), Side::P2);
        assert_eq!(Side::P2.opponent(), Side::P1);
        assert_eq!(Side::P2.index(), 1);
        assert_eq!(Side::P1.label(), "P1");
    }
}
