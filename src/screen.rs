//! Screen lifecycle
//!
//! A screen is entered with `show`, stepped once per displayed frame with
//! `render`, told about window size changes with `resize`, and torn down with
//! `dispose`. `ArenaScreen` is the fight itself: it pulls input from an
//! `InputSource`, steps the simulation and hands a snapshot to a `Renderer`.

use glam::Vec2;

use crate::input::InputSource;
use crate::sim::{ArenaState, FrameSnapshot, TickInput, tick};
use crate::tuning::Tuning;

/// Lifecycle hooks driven by the frame pump
pub trait Screen {
    fn show(&mut self);
    /// Called once per frame with the measured frame time in seconds
    fn render(&mut self, delta: f32);
    fn resize(&mut self, width: u32, height: u32);
    fn dispose(&mut self);
}

/// Draws frames; the simulation never calls drawing code directly
pub trait Renderer {
    fn draw(&mut self, frame: &FrameSnapshot);

    fn resize(&mut self, _width: u32, _height: u32) {}
}

/// The two-player fight screen
pub struct ArenaScreen<I, R> {
    input: I,
    renderer: R,
    tuning: Tuning,
    base_seed: u64,
    matches_started: u64,
    screen_size: Vec2,
    state: Option<ArenaState>,
}

impl<I: InputSource, R: Renderer> ArenaScreen<I, R> {
    pub fn new(input: I, renderer: R, tuning: Tuning, seed: u64, screen_size: Vec2) -> Self {
        Self {
            input,
            renderer,
            tuning,
            base_seed: seed,
            matches_started: 0,
            screen_size,
            state: None,
        }
    }

    /// Current match, if the screen is showing
    pub fn state(&self) -> Option<&ArenaState> {
        self.state.as_ref()
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_parts(self) -> (I, R) {
        (self.input, self.renderer)
    }
}

impl<I: InputSource, R: Renderer> Screen for ArenaScreen<I, R> {
    /// Start a fresh match; each entry gets its own seed
    fn show(&mut self) {
        let seed = self.base_seed.wrapping_add(self.matches_started);
        self.matches_started += 1;
        self.state = Some(ArenaState::new(seed, self.tuning.clone(), self.screen_size));
    }

    fn render(&mut self, delta: f32) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        let input = TickInput::from_source(&self.input);
        tick(state, &input, delta);
        self.renderer.draw(&state.snapshot());
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.screen_size = Vec2::new(width as f32, height as f32);
        if let Some(state) = self.state.as_mut() {
            state.resize(self.screen_size);
        }
        self.renderer.resize(width, height);
        log::info!("Arena resized to {}x{}", width, height);
    }

    fn dispose(&mut self) {
        if let Some(state) = self.state.take() {
            log::info!(
                "Match ended after {} frames ({:.1}s)",
                state.frame,
                state.elapsed
            );
        }
    }
}
