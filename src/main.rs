//! Rage Arena entry point
//!
//! Headless frame pump: plays a scripted match at 60 Hz, logs periodic
//! snapshots and prints the final frame as JSON.
//!
//! Usage: `rage-arena [tuning.json] [frames]`

use std::path::PathBuf;

use glam::Vec2;

use rage_arena::input::{InputSource, Key, KeyboardTracker, Pointer};
use rage_arena::sim::{FrameSnapshot, Side};
use rage_arena::{ArenaScreen, Renderer, Screen, Tuning};

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_FRAMES: u64 = 600;
const SCREEN_SIZE: (u32, u32) = (1280, 720);

/// Scripted input: P1 on the keyboard, P2 on the right-hand joystick
struct ScriptedInput {
    frame: u64,
    keyboard: KeyboardTracker,
    pointers: Vec<Pointer>,
    /// P2 joystick base, in window coordinates (Y down)
    p2_stick: Vec2,
    screen_height: f32,
}

impl ScriptedInput {
    fn new(p2_stick: Vec2, screen_height: f32) -> Self {
        Self {
            frame: 0,
            keyboard: KeyboardTracker::new(),
            pointers: Vec::new(),
            p2_stick,
            screen_height,
        }
    }

    /// Sample the script for the next frame
    fn advance(&mut self) {
        let t = self.frame % 240;

        // P1 walks right, hops every second, then backs off
        let mut held = Vec::new();
        if t < 150 {
            held.push(Key::D);
        } else {
            held.push(Key::A);
        }
        if self.frame % 60 < 5 {
            held.push(Key::W);
        }
        self.keyboard.sample(&held);

        // P2 drags left for a while, then pushes up-left to jump
        self.pointers.clear();
        let drag = match t {
            0..=119 => Some(Vec2::new(-100.0, 0.0)),
            120..=139 => Some(Vec2::new(-80.0, -110.0)),
            _ => None,
        };
        if let Some(offset) = drag {
            let pos = self.p2_stick + offset;
            self.pointers
                .push(Pointer::from_top_left(0, pos.x, pos.y, self.screen_height));
        }

        self.frame += 1;
    }
}

impl InputSource for ScriptedInput {
    fn is_key_held(&self, key: Key) -> bool {
        self.keyboard.is_held(key)
    }

    fn is_key_just_pressed(&self, key: Key) -> bool {
        self.keyboard.just_pressed(key)
    }

    fn pointers(&self) -> Vec<Pointer> {
        self.pointers.clone()
    }
}

/// Logs a summary line every second and keeps the latest frame
#[derive(Default)]
struct LogRenderer {
    last: Option<FrameSnapshot>,
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &FrameSnapshot) {
        if frame.frame % 60 == 0 {
            let p1 = frame.actor(Side::P1);
            let p2 = frame.actor(Side::P2);
            log::info!(
                "frame {:>4}: P1 ({:6.1}, {:5.1}) {:?} | P2 ({:6.1}, {:5.1}) {:?}",
                frame.frame,
                p1.body.pos.x,
                p1.body.pos.y,
                p1.body.facing,
                p2.body.pos.x,
                p2.body.pos.y,
                p2.body.facing,
            );
        }
        self.last = Some(frame.clone());
    }

    fn resize(&mut self, width: u32, height: u32) {
        log::debug!("Renderer viewport {}x{}", width, height);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let tuning_path = args.next().filter(|a| a != "-").map(PathBuf::from);
    let frames = match args.next() {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            log::warn!("Invalid frame count {:?}, using {}", arg, DEFAULT_FRAMES);
            DEFAULT_FRAMES
        }),
        None => DEFAULT_FRAMES,
    };

    let tuning = Tuning::load_or_default(tuning_path.as_deref());
    let (width, height) = SCREEN_SIZE;
    let screen_size = Vec2::new(width as f32, height as f32);

    // P2's stick center, flipped into window coordinates for the script
    let offset = tuning.joystick.corner_offset();
    let p2_stick = Vec2::new(screen_size.x - offset, screen_size.y - offset);

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    log::info!("Rage Arena starting ({} frames, seed {})", frames, seed);

    let input = ScriptedInput::new(p2_stick, screen_size.y);
    let mut screen = ArenaScreen::new(input, LogRenderer::default(), tuning, seed, screen_size);

    screen.show();
    screen.resize(width, height);
    for _ in 0..frames {
        screen.input_mut().advance();
        screen.render(FRAME_DT);
    }
    screen.dispose();

    let (_, renderer) = screen.into_parts();
    if let Some(frame) = renderer.last {
        match serde_json::to_string_pretty(&frame) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize final frame: {}", e),
        }
    }
}
