//! Heads-up display layout
//!
//! Screen-space rectangles for the two health bars. P1's bar sits top-left
//! and fills left-to-right; P2's sits top-right and fills right-to-left.
//! Drawing and text measurement belong to the renderer.

use glam::Vec2;
use serde::Serialize;

use crate::sim::Side;

/// Preferred health bar width (screen pixels)
pub const BAR_WIDTH: f32 = 780.0;
pub const BAR_HEIGHT: f32 = 72.0;
/// Distance from the top edge of the screen to the top of the bars
pub const BAR_TOP_OFFSET: f32 = 48.0;
/// Distance from the side edges to the bars
pub const BAR_SIDE_PAD: f32 = 60.0;
/// Minimum half-gap kept between the two bars at the screen center
pub const BAR_CENTER_GAP: f32 = 20.0;
/// Label baseline height above the top of the bar
pub const LABEL_RISE: f32 = 54.0;

/// Axis-aligned rectangle, origin bottom-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Horizontal anchoring of a HUD label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LabelAlign {
    /// Text starts at the anchor
    Left,
    /// Text ends at the anchor
    Right,
}

/// Everything the renderer needs to draw one health bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthBar {
    /// Full-size background/outline
    pub frame: Rect,
    /// Filled portion
    pub fill: Rect,
    pub label: &'static str,
    pub label_anchor: Vec2,
    pub label_align: LabelAlign,
}

/// Bar geometry for one screen size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudLayout {
    screen: Vec2,
    bar_width: f32,
    bar_bottom: f32,
}

impl HudLayout {
    pub fn new(screen: Vec2) -> Self {
        // Keep the bars from meeting in the middle on narrow screens
        let max_width = screen.x / 2.0 - BAR_SIDE_PAD - BAR_CENTER_GAP;
        let bar_width = BAR_WIDTH.min(max_width).max(0.0);
        let bar_top = screen.y - BAR_TOP_OFFSET;
        Self {
            screen,
            bar_width,
            bar_bottom: bar_top - BAR_HEIGHT,
        }
    }

    pub fn bar_width(&self) -> f32 {
        self.bar_width
    }

    fn bar_top(&self) -> f32 {
        self.bar_bottom + BAR_HEIGHT
    }

    /// Health bar for `side` at the given fill fraction (clamped to 0..=1)
    pub fn health_bar(&self, side: Side, percent: f32) -> HealthBar {
        let fill_width = self.bar_width * percent.clamp(0.0, 1.0);
        let label_y = self.bar_top() + LABEL_RISE;

        match side {
            Side::P1 => {
                let x = BAR_SIDE_PAD;
                HealthBar {
                    frame: Rect { x, y: self.bar_bottom, w: self.bar_width, h: BAR_HEIGHT },
                    fill: Rect { x, y: self.bar_bottom, w: fill_width, h: BAR_HEIGHT },
                    label: side.label(),
                    label_anchor: Vec2::new(x, label_y),
                    label_align: LabelAlign::Left,
                }
            }
            Side::P2 => {
                let x = self.screen.x - BAR_SIDE_PAD - self.bar_width;
                HealthBar {
                    frame: Rect { x, y: self.bar_bottom, w: self.bar_width, h: BAR_HEIGHT },
                    fill: Rect {
                        x: x + self.bar_width - fill_width,
                        y: self.bar_bottom,
                        w: fill_width,
                        h: BAR_HEIGHT,
                    },
                    label: side.label(),
                    label_anchor: Vec2::new(self.screen.x - BAR_SIDE_PAD, label_y),
                    label_align: LabelAlign::Right,
                }
            }
        }
    }
}
