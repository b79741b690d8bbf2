//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame deltas are clamped, never assumed fixed
//! - Seeded RNG only
//! - Stable per-player order (P1 then P2)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use body::{ArenaBounds, Body, Facing};
pub use collision::{CollisionResult, circle_circle_collision, resolve_body_collision};
pub use snapshot::{ActorSnapshot, BodySnapshot, FrameSnapshot};
pub use state::{ArenaState, Background, RngState, Side};
pub use tick::{TickInput, tick};
