//! Body vs body collision
//!
//! Two circles that overlap are pushed apart along the line between their
//! centers, each by half the overlap. Velocities are left alone: no bounce,
//! no momentum transfer. One pass is exact with only two bodies.

use glam::Vec2;

use super::body::Body;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the circles overlap
    pub hit: bool,
    /// Unit normal from the first circle toward the second
    pub normal: Vec2,
    /// Total overlap depth (sum of radii minus center distance)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check overlap between two circles
///
/// Coincident centers report a miss: there is no normal to push along.
pub fn circle_circle_collision(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> CollisionResult {
    let delta = b_pos - a_pos;
    let dist = delta.length();
    let min_dist = a_radius + b_radius;

    if dist > 0.0 && dist < min_dist {
        return CollisionResult {
            hit: true,
            normal: delta / dist,
            penetration: min_dist - dist,
        };
    }

    CollisionResult::miss()
}

/// Separate two overlapping bodies symmetrically
pub fn resolve_body_collision(a: &mut Body, b: &mut Body) -> CollisionResult {
    let result = circle_circle_collision(a.pos, a.radius(), b.pos, b.radius());
    if result.hit {
        let push = result.normal * (result.penetration / 2.0);
        a.pos -= push;
        b.pos += push;
    }
    result
}
