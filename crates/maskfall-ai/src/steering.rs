//! Steering helpers shared by the behavior routines.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;
use rand::Rng;

/// Facing angle for a direction, offset so the local +Y axis points along it.
pub fn facing_angle(direction: Vec2) -> f32 {
    direction.y.atan2(direction.x) - FRAC_PI_2
}

/// Unit vector from `from` toward `to`, or zero when they coincide.
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// Mirror `direction` about a contact surface with the given normal.
/// A zero normal leaves the direction unchanged.
pub fn reflect(direction: Vec2, normal: Vec2) -> Vec2 {
    let n = normal.normalize_or_zero();
    direction - 2.0 * direction.dot(n) * n
}

/// Left-hand perpendicular of a direction.
pub fn perpendicular(direction: Vec2) -> Vec2 {
    Vec2::new(-direction.y, direction.x)
}

/// Uniformly random unit vector.
pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let angle: f32 = rng.gen_range(0.0..TAU);
    Vec2::new(angle.cos(), angle.sin())
}

/// Draw from `[min, max)`, or return `min` for an empty window.
pub fn random_interval<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}
