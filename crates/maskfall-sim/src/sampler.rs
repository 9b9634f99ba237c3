//! Spatial sampler: picks spawn points inside the padded arena rectangle.

use glam::Vec2;
use rand::Rng;

use maskfall_core::types::SpawnBounds;

/// Result of a spawn position search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPoint {
    pub position: Vec2,
    /// True when every random draw was rejected and the edge fallback was used.
    pub used_fallback: bool,
}

/// Find a point inside `bounds` at least `min_distance` from `reference`.
///
/// Draws up to `max_attempts` uniform points. With no reference the first draw
/// is accepted. If nothing qualifies, falls back to the left or right edge
/// (coin flip) inset by `fallback_margin`, with a random y. The fallback does
/// not re-check `min_distance`.
pub fn find_spawn_position<R: Rng + ?Sized>(
    bounds: &SpawnBounds,
    reference: Option<Vec2>,
    min_distance: f32,
    max_attempts: u32,
    fallback_margin: f32,
    rng: &mut R,
) -> SpawnPoint {
    for _ in 0..max_attempts {
        let candidate = random_point(bounds, rng);
        let accepted = match reference {
            Some(point) => candidate.distance(point) >= min_distance,
            None => true,
        };
        if accepted {
            return SpawnPoint {
                position: candidate,
                used_fallback: false,
            };
        }
    }

    SpawnPoint {
        position: edge_fallback(bounds, fallback_margin, rng),
        used_fallback: true,
    }
}

/// Uniform point inside the bounds.
pub fn random_point<R: Rng + ?Sized>(bounds: &SpawnBounds, rng: &mut R) -> Vec2 {
    Vec2::new(
        sample_axis(rng, bounds.min.x, bounds.max.x),
        sample_axis(rng, bounds.min.y, bounds.max.y),
    )
}

fn edge_fallback<R: Rng + ?Sized>(bounds: &SpawnBounds, margin: f32, rng: &mut R) -> Vec2 {
    let x = if rng.gen_bool(0.5) {
        bounds.min.x + margin
    } else {
        bounds.max.x - margin
    };
    Vec2::new(
        x.clamp(bounds.min.x, bounds.max.x),
        sample_axis(rng, bounds.min.y, bounds.max.y),
    )
}

/// `gen_range` panics on an empty range; a collapsed axis yields its only value.
fn sample_axis<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
