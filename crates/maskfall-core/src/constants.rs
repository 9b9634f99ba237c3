//! Simulation constants and tuning parameters.

/// Fixed-rate integration frequency used by the headless harness (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per fixed tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Spawn area ---

/// Default spawn area lower-left corner (world units).
pub const SPAWN_AREA_MIN: [f32; 2] = [-8.0, -4.0];

/// Default spawn area upper-right corner (world units).
pub const SPAWN_AREA_MAX: [f32; 2] = [8.0, 4.0];

/// Amount the spawn area is shrunk on every side.
pub const SPAWN_EDGE_PADDING: f32 = 0.5;

/// Agents never spawn closer than this to the reference entity.
pub const MIN_SPAWN_DISTANCE: f32 = 3.0;

/// Rejection-sampling budget before the edge fallback kicks in.
pub const SPAWN_MAX_ATTEMPTS: u32 = 50;

/// Inward offset from the left/right edge used by the fallback.
pub const SPAWN_FALLBACK_MARGIN: f32 = 0.5;

// --- Spawn cadence ---

/// Base seconds between single spawns.
pub const TIME_BETWEEN_SPAWNS: f32 = 2.0;

/// Amount the spawn interval shrinks per difficulty step.
pub const SPAWN_RATE_DECREASE: f32 = 0.1;

/// Spawn interval floor.
pub const MINIMUM_SPAWN_TIME: f32 = 0.5;

/// Initial agents per wave.
pub const ENEMIES_PER_WAVE: u32 = 3;

/// Seconds between waves.
pub const WAVE_INTERVAL: f32 = 10.0;

/// Seconds between difficulty steps.
pub const DIFFICULTY_INCREASE_INTERVAL: f32 = 30.0;

/// Default population cap.
pub const MAX_ENEMIES: u32 = 20;

// --- Agents ---

/// Default agent health.
pub const AGENT_HEALTH: f32 = 1.0;

/// Default damage dealt to the reference entity on contact.
pub const AGENT_CONTACT_DAMAGE: f32 = 1.0;

/// Collision radius of an agent.
pub const AGENT_RADIUS: f32 = 0.4;

/// Distance from an agent's center to its fire point along the firing direction.
pub const FIRE_POINT_OFFSET: f32 = 0.5;

// Wanderer
pub const WANDERER_SPEED: f32 = 2.0;
pub const WANDERER_MIN_DIRECTION_INTERVAL: f32 = 1.0;
pub const WANDERER_MAX_DIRECTION_INTERVAL: f32 = 3.0;

// Chaser
pub const CHASER_SPEED: f32 = 1.5;
pub const CHASER_DETECTION_RANGE: f32 = 15.0;
pub const CHASER_STOP_DISTANCE: f32 = 0.5;

// Turret
pub const TURRET_SHOOT_RANGE: f32 = 10.0;
pub const TURRET_SHOOT_INTERVAL: f32 = 2.0;
pub const TURRET_PROJECTILE_SPEED: f32 = 8.0;

// Hunter
pub const HUNTER_SPEED: f32 = 2.0;
pub const HUNTER_CHASE_RANGE: f32 = 12.0;
pub const HUNTER_PREFERRED_DISTANCE: f32 = 5.0;
pub const HUNTER_SHOOT_RANGE: f32 = 8.0;
pub const HUNTER_SHOOT_INTERVAL: f32 = 1.5;
pub const HUNTER_PROJECTILE_SPEED: f32 = 10.0;

// --- Projectiles ---

/// Damage applied to the reference entity on a hit.
pub const PROJECTILE_DAMAGE: f32 = 1.0;

/// Seconds before an untouched projectile expires.
pub const PROJECTILE_LIFETIME: f32 = 5.0;

/// Collision radius of a projectile.
pub const PROJECTILE_RADIUS: f32 = 0.15;

// --- Reference entity ---

/// Collision radius of the reference ship.
pub const REFERENCE_RADIUS: f32 = 0.5;
