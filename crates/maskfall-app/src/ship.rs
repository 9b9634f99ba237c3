//! Scripted reference ship.
//!
//! Orbits the arena center and periodically dashes toward the nearest agent.
//! Dashing makes agent contact lethal to the agent; otherwise hits cost
//! health, followed by a short invincibility window.

use glam::Vec2;
use log::{debug, info};

use maskfall_core::constants::REFERENCE_RADIUS;
use maskfall_core::enums::EffectKind;
use maskfall_core::events::EffectEvent;
use maskfall_core::types::SpawnBounds;
use maskfall_sim::ReferenceEntity;

pub const SHIP_MAX_HEALTH: f32 = 3.0;
pub const SHIP_INVINCIBILITY_SECS: f32 = 1.5;
pub const SHIP_CRUISE_SPEED: f32 = 3.0;
/// Catch-up speed back onto the orbit after a dash.
pub const SHIP_RETURN_SPEED: f32 = 6.0;
pub const SHIP_DASH_SPEED: f32 = 15.0;
pub const SHIP_DASH_DURATION: f32 = 0.2;
pub const SHIP_DASH_COOLDOWN: f32 = 0.5;
/// Seconds between dash attempts.
pub const SHIP_DASH_EVERY: f32 = 1.5;
pub const SHIP_ORBIT_RADIUS: f32 = 2.5;

#[derive(Debug, Clone)]
pub struct Ship {
    position: Vec2,
    orbit_angle: f32,
    dash_heading: Vec2,
    health: f32,
    invincibility: f32,
    dash_timer: f32,
    dash_cooldown: f32,
    next_dash: f32,
    dashes: u32,
    hits_taken: u32,
}

impl Ship {
    /// New ship on the orbit around `center`.
    pub fn new(center: Vec2) -> Self {
        Self {
            position: center + Vec2::new(SHIP_ORBIT_RADIUS, 0.0),
            orbit_angle: 0.0,
            dash_heading: Vec2::Y,
            health: SHIP_MAX_HEALTH,
            invincibility: 0.0,
            dash_timer: 0.0,
            dash_cooldown: 0.0,
            next_dash: SHIP_DASH_EVERY,
            dashes: 0,
            hits_taken: 0,
        }
    }

    /// Advance timers and motion. `target` is the dash aim point, if any.
    /// Returns effects raised by the ship itself.
    pub fn update(
        &mut self,
        dt: f32,
        arena: &SpawnBounds,
        target: Option<Vec2>,
    ) -> Vec<EffectEvent> {
        let mut effects = Vec::new();
        if self.is_destroyed() {
            return effects;
        }

        self.invincibility = (self.invincibility - dt).max(0.0);
        self.dash_cooldown = (self.dash_cooldown - dt).max(0.0);
        self.next_dash -= dt;

        let center = arena.center();
        self.orbit_angle += SHIP_CRUISE_SPEED / SHIP_ORBIT_RADIUS * dt;
        let orbit_point = center + Vec2::from_angle(self.orbit_angle) * SHIP_ORBIT_RADIUS;

        if !self.is_dashing() && self.next_dash <= 0.0 && self.dash_cooldown <= 0.0 {
            self.start_dash(target, orbit_point);
            effects.push(EffectEvent::new(EffectKind::Dash, self.position));
        }

        if self.is_dashing() {
            self.position += self.dash_heading * SHIP_DASH_SPEED * dt;
            self.dash_timer -= dt;
            if self.dash_timer <= 0.0 {
                self.dash_timer = 0.0;
                self.dash_cooldown = SHIP_DASH_COOLDOWN;
            }
        } else {
            let offset = orbit_point - self.position;
            let step = SHIP_RETURN_SPEED * dt;
            self.position = if offset.length() <= step {
                orbit_point
            } else {
                self.position + offset.normalize_or_zero() * step
            };
        }

        let clamped = clamp_into(self.position, arena);
        if clamped != self.position {
            if self.is_dashing() {
                effects.push(EffectEvent::new(EffectKind::WallHit, clamped));
            }
            self.position = clamped;
        }
        effects
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn is_destroyed(&self) -> bool {
        self.health <= 0.0
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility > 0.0
    }

    pub fn dashes(&self) -> u32 {
        self.dashes
    }

    pub fn hits_taken(&self) -> u32 {
        self.hits_taken
    }

    fn start_dash(&mut self, target: Option<Vec2>, orbit_point: Vec2) {
        let aim = target.unwrap_or(orbit_point + (orbit_point - self.position).perp());
        let heading = (aim - self.position).normalize_or_zero();
        self.dash_heading = if heading == Vec2::ZERO {
            Vec2::Y
        } else {
            heading
        };
        self.dash_timer = SHIP_DASH_DURATION;
        self.next_dash = SHIP_DASH_EVERY;
        self.dashes += 1;
        debug!("ship dash #{} toward {:?}", self.dashes, self.dash_heading);
    }
}

impl ReferenceEntity for Ship {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn is_dashing(&self) -> bool {
        self.dash_timer > 0.0
    }

    fn take_damage(&mut self, amount: f32) {
        if self.is_dashing() || self.is_invincible() || self.is_destroyed() {
            return;
        }

        self.health -= amount;
        self.hits_taken += 1;
        if self.is_destroyed() {
            info!("ship destroyed");
        } else {
            self.invincibility = SHIP_INVINCIBILITY_SECS;
            debug!("ship hit, health {}", self.health);
        }
    }
}

fn clamp_into(position: Vec2, arena: &SpawnBounds) -> Vec2 {
    let inset = Vec2::splat(REFERENCE_RADIUS);
    let lo = arena.min + inset;
    let hi = arena.max - inset;
    if lo.x > hi.x || lo.y > hi.y {
        return arena.center();
    }
    position.clamp(lo, hi)
}
