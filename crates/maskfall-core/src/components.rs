//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Behavior lives in the AI crate and in the simulation systems.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Stable identifier handed out by the engine when an agent is spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub u32);

/// World-space placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    /// Rotation in radians; 0 means the local +Y axis points along world +Y.
    pub facing: f32,
}

/// Velocity intent consumed by the motion integrator (units/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub linear: Vec2,
}

/// Collision radius used by the reference integrator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f32,
}

/// A hostile agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub kind: AgentKind,
    pub life: LifeState,
    pub health: f32,
    /// Damage dealt to the reference entity on a non-dash contact.
    pub contact_damage: f32,
}

/// Per-variant mutable state. Fixed to one variant at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BehaviorState {
    Wanderer {
        /// Current unit heading.
        direction: Vec2,
        /// Seconds until the next re-pick.
        timer: f32,
    },
    Chaser,
    Turret {
        shoot_timer: f32,
    },
    Hunter {
        shoot_timer: f32,
    },
}

/// A straight-line enemy projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub damage: f32,
    pub lifetime_secs: f32,
    /// Agents this projectile never collides with.
    pub owner_exclusion: Vec<AgentId>,
    /// Set once the projectile has resolved a hit or expired.
    pub spent: bool,
}

impl Agent {
    pub fn is_alive(&self) -> bool {
        self.life == LifeState::Alive
    }

    /// Subtract health and move to `Dying` when it reaches zero.
    /// Returns true if this call caused the transition.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.health -= amount;
        if self.health <= 0.0 {
            self.life = LifeState::Dying;
            return true;
        }
        false
    }

    /// Lethal hit that ignores remaining health.
    /// Returns true if this call caused the transition.
    pub fn kill(&mut self) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.health = self.health.min(0.0);
        self.life = LifeState::Dying;
        true
    }
}

impl BehaviorState {
    pub fn kind(&self) -> AgentKind {
        match self {
            BehaviorState::Wanderer { .. } => AgentKind::Wanderer,
            BehaviorState::Chaser => AgentKind::Chaser,
            BehaviorState::Turret { .. } => AgentKind::Turret,
            BehaviorState::Hunter { .. } => AgentKind::Hunter,
        }
    }
}

impl Projectile {
    pub fn excludes(&self, id: AgentId) -> bool {
        self.owner_exclusion.contains(&id)
    }
}
