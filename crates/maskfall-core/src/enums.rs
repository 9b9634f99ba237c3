//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Spawnable hostile agent kinds. Each kind maps to exactly one behavior variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    /// Random walk that bounces off obstacles.
    Wanderer,
    /// Slow direct pursuit of the reference entity.
    Chaser,
    /// Stationary, fires projectiles when in range.
    Turret,
    /// Pursues, keeps a preferred distance and fires.
    Hunter,
}

/// Agent lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeState {
    #[default]
    Alive,
    /// Lethal damage taken; removed by the next cleanup pass.
    Dying,
    /// Gone from the world. Never observed on a live entity.
    Removed,
}

/// Effect kinds handed to the external effect dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    EnemyKill,
    DamageTaken,
    WallHit,
    ProjectileHit,
    Dash,
}

impl AgentKind {
    pub const ALL: [AgentKind; 4] = [
        AgentKind::Wanderer,
        AgentKind::Chaser,
        AgentKind::Turret,
        AgentKind::Hunter,
    ];

    /// Whether this kind ever fires projectiles.
    pub fn fires(&self) -> bool {
        matches!(self, AgentKind::Turret | AgentKind::Hunter)
    }
}
