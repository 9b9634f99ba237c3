//! Events emitted by the simulation for effects and game-flow feedback.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// A fire-and-forget request for the external effect dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectEvent {
    pub kind: EffectKind,
    pub position: Vec2,
}

/// Game-flow notifications for level and scoring logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// An agent died and left the world.
    AgentRemoved,
    /// A wave batch spawn fired.
    WaveStarted { wave: u32 },
    /// Spawn cadence tightened.
    DifficultyIncreased {
        spawn_interval: f32,
        enemies_per_wave: u32,
    },
    /// A new level configuration took effect.
    LevelConfigured { name: String },
}

impl EffectEvent {
    pub fn new(kind: EffectKind, position: Vec2) -> Self {
        Self { kind, position }
    }
}
