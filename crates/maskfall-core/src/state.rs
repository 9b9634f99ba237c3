//! Simulation snapshot: the complete visible state handed out after each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::AgentId;
use crate::enums::*;
use crate::events::{EffectEvent, SimEvent};
use crate::types::SimTime;

/// Spawn Director timers and difficulty curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveState {
    pub current_wave: u32,
    pub enemies_per_wave: u32,
    /// Current seconds between single spawns.
    pub spawn_interval: f32,
    pub wave_interval: f32,
    /// Count-down until the next single spawn.
    pub spawn_timer: f32,
    /// Count-down until the next wave.
    pub wave_timer: f32,
    /// Count-up since the last difficulty step.
    pub difficulty_timer: f32,
}

/// Complete state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwarmSnapshot {
    pub time: SimTime,
    pub spawning: bool,
    pub enemy_count: u32,
    pub current_wave: u32,
    pub enemies_per_wave: u32,
    pub spawn_interval: f32,
    pub agents: Vec<AgentView>,
    pub projectiles: Vec<ProjectileView>,
    pub effects: Vec<EffectEvent>,
    pub events: Vec<SimEvent>,
}

/// A live agent for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentView {
    pub id: AgentId,
    pub kind: AgentKind,
    pub position: Vec2,
    pub facing: f32,
    pub velocity: Vec2,
    pub health: f32,
}

/// A live projectile for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec2,
    pub velocity: Vec2,
    pub lifetime_secs: f32,
}

impl WaveState {
    /// Fresh timers: first single spawn is immediate, first wave after a full interval.
    pub fn new(spawn_interval: f32, enemies_per_wave: u32, wave_interval: f32) -> Self {
        Self {
            current_wave: 0,
            enemies_per_wave,
            spawn_interval,
            wave_interval,
            spawn_timer: 0.0,
            wave_timer: wave_interval,
            difficulty_timer: 0.0,
        }
    }
}
