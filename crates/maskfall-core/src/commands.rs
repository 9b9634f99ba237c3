//! Commands sent by the level layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::config::LevelConfig;

/// All spawn-control actions available to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SwarmCommand {
    /// Replace templates and limits for a new level.
    Configure { level: LevelConfig },
    /// Resume timer-driven spawning.
    StartSpawning,
    /// Halt timer-driven spawning. Live agents keep running.
    StopSpawning,
    /// Destroy every live agent immediately.
    ClearAll,
}
