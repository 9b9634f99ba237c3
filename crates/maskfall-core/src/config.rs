//! Spawner and level configuration.
//!
//! Every struct deserializes with defaults for missing fields, so a campaign
//! file only needs to state what differs from the stock tuning.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::AgentKind;
use crate::types::SpawnBounds;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// One weighted entry of the spawn template registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub kind: AgentKind,
    /// Relative spawn weight; higher is more likely.
    #[serde(default = "default_weight")]
    pub weight: u32,
}

/// Arena-wide spawner tuning that stays fixed across levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerSettings {
    pub area_min: Vec2,
    pub area_max: Vec2,
    pub edge_padding: f32,
    pub min_distance_from_player: f32,
    pub max_attempts: u32,
    pub fallback_margin: f32,
    pub time_between_spawns: f32,
    pub spawn_rate_decrease: f32,
    pub minimum_spawn_time: f32,
    pub enemies_per_wave: u32,
    pub wave_interval: f32,
    pub scale_difficulty: bool,
    pub difficulty_increase_interval: f32,
    pub max_enemies: u32,
}

/// Per-level spawn data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub name: String,
    /// Kills required before the level layer advances.
    pub kills_to_win: u32,
    pub max_active_enemies: u32,
    pub spawn_interval: f32,
    pub enemies_per_wave: u32,
    pub enemy_types: Vec<TemplateEntry>,
}

/// A full campaign: shared spawner tuning plus ordered levels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignConfig {
    pub spawner: SpawnerSettings,
    pub levels: Vec<LevelConfig>,
}

fn default_weight() -> u32 {
    1
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

impl TemplateEntry {
    pub fn new(kind: AgentKind, weight: u32) -> Self {
        Self { kind, weight }
    }
}

impl Default for SpawnerSettings {
    fn default() -> Self {
        Self {
            area_min: Vec2::from_array(SPAWN_AREA_MIN),
            area_max: Vec2::from_array(SPAWN_AREA_MAX),
            edge_padding: SPAWN_EDGE_PADDING,
            min_distance_from_player: MIN_SPAWN_DISTANCE,
            max_attempts: SPAWN_MAX_ATTEMPTS,
            fallback_margin: SPAWN_FALLBACK_MARGIN,
            time_between_spawns: TIME_BETWEEN_SPAWNS,
            spawn_rate_decrease: SPAWN_RATE_DECREASE,
            minimum_spawn_time: MINIMUM_SPAWN_TIME,
            enemies_per_wave: ENEMIES_PER_WAVE,
            wave_interval: WAVE_INTERVAL,
            scale_difficulty: true,
            difficulty_increase_interval: DIFFICULTY_INCREASE_INTERVAL,
            max_enemies: MAX_ENEMIES,
        }
    }
}

impl SpawnerSettings {
    /// Spawn rectangle after edge padding.
    pub fn bounds(&self) -> SpawnBounds {
        SpawnBounds::padded(self.area_min, self.area_max, self.edge_padding)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.area_min.is_finite() || !self.area_max.is_finite() {
            return Err(ConfigError::Invalid("spawn area corners must be finite".into()));
        }
        if !(self.area_max - self.area_min).is_finite() {
            return Err(ConfigError::Invalid("spawn area extent must be finite".into()));
        }
        if !self.edge_padding.is_finite() || !self.fallback_margin.is_finite() {
            return Err(ConfigError::Invalid(
                "edge_padding and fallback_margin must be finite".into(),
            ));
        }
        if !is_positive(self.time_between_spawns) {
            return Err(ConfigError::Invalid(
                "time_between_spawns must be positive".into(),
            ));
        }
        if !is_positive(self.minimum_spawn_time) {
            return Err(ConfigError::Invalid(
                "minimum_spawn_time must be positive".into(),
            ));
        }
        if self.spawn_rate_decrease < 0.0 {
            return Err(ConfigError::Invalid(
                "spawn_rate_decrease must not be negative".into(),
            ));
        }
        if self.enemies_per_wave == 0 {
            return Err(ConfigError::Invalid(
                "enemies_per_wave must be at least 1".into(),
            ));
        }
        if !is_positive(self.wave_interval) || !is_positive(self.difficulty_increase_interval) {
            return Err(ConfigError::Invalid(
                "wave and difficulty intervals must be positive".into(),
            ));
        }
        Ok(())
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            name: "Level 1".into(),
            kills_to_win: 10,
            max_active_enemies: MAX_ENEMIES,
            spawn_interval: TIME_BETWEEN_SPAWNS,
            enemies_per_wave: ENEMIES_PER_WAVE,
            enemy_types: AgentKind::ALL
                .iter()
                .map(|&kind| TemplateEntry::new(kind, 1))
                .collect(),
        }
    }
}

impl LevelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.spawn_interval) {
            return Err(ConfigError::Invalid(format!(
                "level '{}': spawn_interval must be positive",
                self.name
            )));
        }
        if self.enemies_per_wave == 0 {
            return Err(ConfigError::Invalid(format!(
                "level '{}': enemies_per_wave must be at least 1",
                self.name
            )));
        }
        if let Some(entry) = self.enemy_types.iter().find(|e| e.weight == 0) {
            return Err(ConfigError::Invalid(format!(
                "level '{}': {:?} has zero weight",
                self.name, entry.kind
            )));
        }
        Ok(())
    }
}

impl CampaignConfig {
    /// Read and validate a campaign JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: CampaignConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.spawner.validate()?;
        for level in &self.levels {
            level.validate()?;
        }
        Ok(())
    }

    /// Stock three-level campaign used when no file is given.
    pub fn default_campaign() -> Self {
        Self {
            spawner: SpawnerSettings {
                enemies_per_wave: 2,
                ..Default::default()
            },
            levels: vec![
                LevelConfig {
                    name: "Masquerade".into(),
                    kills_to_win: 8,
                    max_active_enemies: 6,
                    spawn_interval: 2.5,
                    enemies_per_wave: 2,
                    enemy_types: vec![
                        TemplateEntry::new(AgentKind::Wanderer, 3),
                        TemplateEntry::new(AgentKind::Chaser, 1),
                    ],
                },
                LevelConfig {
                    name: "Crossfire".into(),
                    kills_to_win: 15,
                    max_active_enemies: 10,
                    spawn_interval: 2.0,
                    enemies_per_wave: 3,
                    enemy_types: vec![
                        TemplateEntry::new(AgentKind::Wanderer, 2),
                        TemplateEntry::new(AgentKind::Chaser, 2),
                        TemplateEntry::new(AgentKind::Turret, 1),
                    ],
                },
                LevelConfig {
                    name: "The Hunt".into(),
                    kills_to_win: 25,
                    max_active_enemies: 14,
                    spawn_interval: 1.5,
                    enemies_per_wave: 4,
                    enemy_types: vec![
                        TemplateEntry::new(AgentKind::Wanderer, 1),
                        TemplateEntry::new(AgentKind::Chaser, 2),
                        TemplateEntry::new(AgentKind::Turret, 1),
                        TemplateEntry::new(AgentKind::Hunter, 2),
                    ],
                },
            ],
        }
    }
}
