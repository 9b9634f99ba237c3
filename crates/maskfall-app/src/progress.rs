//! Level progression: counts kills and moves the spawner through the
//! campaign's levels.

use log::info;

use maskfall_core::commands::SwarmCommand;
use maskfall_core::config::{ConfigError, LevelConfig};
use maskfall_core::events::SimEvent;

#[derive(Debug, Clone)]
pub struct LevelProgress {
    levels: Vec<LevelConfig>,
    index: usize,
    kills: u32,
    total_kills: u32,
    levels_completed: u32,
    /// Kills count only while a level is active.
    active: bool,
    finished: bool,
}

impl LevelProgress {
    pub fn new(levels: Vec<LevelConfig>) -> Result<Self, ConfigError> {
        if levels.is_empty() {
            return Err(ConfigError::Invalid("campaign has no levels".into()));
        }
        Ok(Self {
            levels,
            index: 0,
            kills: 0,
            total_kills: 0,
            levels_completed: 0,
            active: false,
            finished: false,
        })
    }

    pub fn first_level(&self) -> &LevelConfig {
        &self.levels[0]
    }

    pub fn current_level(&self) -> &LevelConfig {
        &self.levels[self.index]
    }

    pub fn level_number(&self) -> usize {
        self.index + 1
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn total_kills(&self) -> u32 {
        self.total_kills
    }

    pub fn levels_completed(&self) -> u32 {
        self.levels_completed
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True once the last level has been completed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Fraction of the current level's kill target reached.
    pub fn progress(&self) -> f32 {
        let target = self.current_level().kills_to_win.max(1);
        (self.kills as f32 / target as f32).min(1.0)
    }

    /// Feed one snapshot's events. Returns the commands to queue.
    pub fn observe(&mut self, events: &[SimEvent]) -> Vec<SwarmCommand> {
        let mut commands = Vec::new();
        for event in events {
            match event {
                SimEvent::LevelConfigured { name } if !self.finished => {
                    self.active = true;
                    self.kills = 0;
                    info!("level {} started: {name}", self.level_number());
                }
                SimEvent::AgentRemoved if self.active => {
                    self.kills += 1;
                    self.total_kills += 1;
                    if self.kills >= self.current_level().kills_to_win {
                        self.complete_level(&mut commands);
                    }
                }
                _ => {}
            }
        }
        commands
    }

    fn complete_level(&mut self, commands: &mut Vec<SwarmCommand>) {
        self.active = false;
        self.levels_completed += 1;
        info!(
            "level {} complete: {}",
            self.level_number(),
            self.current_level().name
        );
        commands.push(SwarmCommand::StopSpawning);
        commands.push(SwarmCommand::ClearAll);

        if self.index + 1 < self.levels.len() {
            self.index += 1;
            commands.push(SwarmCommand::Configure {
                level: self.current_level().clone(),
            });
            commands.push(SwarmCommand::StartSpawning);
        } else {
            self.finished = true;
            info!("campaign complete");
        }
    }
}
