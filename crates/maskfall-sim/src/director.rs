//! Spawn Director: population cap, spawn and wave cadence, difficulty curve.
//!
//! The director is the single owner of the population count. Spawns register
//! the new entity; removal reaches it as a `RemovalNotice` posted by cleanup
//! and acknowledged at the start of the next director tick.

use std::collections::HashSet;

use glam::Vec2;
use hecs::{Entity, World};
use log::{debug, info};
use rand_chacha::ChaCha8Rng;

use maskfall_core::components::{Agent, AgentId};
use maskfall_core::config::{ConfigError, LevelConfig, SpawnerSettings};
use maskfall_core::enums::AgentKind;
use maskfall_core::events::SimEvent;
use maskfall_core::state::WaveState;
use maskfall_core::types::SpawnBounds;

use crate::registry::TemplateRegistry;
use crate::sampler;
use crate::world_setup;

/// Notice that a director-spawned entity has left the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalNotice(pub Entity);

/// Watch set of live spawned entities.
#[derive(Debug, Clone, Default)]
pub struct Population {
    watched: HashSet<Entity>,
}

impl Population {
    /// Start watching `entity`. Returns false if it was already watched.
    pub fn register(&mut self, entity: Entity) -> bool {
        self.watched.insert(entity)
    }

    /// Stop watching `entity`. A second release of the same entity is a no-op.
    pub fn release(&mut self, entity: Entity) -> bool {
        self.watched.remove(&entity)
    }

    pub fn count(&self) -> u32 {
        self.watched.len() as u32
    }

    pub fn clear(&mut self) {
        self.watched.clear();
    }
}

pub struct SpawnDirector {
    settings: SpawnerSettings,
    bounds: SpawnBounds,
    registry: TemplateRegistry,
    cap: u32,
    wave: WaveState,
    population: Population,
    inbox: Vec<RemovalNotice>,
    running: bool,
}

impl SpawnDirector {
    /// New director with an empty registry. Nothing spawns until `configure`.
    pub fn new(settings: SpawnerSettings) -> Self {
        let wave = WaveState::new(
            settings
                .time_between_spawns
                .max(settings.minimum_spawn_time),
            settings.enemies_per_wave,
            settings.wave_interval,
        );
        Self {
            bounds: settings.bounds(),
            cap: settings.max_enemies,
            settings,
            registry: TemplateRegistry::default(),
            wave,
            population: Population::default(),
            inbox: Vec::new(),
            running: true,
        }
    }

    /// Apply a level: templates, cap, base spawn interval and wave size.
    /// The interval is held at the difficulty floor and the wave size never
    /// shrinks. Timers and the wave index carry over. On error nothing changes.
    pub fn configure(&mut self, level: &LevelConfig) -> Result<(), ConfigError> {
        level.validate()?;
        let registry = TemplateRegistry::new(level.enemy_types.clone())
            .map_err(|err| ConfigError::Invalid(format!("level '{}': {err}", level.name)))?;

        self.registry = registry;
        self.cap = level.max_active_enemies;
        self.wave.spawn_interval = level.spawn_interval.max(self.settings.minimum_spawn_time);
        self.wave.enemies_per_wave = self.wave.enemies_per_wave.max(level.enemies_per_wave);
        self.wave.spawn_timer = self.wave.spawn_timer.min(self.wave.spawn_interval);

        info!(
            "level '{}' configured: cap {}, interval {:.2}s, {} per wave, {} templates",
            level.name,
            self.cap,
            self.wave.spawn_interval,
            self.wave.enemies_per_wave,
            self.registry.len()
        );
        Ok(())
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Post a removal notice; applied on the next `tick`.
    pub fn notify_removed(&mut self, entity: Entity) {
        self.inbox.push(RemovalNotice(entity));
    }

    /// Acknowledge removals, then advance spawn, wave and difficulty timers.
    pub fn tick(
        &mut self,
        dt: f32,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        reference: Option<Vec2>,
        next_agent_id: &mut u32,
        events: &mut Vec<SimEvent>,
    ) {
        self.acknowledge_removals();

        if !self.running {
            return;
        }

        self.wave.spawn_timer -= dt;
        if self.wave.spawn_timer <= 0.0 && self.below_cap() {
            self.spawn_one(world, rng, reference, next_agent_id);
            self.wave.spawn_timer = self.wave.spawn_interval;
        }

        self.wave.wave_timer -= dt;
        if self.wave.wave_timer <= 0.0 {
            self.spawn_wave(world, rng, reference, next_agent_id, events);
            self.wave.wave_timer = self.wave.wave_interval;
        }

        if self.settings.scale_difficulty {
            self.wave.difficulty_timer += dt;
            if self.wave.difficulty_timer >= self.settings.difficulty_increase_interval {
                self.increase_difficulty(events);
                self.wave.difficulty_timer = 0.0;
            }
        }
    }

    /// Spawn one agent of `kind` at `position`, bypassing the registry and
    /// sampler but not the cap.
    pub fn spawn_at(
        &mut self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        kind: AgentKind,
        position: Vec2,
        next_agent_id: &mut u32,
    ) -> Option<Entity> {
        if !self.below_cap() {
            return None;
        }
        let id = take_agent_id(next_agent_id);
        let entity = world_setup::spawn_agent(world, rng, kind, position, id);
        self.population.register(entity);
        Some(entity)
    }

    /// Destroy every agent now. Projectiles are left in flight.
    /// Returns the number of agents removed.
    pub fn clear_all(&mut self, world: &mut World) -> usize {
        let agents: Vec<Entity> = world
            .query_mut::<&Agent>()
            .into_iter()
            .map(|(entity, _)| entity)
            .collect();
        for &entity in &agents {
            let _ = world.despawn(entity);
        }

        self.population.clear();
        self.inbox.clear();
        info!("cleared {} agents", agents.len());
        agents.len()
    }

    pub fn enemy_count(&self) -> u32 {
        self.population.count()
    }

    pub fn current_wave(&self) -> u32 {
        self.wave.current_wave
    }

    pub fn wave_state(&self) -> &WaveState {
        &self.wave
    }

    pub fn bounds(&self) -> &SpawnBounds {
        &self.bounds
    }

    pub fn cap(&self) -> u32 {
        self.cap
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    fn below_cap(&self) -> bool {
        self.population.count() < self.cap
    }

    fn acknowledge_removals(&mut self) {
        for RemovalNotice(entity) in self.inbox.drain(..) {
            self.population.release(entity);
        }
    }

    fn spawn_wave(
        &mut self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        reference: Option<Vec2>,
        next_agent_id: &mut u32,
        events: &mut Vec<SimEvent>,
    ) {
        self.wave.current_wave += 1;
        let mut spawned = 0;
        for _ in 0..self.wave.enemies_per_wave {
            if !self.below_cap() {
                break;
            }
            if self.spawn_one(world, rng, reference, next_agent_id).is_some() {
                spawned += 1;
            }
        }

        info!(
            "wave {} started: {spawned}/{} spawned, population {}",
            self.wave.current_wave,
            self.wave.enemies_per_wave,
            self.population.count()
        );
        events.push(SimEvent::WaveStarted {
            wave: self.wave.current_wave,
        });
    }

    fn increase_difficulty(&mut self, events: &mut Vec<SimEvent>) {
        let current = self.wave.spawn_interval;
        self.wave.spawn_interval = (current - self.settings.spawn_rate_decrease)
            .max(self.settings.minimum_spawn_time);
        self.wave.enemies_per_wave += 1;

        info!(
            "difficulty up: interval {:.2}s, {} per wave",
            self.wave.spawn_interval, self.wave.enemies_per_wave
        );
        events.push(SimEvent::DifficultyIncreased {
            spawn_interval: self.wave.spawn_interval,
            enemies_per_wave: self.wave.enemies_per_wave,
        });
    }

    fn spawn_one(
        &mut self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        reference: Option<Vec2>,
        next_agent_id: &mut u32,
    ) -> Option<Entity> {
        let kind = self.registry.pick_weighted(rng)?;

        let point = sampler::find_spawn_position(
            &self.bounds,
            reference,
            self.settings.min_distance_from_player,
            self.settings.max_attempts,
            self.settings.fallback_margin,
            rng,
        );
        if point.used_fallback {
            debug!(
                "no clear spawn point after {} attempts, using edge fallback",
                self.settings.max_attempts
            );
        }

        let id = take_agent_id(next_agent_id);
        let entity = world_setup::spawn_agent(world, rng, kind, point.position, id);
        self.population.register(entity);
        debug!(
            "spawned {kind:?} #{} at ({:.2}, {:.2})",
            id.0, point.position.x, point.position.y
        );
        Some(entity)
    }
}

fn take_agent_id(next_agent_id: &mut u32) -> AgentId {
    let id = AgentId(*next_agent_id);
    *next_agent_id += 1;
    id
}
