//! Simulation engine for the agent population.
//!
//! `SwarmEngine` owns the hecs world and the spawn director, processes spawn
//! commands, runs the systems and produces `SwarmSnapshot`s. The motion
//! integrator and the reference entity live outside; the caller feeds their
//! results back through `tick` and `resolve_contacts`.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::{Entity, World};
use log::warn;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use maskfall_ai::behavior::FireRequest;
use maskfall_core::commands::SwarmCommand;
use maskfall_core::components::{Agent, AgentId};
use maskfall_core::config::{ConfigError, LevelConfig, SpawnerSettings};
use maskfall_core::enums::AgentKind;
use maskfall_core::events::{EffectEvent, SimEvent};
use maskfall_core::state::SwarmSnapshot;
use maskfall_core::types::SimTime;

use crate::contact::ContactEvent;
use crate::director::SpawnDirector;
use crate::reference::ReferenceEntity;
use crate::systems;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub spawner: SpawnerSettings,
    /// Level applied at construction. `None` leaves the registry empty.
    pub level: Option<LevelConfig>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            spawner: SpawnerSettings::default(),
            level: Some(LevelConfig::default()),
        }
    }
}

/// The simulation engine. Owns the ECS world and all population state.
pub struct SwarmEngine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    director: SpawnDirector,
    next_agent_id: u32,
    command_queue: VecDeque<SwarmCommand>,
    despawn_buffer: Vec<Entity>,
    fire_buffer: Vec<(AgentId, FireRequest)>,
    effects: Vec<EffectEvent>,
    events: Vec<SimEvent>,
}

impl SwarmEngine {
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.spawner.validate()?;
        let mut director = SpawnDirector::new(config.spawner);
        let mut events = Vec::new();
        if let Some(level) = &config.level {
            director.configure(level)?;
            events.push(SimEvent::LevelConfigured {
                name: level.name.clone(),
            });
        }

        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            director,
            next_agent_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            fire_buffer: Vec::new(),
            effects: Vec::new(),
            events,
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SwarmCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SwarmCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance decision logic by `dt` seconds and return the resulting snapshot.
    ///
    /// Order: commands, director, behaviors (and firing), projectile
    /// lifetimes, cleanup, snapshot.
    pub fn tick(&mut self, dt: f32, reference: Option<Vec2>) -> SwarmSnapshot {
        self.process_commands();
        self.run_systems(dt, reference);
        self.time.advance(dt);

        let effects = std::mem::take(&mut self.effects);
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.director,
            effects,
            events,
        )
    }

    /// Apply contacts reported by the integrator, then remove whatever they
    /// killed or spent.
    pub fn resolve_contacts(
        &mut self,
        contacts: &[ContactEvent],
        reference: Option<&mut dyn ReferenceEntity>,
    ) {
        systems::resolution::run(&mut self.world, contacts, reference, &mut self.effects);
        self.cleanup();
    }

    /// Damage one agent. Returns true if this killed it.
    pub fn damage_agent(&mut self, entity: Entity, amount: f32) -> bool {
        match self.world.get::<&mut Agent>(entity) {
            Ok(mut agent) => agent.take_damage(amount),
            Err(_) => false,
        }
    }

    /// Forward an effect raised outside the engine (e.g. a dash) to the
    /// next snapshot.
    pub fn push_effect(&mut self, effect: EffectEvent) {
        self.effects.push(effect);
    }

    /// Replace templates and limits now rather than at the next tick.
    pub fn configure(&mut self, level: &LevelConfig) -> Result<(), ConfigError> {
        self.director.configure(level)?;
        self.events.push(SimEvent::LevelConfigured {
            name: level.name.clone(),
        });
        Ok(())
    }

    pub fn start_spawning(&mut self) {
        self.director.start();
    }

    pub fn stop_spawning(&mut self) {
        self.director.stop();
    }

    /// Destroy every live agent synchronously.
    pub fn clear_all(&mut self) -> usize {
        self.director.clear_all(&mut self.world)
    }

    /// Spawn one agent of `kind` at `position` if the cap allows.
    pub fn spawn_agent(&mut self, kind: AgentKind, position: Vec2) -> Option<Entity> {
        self.director.spawn_at(
            &mut self.world,
            &mut self.rng,
            kind,
            position,
            &mut self.next_agent_id,
        )
    }

    pub fn enemy_count(&self) -> u32 {
        self.director.enemy_count()
    }

    pub fn current_wave(&self) -> u32 {
        self.director.current_wave()
    }

    pub fn director(&self) -> &SpawnDirector {
        &self.director
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for the motion integrator.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: SwarmCommand) {
        match command {
            SwarmCommand::Configure { level } => {
                if let Err(err) = self.configure(&level) {
                    warn!("rejected level '{}': {err}", level.name);
                }
            }
            SwarmCommand::StartSpawning => self.start_spawning(),
            SwarmCommand::StopSpawning => self.stop_spawning(),
            SwarmCommand::ClearAll => {
                self.clear_all();
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32, reference: Option<Vec2>) {
        // 1. Director: removal notices, spawn/wave/difficulty timers
        self.director.tick(
            dt,
            &mut self.world,
            &mut self.rng,
            reference,
            &mut self.next_agent_id,
            &mut self.events,
        );
        // 2. Behaviors and firing
        systems::behavior::run(
            &mut self.world,
            &mut self.rng,
            dt,
            reference,
            &mut self.fire_buffer,
        );
        // 3. Projectile lifetimes
        systems::projectile::run(&mut self.world, dt);
        // 4. Cleanup (dying agents, spent projectiles)
        self.cleanup();
    }

    fn cleanup(&mut self) {
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.director,
            &mut self.events,
        );
    }
}
