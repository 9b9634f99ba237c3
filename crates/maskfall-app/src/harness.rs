//! Fixed-rate run loop.
//!
//! Each tick: ship update, integrator step, contact resolution, engine tick,
//! level progression.

use glam::Vec2;
use log::{info, warn};
use serde::Serialize;

use maskfall_core::config::{CampaignConfig, ConfigError};
use maskfall_core::constants::{DT, TICK_RATE};
use maskfall_core::enums::EffectKind;
use maskfall_core::events::EffectEvent;
use maskfall_core::state::SwarmSnapshot;
use maskfall_core::types::SpawnBounds;
use maskfall_sim::{KinematicIntegrator, ReferenceEntity, SimConfig, SwarmEngine};

use crate::progress::LevelProgress;
use crate::ship::Ship;

pub struct HarnessConfig {
    pub campaign: CampaignConfig,
    pub seconds: f32,
    pub seed: u64,
}

/// Effect counts for the summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EffectTally {
    pub enemy_kill: u32,
    pub damage_taken: u32,
    pub wall_hit: u32,
    pub projectile_hit: u32,
    pub dash: u32,
}

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub elapsed_secs: f64,
    pub level: String,
    pub levels_completed: u32,
    pub campaign_complete: bool,
    pub kills: u32,
    pub waves: u32,
    pub peak_population: u32,
    pub ship_health: f32,
    pub ship_destroyed: bool,
    pub dashes: u32,
    pub effects: EffectTally,
}

impl EffectTally {
    pub fn record(&mut self, effects: &[EffectEvent]) {
        for effect in effects {
            let slot = match effect.kind {
                EffectKind::EnemyKill => &mut self.enemy_kill,
                EffectKind::DamageTaken => &mut self.damage_taken,
                EffectKind::WallHit => &mut self.wall_hit,
                EffectKind::ProjectileHit => &mut self.projectile_hit,
                EffectKind::Dash => &mut self.dash,
            };
            *slot += 1;
        }
    }
}

/// Run the campaign for `config.seconds` of simulated time, or until the
/// ship is destroyed or the last level is won.
pub fn run(config: &HarnessConfig) -> Result<RunSummary, ConfigError> {
    config.campaign.validate()?;
    let mut progress = LevelProgress::new(config.campaign.levels.clone())?;

    let spawner = config.campaign.spawner.clone();
    let arena = SpawnBounds::new(spawner.area_min, spawner.area_max);
    let mut engine = SwarmEngine::new(SimConfig {
        seed: config.seed,
        spawner,
        level: Some(progress.first_level().clone()),
    })?;
    let mut integrator = KinematicIntegrator::new(arena);
    let mut ship = Ship::new(arena.center());

    let total_ticks = (config.seconds * TICK_RATE as f32).round() as u64;
    let mut tally = EffectTally::default();
    let mut peak_population = 0;
    let mut target: Option<Vec2> = None;

    info!(
        "running {:.1}s ({total_ticks} ticks) with seed {}",
        config.seconds, config.seed
    );

    for _ in 0..total_ticks {
        for effect in ship.update(DT, &arena, target) {
            engine.push_effect(effect);
        }

        let contacts = integrator.step(engine.world_mut(), DT, Some(ship.position()));
        engine.resolve_contacts(&contacts, Some(&mut ship));

        let snapshot = engine.tick(DT, Some(ship.position()));
        tally.record(&snapshot.effects);
        peak_population = peak_population.max(snapshot.enemy_count);
        target = nearest_agent(&snapshot, ship.position());

        let commands = progress.observe(&snapshot.events);
        engine.queue_commands(commands);

        if ship.is_destroyed() {
            warn!("ship destroyed at {:.2}s", engine.time().elapsed_secs);
            break;
        }
        if progress.is_finished() {
            break;
        }
    }

    let time = engine.time();
    Ok(RunSummary {
        ticks: time.tick,
        elapsed_secs: time.elapsed_secs,
        level: progress.current_level().name.clone(),
        levels_completed: progress.levels_completed(),
        campaign_complete: progress.is_finished(),
        kills: progress.total_kills(),
        waves: engine.current_wave(),
        peak_population,
        ship_health: ship.health(),
        ship_destroyed: ship.is_destroyed(),
        dashes: ship.dashes(),
        effects: tally,
    })
}

fn nearest_agent(snapshot: &SwarmSnapshot, from: Vec2) -> Option<Vec2> {
    snapshot
        .agents
        .iter()
        .map(|agent| agent.position)
        .min_by(|a, b| a.distance_squared(from).total_cmp(&b.distance_squared(from)))
}
