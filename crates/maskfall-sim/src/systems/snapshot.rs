//! Snapshot system: builds a `SwarmSnapshot` from the world.
//!
//! Read-only; never modifies the world.

use hecs::World;

use maskfall_core::components::{Agent, Projectile, Transform, Velocity};
use maskfall_core::events::{EffectEvent, SimEvent};
use maskfall_core::state::{AgentView, ProjectileView, SwarmSnapshot};
use maskfall_core::types::SimTime;

use crate::director::SpawnDirector;

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    director: &SpawnDirector,
    effects: Vec<EffectEvent>,
    events: Vec<SimEvent>,
) -> SwarmSnapshot {
    let wave = director.wave_state();

    SwarmSnapshot {
        time: *time,
        spawning: director.is_running(),
        enemy_count: director.enemy_count(),
        current_wave: wave.current_wave,
        enemies_per_wave: wave.enemies_per_wave,
        spawn_interval: wave.spawn_interval,
        agents: build_agents(world),
        projectiles: build_projectiles(world),
        effects,
        events,
    }
}

/// Live agents ordered by id.
fn build_agents(world: &World) -> Vec<AgentView> {
    let mut agents: Vec<AgentView> = world
        .query::<(&Agent, &Transform, &Velocity)>()
        .iter()
        .filter(|(_, (agent, _, _))| agent.is_alive())
        .map(|(_, (agent, transform, velocity))| AgentView {
            id: agent.id,
            kind: agent.kind,
            position: transform.position,
            facing: transform.facing,
            velocity: velocity.linear,
            health: agent.health,
        })
        .collect();
    agents.sort_by_key(|view| view.id);
    agents
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Transform, &Velocity)>()
        .iter()
        .filter(|(_, (projectile, _, _))| !projectile.spent)
        .map(|(_, (projectile, transform, velocity))| ProjectileView {
            position: transform.position,
            velocity: velocity.linear,
            lifetime_secs: projectile.lifetime_secs,
        })
        .collect()
}
