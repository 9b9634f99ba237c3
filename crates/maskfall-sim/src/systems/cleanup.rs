//! Cleanup system: removes dying agents and spent projectiles.

use hecs::{Entity, World};

use maskfall_core::components::{Agent, Projectile};
use maskfall_core::enums::LifeState;
use maskfall_core::events::SimEvent;

use crate::director::SpawnDirector;

/// Despawn agents in `Dying` (posting one removal notice and one
/// `AgentRemoved` each) and every spent projectile.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    director: &mut SpawnDirector,
    events: &mut Vec<SimEvent>,
) {
    despawn_buffer.clear();

    for (entity, agent) in world.query_mut::<&mut Agent>() {
        if agent.life == LifeState::Dying {
            agent.life = LifeState::Removed;
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
        director.notify_removed(entity);
        events.push(SimEvent::AgentRemoved);
    }

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if projectile.spent {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
