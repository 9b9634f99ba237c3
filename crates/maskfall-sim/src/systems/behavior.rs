//! Behavior system: runs each live agent's variant and applies the result.

use glam::Vec2;
use hecs::World;
use log::debug;
use rand_chacha::ChaCha8Rng;

use maskfall_ai::behavior::{evaluate, BehaviorContext, FireRequest};
use maskfall_core::components::{Agent, AgentId, BehaviorState, Transform, Velocity};

use crate::world_setup;

/// Evaluate every agent, write velocity intents and facing, then spawn the
/// requested projectiles. Returns the number of shots fired.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    dt: f32,
    reference: Option<Vec2>,
    fire_buffer: &mut Vec<(AgentId, FireRequest)>,
) -> usize {
    fire_buffer.clear();

    for (_entity, (agent, transform, velocity, state)) in
        world.query_mut::<(&Agent, &mut Transform, &mut Velocity, &mut BehaviorState)>()
    {
        if !agent.is_alive() {
            velocity.linear = Vec2::ZERO;
            continue;
        }

        let ctx = BehaviorContext {
            position: transform.position,
            reference,
            dt,
        };
        let update = evaluate(&ctx, state, rng);

        velocity.linear = update.velocity;
        if let Some(facing) = update.facing {
            transform.facing = facing;
        }
        if let Some(fire) = update.fire {
            fire_buffer.push((agent.id, fire));
        }
    }

    let shots = fire_buffer.len();
    for (owner, request) in fire_buffer.drain(..) {
        world_setup::spawn_projectile(world, &request, owner);
        debug!("agent #{} fired toward {:?}", owner.0, request.direction);
    }
    shots
}
