//! Entity spawn factories.
//!
//! Creates agent and projectile entities with their component bundles.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;

use maskfall_ai::behavior::{initial_state, FireRequest};
use maskfall_ai::profiles::get_profile;
use maskfall_ai::steering::facing_angle;
use maskfall_core::components::*;
use maskfall_core::constants::*;
use maskfall_core::enums::{AgentKind, LifeState};

/// Spawn one agent of `kind` at `position`, stats taken from its profile.
pub fn spawn_agent<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    kind: AgentKind,
    position: Vec2,
    id: AgentId,
) -> Entity {
    let profile = get_profile(kind);

    world.spawn((
        Agent {
            id,
            kind,
            life: LifeState::Alive,
            health: profile.health,
            contact_damage: profile.contact_damage,
        },
        Transform {
            position,
            facing: 0.0,
        },
        Velocity::default(),
        Collider {
            radius: AGENT_RADIUS,
        },
        initial_state(kind, rng),
    ))
}

/// Spawn a projectile fired by `owner`. Velocity is fixed at creation.
pub fn spawn_projectile(world: &mut World, request: &FireRequest, owner: AgentId) -> Entity {
    world.spawn((
        Projectile {
            damage: request.damage,
            lifetime_secs: request.lifetime,
            owner_exclusion: vec![owner],
            spent: false,
        },
        Transform {
            position: request.origin,
            facing: facing_angle(request.direction),
        },
        Velocity {
            linear: request.direction * request.speed,
        },
        Collider {
            radius: PROJECTILE_RADIUS,
        },
    ))
}
