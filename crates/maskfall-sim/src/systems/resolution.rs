//! Contact resolution: applies the agent and projectile contact rules.
//!
//! Each event is resolved once. Events whose entity is gone, already dying
//! or already spent are dropped.

use glam::Vec2;
use hecs::{Entity, World};
use log::debug;

use maskfall_ai::behavior::on_obstacle_contact;
use maskfall_core::components::{Agent, BehaviorState, Projectile, Transform};
use maskfall_core::enums::EffectKind;
use maskfall_core::events::EffectEvent;

use crate::contact::{ContactEvent, ContactOther};
use crate::reference::ReferenceEntity;

/// Resolve a batch of contacts in order.
pub fn run(
    world: &mut World,
    contacts: &[ContactEvent],
    mut reference: Option<&mut dyn ReferenceEntity>,
    effects: &mut Vec<EffectEvent>,
) {
    for contact in contacts {
        if world.get::<&Agent>(contact.entity).is_ok() {
            match contact.other {
                ContactOther::Reference => {
                    if let Some(reference) = reference.as_deref_mut() {
                        agent_hits_reference(world, contact.entity, reference, effects);
                    }
                }
                ContactOther::Wall | ContactOther::Agent(_) => {
                    agent_hits_obstacle(world, contact.entity, contact.normal);
                }
                ContactOther::Projectile(_) => {}
            }
        } else if world.get::<&Projectile>(contact.entity).is_ok() {
            match contact.other {
                ContactOther::Reference => {
                    if let Some(reference) = reference.as_deref_mut() {
                        projectile_hits_reference(world, contact.entity, reference, effects);
                    }
                }
                ContactOther::Wall => projectile_hits_wall(world, contact.entity),
                ContactOther::Agent(_) | ContactOther::Projectile(_) => {}
            }
        }
    }
}

fn agent_hits_reference(
    world: &mut World,
    entity: Entity,
    reference: &mut dyn ReferenceEntity,
    effects: &mut Vec<EffectEvent>,
) {
    let position = position_of(world, entity);
    let Ok(mut agent) = world.get::<&mut Agent>(entity) else {
        return;
    };
    if !agent.is_alive() {
        return;
    }

    if reference.is_dashing() {
        agent.kill();
        effects.push(EffectEvent::new(EffectKind::EnemyKill, position));
        debug!("agent #{} destroyed by dash", agent.id.0);
    } else {
        reference.take_damage(agent.contact_damage);
        effects.push(EffectEvent::new(EffectKind::DamageTaken, position));
        debug!("agent #{} hit the reference", agent.id.0);
    }
}

fn agent_hits_obstacle(world: &mut World, entity: Entity, normal: Vec2) {
    let alive = world
        .get::<&Agent>(entity)
        .map(|agent| agent.is_alive())
        .unwrap_or(false);
    if !alive {
        return;
    }
    if let Ok(mut state) = world.get::<&mut BehaviorState>(entity) {
        on_obstacle_contact(&mut state, normal);
    }
}

fn projectile_hits_reference(
    world: &mut World,
    entity: Entity,
    reference: &mut dyn ReferenceEntity,
    effects: &mut Vec<EffectEvent>,
) {
    let position = position_of(world, entity);
    let Ok(mut projectile) = world.get::<&mut Projectile>(entity) else {
        return;
    };
    if projectile.spent {
        return;
    }

    if reference.is_dashing() {
        effects.push(EffectEvent::new(EffectKind::EnemyKill, position));
    } else {
        reference.take_damage(projectile.damage);
        effects.push(EffectEvent::new(EffectKind::ProjectileHit, position));
    }
    projectile.spent = true;
}

fn projectile_hits_wall(world: &mut World, entity: Entity) {
    if let Ok(mut projectile) = world.get::<&mut Projectile>(entity) {
        projectile.spent = true;
    }
}

fn position_of(world: &World, entity: Entity) -> Vec2 {
    world
        .get::<&Transform>(entity)
        .map(|transform| transform.position)
        .unwrap_or_default()
}
