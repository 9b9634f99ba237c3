//! Reference kinematic integrator.
//!
//! Stands in for a physics engine: Euler-integrates `Transform` from
//! `Velocity`, keeps agents inside the arena walls and reports circle
//! overlaps as contact-enter events. Contacts that persist across steps are
//! reported once.

use std::collections::HashSet;

use glam::Vec2;
use hecs::{Entity, World};

use maskfall_core::components::{Agent, AgentId, Collider, Projectile, Transform, Velocity};
use maskfall_core::constants::REFERENCE_RADIUS;
use maskfall_core::types::SpawnBounds;

use crate::contact::{ContactEvent, ContactOther};

/// Circle snapshot used for overlap tests.
struct Body {
    entity: Entity,
    position: Vec2,
    radius: f32,
    agent: Option<AgentId>,
    shot: Option<Projectile>,
}

pub struct KinematicIntegrator {
    arena: SpawnBounds,
    reference_radius: f32,
    touching: HashSet<(Entity, ContactOther)>,
}

impl KinematicIntegrator {
    pub fn new(arena: SpawnBounds) -> Self {
        Self {
            arena,
            reference_radius: REFERENCE_RADIUS,
            touching: HashSet::new(),
        }
    }

    pub fn arena(&self) -> &SpawnBounds {
        &self.arena
    }

    /// Move everything by `dt` and return the contacts that began this step.
    pub fn step(
        &mut self,
        world: &mut World,
        dt: f32,
        reference: Option<Vec2>,
    ) -> Vec<ContactEvent> {
        for (_entity, (transform, velocity)) in world.query_mut::<(&mut Transform, &Velocity)>() {
            transform.position += velocity.linear * dt;
        }

        let mut current: Vec<ContactEvent> = Vec::new();
        self.collect_walls(world, &mut current);

        let bodies = collect_bodies(world);
        if let Some(reference) = reference {
            for body in &bodies {
                if overlaps(body.position, body.radius, reference, self.reference_radius) {
                    current.push(ContactEvent::new(
                        body.entity,
                        ContactOther::Reference,
                        (body.position - reference).normalize_or_zero(),
                    ));
                }
            }
        }
        collect_pairs(&bodies, &mut current);

        let mut now_touching = HashSet::with_capacity(current.len());
        let mut began = Vec::new();
        for contact in current {
            let key = (contact.entity, contact.other);
            if now_touching.insert(key) && !self.touching.contains(&key) {
                began.push(contact);
            }
        }
        self.touching = now_touching;
        began
    }

    /// Clamp agents inside the arena; projectiles only report the wall.
    fn collect_walls(&self, world: &mut World, out: &mut Vec<ContactEvent>) {
        let (min, max) = (self.arena.min, self.arena.max);

        for (entity, (transform, collider, agent)) in
            world.query_mut::<(&mut Transform, &Collider, Option<&Agent>)>()
        {
            let r = collider.radius;
            let p = transform.position;
            let mut normal = Vec2::ZERO;
            let mut hit = false;
            if p.x - r < min.x {
                normal.x += 1.0;
                hit = true;
            }
            if p.x + r > max.x {
                normal.x -= 1.0;
                hit = true;
            }
            if p.y - r < min.y {
                normal.y += 1.0;
                hit = true;
            }
            if p.y + r > max.y {
                normal.y -= 1.0;
                hit = true;
            }
            if !hit {
                continue;
            }

            if agent.is_some() {
                transform.position = clamp_inside(p, r, min, max);
            }
            out.push(ContactEvent::new(
                entity,
                ContactOther::Wall,
                normal.normalize_or_zero(),
            ));
        }
    }
}

fn collect_bodies(world: &World) -> Vec<Body> {
    let mut bodies = Vec::new();
    let mut query = world.query::<(&Transform, &Collider, Option<&Agent>, Option<&Projectile>)>();
    for (entity, (transform, collider, agent, projectile)) in query.iter() {
        bodies.push(Body {
            entity,
            position: transform.position,
            radius: collider.radius,
            agent: agent.map(|a| a.id),
            shot: projectile.cloned(),
        });
    }
    bodies
}

/// Pairwise overlaps. Both sides get an event; a projectile never sees its owner.
fn collect_pairs(bodies: &[Body], out: &mut Vec<ContactEvent>) {
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            if !overlaps(a.position, a.radius, b.position, b.radius) {
                continue;
            }
            if excluded(a, b) || excluded(b, a) {
                continue;
            }
            let normal = (a.position - b.position).normalize_or_zero();
            out.push(ContactEvent::new(a.entity, tag(b), normal));
            out.push(ContactEvent::new(b.entity, tag(a), -normal));
        }
    }
}

fn tag(body: &Body) -> ContactOther {
    if body.agent.is_some() {
        ContactOther::Agent(body.entity)
    } else {
        ContactOther::Projectile(body.entity)
    }
}

/// True if `projectile` was fired by `other`.
fn excluded(projectile: &Body, other: &Body) -> bool {
    match (&projectile.shot, other.agent) {
        (Some(shot), Some(id)) => shot.excludes(id),
        _ => false,
    }
}

fn overlaps(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}

fn clamp_inside(p: Vec2, r: f32, min: Vec2, max: Vec2) -> Vec2 {
    let lo = min + Vec2::splat(r);
    let hi = max - Vec2::splat(r);
    Vec2::new(clamp_axis(p.x, lo.x, hi.x), clamp_axis(p.y, lo.y, hi.y))
}

/// Arena narrower than the body: pin to the middle.
fn clamp_axis(v: f32, lo: f32, hi: f32) -> f32 {
    if lo > hi {
        (lo + hi) * 0.5
    } else {
        v.clamp(lo, hi)
    }
}
