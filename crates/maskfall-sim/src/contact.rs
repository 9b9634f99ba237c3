//! Contact events reported by the motion integrator.

use glam::Vec2;
use hecs::Entity;

/// What an entity touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactOther {
    Reference,
    Wall,
    Agent(Entity),
    Projectile(Entity),
}

/// One contact-enter event, seen from `entity`'s side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactEvent {
    pub entity: Entity,
    pub other: ContactOther,
    /// Unit normal pointing away from `other` toward `entity`.
    pub normal: Vec2,
}

impl ContactEvent {
    pub fn new(entity: Entity, other: ContactOther, normal: Vec2) -> Self {
        Self {
            entity,
            other,
            normal,
        }
    }
}
