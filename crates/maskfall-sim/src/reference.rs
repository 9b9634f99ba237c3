//! Capability interface of the privileged reference entity (the player ship).

use glam::Vec2;

/// What contact resolution needs from the reference entity.
/// Implemented outside the engine; the engine never owns the reference.
pub trait ReferenceEntity {
    fn position(&self) -> Vec2;

    /// While dashing, agent contact is lethal to the agent instead.
    fn is_dashing(&self) -> bool;

    fn take_damage(&mut self, amount: f32);
}
