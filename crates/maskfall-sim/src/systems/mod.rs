//! ECS systems that operate on the simulation world.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They do not own state; it lives in components and the director.

pub mod behavior;
pub mod cleanup;
pub mod movement;
pub mod projectile;
pub mod resolution;
pub mod snapshot;
