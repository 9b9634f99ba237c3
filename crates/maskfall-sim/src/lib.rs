//! Simulation engine for MASKFALL.
//!
//! Owns the hecs ECS world, spawns and retires agents through the spawn
//! director, runs behavior and projectile systems, resolves contacts and
//! produces `SwarmSnapshot`s for the caller.

pub mod contact;
pub mod director;
pub mod engine;
pub mod reference;
pub mod registry;
pub mod sampler;
pub mod systems;
pub mod world_setup;

pub use contact::{ContactEvent, ContactOther};
pub use engine::{SimConfig, SwarmEngine};
pub use maskfall_core as core;
pub use reference::ReferenceEntity;
pub use systems::movement::KinematicIntegrator;
