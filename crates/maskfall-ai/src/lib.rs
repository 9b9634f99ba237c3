//! Agent AI for MASKFALL.
//!
//! Implements the per-variant behavior routines, kind-driven behavior
//! profiles and the steering math they share.

pub mod behavior;
pub mod profiles;
pub mod steering;

pub use maskfall_core as core;

#[cfg(test)]
mod tests;
