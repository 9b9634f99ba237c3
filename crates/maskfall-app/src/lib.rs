//! MASKFALL headless harness.
//!
//! Drives the simulation engine at a fixed tick rate with a scripted
//! reference ship and the reference integrator, and advances through the
//! campaign's levels as kills accumulate.

pub mod cli;
pub mod harness;
pub mod logging;
pub mod progress;
pub mod ship;

pub use maskfall_core as core;

#[cfg(test)]
mod tests;
