//! Simulation engine for IMPACTOR.
//!
//! Flies a single asteroid along a randomized curve toward Earth, sequences
//! the impact and its effects, and produces `SimSnapshot`s for the
//! presentation layer. Driven entirely by the host's `tick(delta)`.

pub mod camera_shake;
pub mod engine;
pub mod flight;
pub mod impact;
pub mod orbit_path;
pub mod systems;
pub mod world_setup;

pub use impactor_core as core;
pub use engine::{LaunchError, SimConfig, SimulationEngine};
