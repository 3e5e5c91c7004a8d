//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Behaviour lives in the simulation crate's controllers and systems.

use std::time::Duration;

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::enums::AsteroidModel;

/// Identity of a launched body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub name: String,
    pub model: AsteroidModel,
    /// Diameter captured at launch (km).
    pub diameter_km: f64,
}

/// World transform of a moving body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: DVec3,
    /// Orientation, including the accumulated tumble.
    pub rotation: DQuat,
    /// Accumulated tumble angles about the local X and Z axes (radians).
    pub tumble_x: f64,
    pub tumble_z: f64,
}

/// Progress of a body along its path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// Time accumulated since launch.
    pub elapsed: Duration,
    /// `elapsed / flight duration`, clamped to [0, 1]. Never decreases.
    pub progress: f64,
    /// Set once the body reaches the end of its path.
    pub terminal: bool,
}

/// Expanding, fading explosion spawned at the impact point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplosionEffect {
    pub origin: DVec3,
    /// Time since impact.
    pub age: Duration,
}

/// Earth's rotation about its Y axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EarthSpin {
    pub angle: f64,
    /// While dragging, idle spin is suspended.
    pub dragging: bool,
}
