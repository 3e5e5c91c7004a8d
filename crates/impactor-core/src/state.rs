//! Simulation snapshot: the complete visible state handed to the
//! presentation layer after each tick.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::SimTime;

/// Complete visible state produced by every tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    /// Diameter currently selected for the next launch (km).
    pub diameter_km: f64,
    /// Present from launch until reset, including after impact.
    pub body: Option<BodyView>,
    pub impact: Option<ImpactRecord>,
    pub explosion: Option<ExplosionView>,
    pub camera: CameraView,
    pub earth: EarthView,
    pub events: Vec<SimEvent>,
}

/// The launched body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyView {
    pub name: String,
    pub model: AsteroidModel,
    pub mesh_path: String,
    /// Render scale for the mesh.
    pub mesh_scale: f64,
    pub diameter_km: f64,
    pub position: DVec3,
    pub rotation: DQuat,
    /// Flight progress in [0, 1].
    pub progress: f64,
    /// Once set, stop drawing the body and draw the explosion instead.
    pub terminal: bool,
}

/// Outcome of a completed flight, shown on the results panel.
///
/// Created exactly once per flight; never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactRecord {
    pub name: String,
    /// World-space point where the body hit.
    pub position: DVec3,
    /// Surface latitude (degrees).
    pub latitude: f64,
    /// Surface longitude (degrees).
    pub longitude: f64,
    pub diameter_km: f64,
    /// Released energy (TJ).
    pub energy_tj: f64,
    /// Affected area (km²).
    pub radius_km2: f64,
    /// Simulation time at impact (seconds).
    pub at_secs: f64,
}

/// Explosion sphere state for the current frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExplosionView {
    pub position: DVec3,
    pub scale: f64,
    pub opacity: f64,
    /// Unscaled sphere radius; the drawn radius is `radius * scale`.
    pub radius: f64,
}

/// Camera state for the current frame.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CameraView {
    /// Final position, jitter included.
    pub position: DVec3,
    pub fov_deg: f64,
    pub shaking: bool,
}

/// Earth orientation for the current frame.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EarthView {
    /// Rotation about Y (radians).
    pub rotation_y: f64,
    pub scale: f64,
}
