//! Simulation constants and tuning parameters.

use std::time::Duration;

use glam::DVec3;

// --- Flight ---

/// Time for a launched body to travel from entry point to impact.
pub const FLIGHT_DURATION: Duration = Duration::from_secs(4);

/// Tumble increment about the body's local X axis per tick (radians).
pub const TUMBLE_STEP_X: f64 = 0.01;

/// Tumble increment about the body's local Z axis per tick (radians).
pub const TUMBLE_STEP_Z: f64 = 0.02;

/// Render scale applied to the asteroid mesh.
pub const ASTEROID_MESH_SCALE: f64 = 0.8;

// --- Orbit path ---

/// Horizontal spread of the randomized entry point (full width).
pub const ENTRY_SPREAD_X: f64 = 60.0;

/// Vertical spread of the randomized entry point (full height).
pub const ENTRY_SPREAD_Y: f64 = 40.0;

/// Depth of the entry point.
pub const ENTRY_DEPTH: f64 = 50.0;

/// Spread of the randomized mid control point on both axes.
pub const CONTROL_SPREAD: f64 = 20.0;

/// Depth of the mid control point.
pub const CONTROL_DEPTH: f64 = 25.0;

/// Fixed impact target, just outside Earth's surface.
pub const IMPACT_TARGET: DVec3 = DVec3::new(0.0, 0.0, 10.5);

/// Number of samples used to tabulate curve arc length.
pub const ARC_LENGTH_DIVISIONS: usize = 200;

/// Parameter offset used for finite-difference tangents.
pub const TANGENT_DELTA: f64 = 1e-4;

// --- Impact ---

/// Impact energy per km of diameter (TJ).
pub const ENERGY_COEFFICIENT: f64 = 5000.0;

/// Affected area per km of diameter (km²).
pub const RADIUS_COEFFICIENT: f64 = 10.0;

/// Explosion growth per second since impact.
pub const EXPLOSION_GROWTH_RATE: f64 = 5.0;

/// Explosion opacity loss per second since impact.
pub const EXPLOSION_DECAY_RATE: f64 = 1.5;

/// Base radius of the explosion sphere.
pub const EXPLOSION_BASE_RADIUS: f64 = 0.5;

// --- Camera ---

/// Camera rest position looking at Earth.
pub const CAMERA_HOME: DVec3 = DVec3::new(0.0, 0.0, 40.0);

/// Camera vertical field of view (degrees).
pub const CAMERA_FOV_DEG: f64 = 60.0;

/// How long the camera shakes after an impact.
pub const CAMERA_SHAKE_DURATION: Duration = Duration::from_millis(500);

/// Maximum per-axis jitter applied while shaking.
pub const CAMERA_JITTER_AMPLITUDE: f64 = 0.2;

// --- Earth ---

/// Idle Earth spin per tick (radians about Y).
pub const EARTH_SPIN_STEP: f64 = 0.001;

/// Earth rotation per pixel of horizontal drag (radians).
pub const EARTH_DRAG_SENSITIVITY: f64 = 0.005;

/// Render scale of the Earth model.
pub const EARTH_MODEL_SCALE: f64 = 10.0;

// --- Diameter selection ---

/// Smallest selectable diameter (km).
pub const DIAMETER_MIN_KM: f64 = 0.5;

/// Largest selectable diameter (km).
pub const DIAMETER_MAX_KM: f64 = 10.0;

/// Slider granularity (km).
pub const DIAMETER_STEP_KM: f64 = 0.5;

/// Diameter selected when the simulation starts.
pub const DEFAULT_DIAMETER_KM: f64 = 1.0;

// --- Starfield ---

/// Number of background stars.
pub const STAR_COUNT: usize = 3000;

/// Side length of the cube the stars are scattered in.
pub const STAR_FIELD_EXTENT: f64 = 2000.0;
