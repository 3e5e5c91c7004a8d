//! Flight controller: moves a body along its path from frame deltas.
//!
//! Pure functions over plain data. No ECS dependency; the flight system
//! resolves components and calls in here.

use std::time::Duration;

use glam::{DQuat, DVec3, EulerRot};

use impactor_core::components::{FlightState, Transform};
use impactor_core::constants::{FLIGHT_DURATION, TUMBLE_STEP_X, TUMBLE_STEP_Z};

use crate::orbit_path::OrbitPath;

/// Advances flights over a fixed total duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightController {
    duration: Duration,
}

impl Default for FlightController {
    fn default() -> Self {
        Self::new(FLIGHT_DURATION)
    }
}

impl FlightController {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Advance one frame.
    ///
    /// Returns the final position on the frame the body first reaches the
    /// end of its path, and `None` otherwise. Once terminal, further calls
    /// change nothing.
    pub fn tick(
        &self,
        state: &mut FlightState,
        delta: Duration,
        path: &OrbitPath,
        transform: &mut Transform,
    ) -> Option<DVec3> {
        if state.terminal {
            return None;
        }

        state.elapsed += delta;
        state.progress = progress_of(state.elapsed, self.duration).max(state.progress);

        let position = path.point_at(state.progress);
        let tangent = path.tangent_at(state.progress);

        transform.position = position;
        transform.tumble_x += TUMBLE_STEP_X;
        transform.tumble_z += TUMBLE_STEP_Z;
        transform.rotation = facing(tangent) * tumble(transform.tumble_x, transform.tumble_z);

        if state.progress >= 1.0 {
            state.terminal = true;
            return Some(position);
        }
        None
    }
}

/// Fraction of `duration` covered by `elapsed`, clamped to 1.
pub fn progress_of(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// Rotation turning the body's local +Z toward `direction`.
pub fn facing(direction: DVec3) -> DQuat {
    let direction = direction.normalize_or_zero();
    if direction == DVec3::ZERO {
        return DQuat::IDENTITY;
    }
    DQuat::from_rotation_arc(DVec3::Z, direction)
}

fn tumble(x: f64, z: f64) -> DQuat {
    DQuat::from_euler(EulerRot::XYZ, x, 0.0, z)
}
