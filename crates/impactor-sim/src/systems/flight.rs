//! Flight system: advances the active body.

use std::time::Duration;

use glam::DVec3;
use hecs::{Entity, World};

use impactor_core::components::{FlightState, Transform};

use crate::flight::FlightController;
use crate::orbit_path::OrbitPath;

/// Advance the active body by `delta`.
///
/// Returns the arrival position on the frame the flight completes. A
/// missing body, or a body missing its path or transform, is skipped.
pub fn run(
    world: &mut World,
    body: Option<Entity>,
    controller: &FlightController,
    delta: Duration,
) -> Option<DVec3> {
    let entity = body?;
    let (state, path, transform) = world
        .query_one_mut::<(&mut FlightState, &OrbitPath, &mut Transform)>(entity)
        .ok()?;
    controller.tick(state, delta, path, transform)
}
