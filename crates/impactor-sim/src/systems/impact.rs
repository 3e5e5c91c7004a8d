//! Impact system: turns an arrival into the impact record and effects.

use std::time::Duration;

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;

use impactor_core::components::Asteroid;
use impactor_core::events::SimEvent;

use crate::camera_shake::CameraShake;
use crate::impact::ImpactSequencer;
use crate::world_setup;

/// Sequence the impact of `body` at `position`.
///
/// On the first arrival of a flight: records the impact, spawns the
/// explosion, queues one impact sound and starts the camera shake.
/// Returns the explosion entity in that case, `None` otherwise.
#[allow(clippy::too_many_arguments)]
pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    body: Entity,
    position: DVec3,
    at: Duration,
    sequencer: &mut ImpactSequencer,
    camera_shake: &mut CameraShake,
    rng: &mut R,
    events: &mut Vec<SimEvent>,
) -> Option<Entity> {
    let asteroid = match world.get::<&Asteroid>(body) {
        Ok(a) => (*a).clone(),
        Err(_) => return None,
    };

    let record = sequencer.on_arrival(&asteroid, position, at, rng)?;
    log::info!(
        "{} impacted at {:.2}° lat, {:.2}° long ({:.0} TJ, {:.0} km²)",
        record.name,
        record.latitude,
        record.longitude,
        record.energy_tj,
        record.radius_km2,
    );

    let explosion = world_setup::spawn_explosion(world, position);
    camera_shake.activate();

    events.push(SimEvent::Impact { position });
    events.push(SimEvent::PlayImpactSound);
    events.push(SimEvent::CameraShakeStarted);

    Some(explosion)
}
