//! Snapshot system: builds the presentation view from world and engine state.

use glam::DVec3;
use hecs::{Entity, World};

use impactor_core::components::*;
use impactor_core::constants::{
    ASTEROID_MESH_SCALE, CAMERA_FOV_DEG, EARTH_MODEL_SCALE, EXPLOSION_BASE_RADIUS,
};
use impactor_core::enums::SimPhase;
use impactor_core::events::SimEvent;
use impactor_core::state::*;
use impactor_core::types::SimTime;

use crate::impact::{explosion_opacity, explosion_scale};

/// Everything the snapshot needs that lives outside the ECS world.
pub struct SnapshotInputs<'a> {
    pub time: SimTime,
    pub phase: SimPhase,
    pub diameter_km: f64,
    pub body: Option<Entity>,
    pub explosion: Option<Entity>,
    pub earth: Entity,
    pub impact: Option<&'a ImpactRecord>,
    pub camera_position: DVec3,
    pub shaking: bool,
}

/// Build a complete snapshot from current state.
pub fn build_snapshot(world: &World, inputs: SnapshotInputs<'_>, events: Vec<SimEvent>) -> SimSnapshot {
    SimSnapshot {
        time: inputs.time,
        phase: inputs.phase,
        diameter_km: inputs.diameter_km,
        body: inputs.body.and_then(|entity| body_view(world, entity)),
        impact: inputs.impact.cloned(),
        explosion: inputs.explosion.and_then(|entity| explosion_view(world, entity)),
        camera: CameraView {
            position: inputs.camera_position,
            fov_deg: CAMERA_FOV_DEG,
            shaking: inputs.shaking,
        },
        earth: earth_view(world, inputs.earth),
        events,
    }
}

fn body_view(world: &World, entity: Entity) -> Option<BodyView> {
    let mut query = world
        .query_one::<(&Asteroid, &Transform, &FlightState)>(entity)
        .ok()?;
    let (asteroid, transform, flight) = query.get()?;
    Some(BodyView {
        name: asteroid.name.clone(),
        model: asteroid.model,
        mesh_path: asteroid.model.mesh_path().to_string(),
        mesh_scale: ASTEROID_MESH_SCALE,
        diameter_km: asteroid.diameter_km,
        position: transform.position,
        rotation: transform.rotation,
        progress: flight.progress,
        terminal: flight.terminal,
    })
}

fn explosion_view(world: &World, entity: Entity) -> Option<ExplosionView> {
    let effect = world.get::<&ExplosionEffect>(entity).ok()?;
    Some(ExplosionView {
        position: effect.origin,
        scale: explosion_scale(effect.age),
        opacity: explosion_opacity(effect.age),
        radius: EXPLOSION_BASE_RADIUS,
    })
}

fn earth_view(world: &World, entity: Entity) -> EarthView {
    let rotation_y = world
        .get::<&EarthSpin>(entity)
        .map(|spin| spin.angle)
        .unwrap_or_default();
    EarthView {
        rotation_y,
        scale: EARTH_MODEL_SCALE,
    }
}
