//! Entity spawning for the scene: Earth, the launched body and the
//! explosion. Also the one-off starfield layout.

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;

use impactor_core::components::*;
use impactor_core::constants::STAR_FIELD_EXTENT;
use impactor_core::enums::AsteroidModel;

use crate::flight::facing;
use crate::orbit_path::OrbitPath;

/// Spawn the Earth entity.
pub fn spawn_earth(world: &mut World) -> Entity {
    world.spawn((EarthSpin::default(),))
}

/// Pick one of the catalogued asteroid meshes uniformly.
pub fn pick_model<R: Rng + ?Sized>(rng: &mut R) -> AsteroidModel {
    let count = AsteroidModel::ALL.len();
    let index = ((rng.gen::<f64>() * count as f64) as usize).min(count - 1);
    AsteroidModel::ALL[index]
}

/// Spawn a body at the start of `path`, facing along it.
pub fn spawn_body(world: &mut World, asteroid: Asteroid, path: OrbitPath) -> Entity {
    let transform = Transform {
        position: path.point_at(0.0),
        rotation: facing(path.tangent_at(0.0)),
        ..Default::default()
    };
    world.spawn((asteroid, transform, FlightState::default(), path))
}

/// Spawn the explosion effect at `origin`.
pub fn spawn_explosion(world: &mut World, origin: DVec3) -> Entity {
    world.spawn((ExplosionEffect {
        origin,
        age: Default::default(),
    },))
}

/// Scatter `count` stars uniformly in a cube centred on the origin.
pub fn generate_starfield<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<DVec3> {
    let mut coord = || (rng.gen::<f64>() - 0.5) * STAR_FIELD_EXTENT;
    (0..count)
        .map(|_| DVec3::new(coord(), coord(), coord()))
        .collect()
}
