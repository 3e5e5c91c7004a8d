//! Earth spin system.

use hecs::World;

use impactor_core::components::EarthSpin;
use impactor_core::constants::EARTH_SPIN_STEP;

/// Idle rotation, suspended while the user drags the globe.
pub fn run(world: &mut World) {
    for (_entity, spin) in world.query_mut::<&mut EarthSpin>() {
        if !spin.dragging {
            spin.angle += EARTH_SPIN_STEP;
        }
    }
}
