//! Explosion aging system.

use std::time::Duration;

use hecs::World;

use impactor_core::components::ExplosionEffect;
use impactor_core::events::SimEvent;

use crate::impact::explosion_opacity;

/// Age every explosion by `delta`; report those that finish fading.
pub fn run(world: &mut World, delta: Duration, events: &mut Vec<SimEvent>) {
    for (_entity, effect) in world.query_mut::<&mut ExplosionEffect>() {
        let was_visible = explosion_opacity(effect.age) > 0.0;
        effect.age += delta;
        if was_visible && explosion_opacity(effect.age) <= 0.0 {
            events.push(SimEvent::ExplosionFaded);
        }
    }
}
