//! Events emitted by the simulation for audio and UI feedback.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// One-shot notifications collected during a tick and handed to the host
/// in the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A body left its entry point.
    Launched {
        name: String,
        model: AsteroidModel,
        diameter_km: f64,
    },
    /// A launch or diameter change was refused.
    LaunchRejected { reason: LaunchRejection },
    /// The body reached the impact target.
    Impact { position: DVec3 },
    /// Play the impact sound once.
    PlayImpactSound,
    /// Camera shake began.
    CameraShakeStarted,
    /// Camera shake timer expired.
    CameraShakeEnded,
    /// The explosion has fully faded.
    ExplosionFaded,
    /// All simulation state was cleared.
    Reset,
}
