//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// No body launched. Diameter may be changed and a launch accepted.
    #[default]
    Idle,
    /// A body is travelling toward Earth.
    Flying,
    /// The body has hit. Waiting for a reset before the next launch.
    Impacted,
}

impl SimPhase {
    /// Whether a body (flying or already impacted) occupies the scene.
    pub fn has_body(self) -> bool {
        !matches!(self, SimPhase::Idle)
    }
}

/// Catalogued asteroid meshes. One is chosen at random per launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidModel {
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
}

impl AsteroidModel {
    pub const ALL: [AsteroidModel; 6] = [
        AsteroidModel::A1,
        AsteroidModel::A2,
        AsteroidModel::A3,
        AsteroidModel::A4,
        AsteroidModel::A5,
        AsteroidModel::A6,
    ];

    /// Short label used in display names ("A1".."A6").
    pub fn label(self) -> &'static str {
        match self {
            AsteroidModel::A1 => "A1",
            AsteroidModel::A2 => "A2",
            AsteroidModel::A3 => "A3",
            AsteroidModel::A4 => "A4",
            AsteroidModel::A5 => "A5",
            AsteroidModel::A6 => "A6",
        }
    }

    /// Asset path of the STL mesh for this model.
    pub fn mesh_path(self) -> &'static str {
        match self {
            AsteroidModel::A1 => "/models/asteroids/a1.stl",
            AsteroidModel::A2 => "/models/asteroids/a2.stl",
            AsteroidModel::A3 => "/models/asteroids/a3.stl",
            AsteroidModel::A4 => "/models/asteroids/a4.stl",
            AsteroidModel::A5 => "/models/asteroids/a5.stl",
            AsteroidModel::A6 => "/models/asteroids/a6.stl",
        }
    }

    /// Display name shown on the results panel.
    pub fn display_name(self) -> String {
        format!("Asteroid {}", self.label())
    }
}

/// Why a launch (or a diameter change) was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchRejection {
    /// A body is still on its way in.
    BodyInFlight,
    /// The previous body already hit; reset first.
    AwaitingReset,
}
