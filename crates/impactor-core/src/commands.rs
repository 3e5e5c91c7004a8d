//! Commands sent from the presentation layer to the simulation.
//!
//! Commands are queued and applied at the start of the next tick.

use serde::{Deserialize, Serialize};

/// All possible user actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    // --- Launch control ---
    /// Pick the diameter of the next body (km). Only honoured while idle.
    SetDiameter { km: f64 },
    /// Launch a randomly chosen asteroid with the selected diameter.
    Launch,
    /// Clear the body, impact record, explosion and camera shake.
    Reset,

    // --- Earth interaction ---
    /// Pointer pressed on Earth.
    BeginEarthDrag,
    /// Pointer moved horizontally by `delta_x` pixels while pressed.
    DragEarth { delta_x: f64 },
    /// Pointer released or left the Earth.
    EndEarthDrag,
}
