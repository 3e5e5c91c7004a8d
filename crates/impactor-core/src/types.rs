//! Fundamental simulation types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Simulation time tracking.
///
/// Advances by the host-supplied frame delta, so it follows wall-clock time
/// regardless of frame rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks processed.
    pub frame: u64,
    /// Accumulated simulated time.
    pub elapsed: Duration,
}

impl SimTime {
    /// Advance by one frame of length `delta`.
    pub fn advance(&mut self, delta: Duration) {
        self.frame += 1;
        self.elapsed += delta;
    }

    /// Elapsed simulation time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
