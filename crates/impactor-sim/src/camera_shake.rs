//! Camera shake after an impact.
//!
//! Runs for a fixed span of accumulated frame time, so the shake lasts the
//! same wall-clock duration at any frame rate. Stops abruptly on expiry.

use std::time::Duration;

use glam::DVec2;
use rand::Rng;

use impactor_core::constants::{CAMERA_JITTER_AMPLITUDE, CAMERA_SHAKE_DURATION};

/// Result of advancing the shake by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShakeStep {
    /// Not shaking.
    Idle,
    /// Offset to add to the camera's horizontal/vertical position this frame.
    Jitter(DVec2),
    /// The timer ran out during this frame. No offset is applied.
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraShake {
    active: bool,
    remaining: Duration,
    duration: Duration,
    amplitude: f64,
}

impl Default for CameraShake {
    fn default() -> Self {
        Self::new(CAMERA_SHAKE_DURATION, CAMERA_JITTER_AMPLITUDE)
    }
}

impl CameraShake {
    pub fn new(duration: Duration, amplitude: f64) -> Self {
        Self {
            active: false,
            remaining: Duration::ZERO,
            duration,
            amplitude,
        }
    }

    /// Start (or restart) the shake timer.
    pub fn activate(&mut self) {
        self.active = true;
        self.remaining = self.duration;
    }

    /// Stop immediately.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.remaining = Duration::ZERO;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Advance by `delta` and produce this frame's jitter.
    pub fn tick<R: Rng + ?Sized>(&mut self, delta: Duration, rng: &mut R) -> ShakeStep {
        if !self.active {
            return ShakeStep::Idle;
        }

        self.remaining = self.remaining.saturating_sub(delta);
        if self.remaining.is_zero() {
            self.active = false;
            return ShakeStep::Expired;
        }

        ShakeStep::Jitter(DVec2::new(
            self.jitter(rng),
            self.jitter(rng),
        ))
    }

    /// Uniform in [-amplitude, amplitude).
    fn jitter<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        (rng.gen::<f64>() - 0.5) * 2.0 * self.amplitude
    }
}
