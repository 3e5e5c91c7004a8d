//! Host configuration.

use std::time::Duration;

use impactor_sim::SimConfig;

/// Frame rate used when none is given.
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Highest frame rate the host will run at. Faster steps round to zero
/// nanoseconds and would stop simulated time from advancing.
pub const MAX_FRAME_RATE: u32 = 1000;

/// Settings for the frame-loop thread.
#[derive(Debug, Clone)]
pub struct FrameLoopConfig {
    pub sim: SimConfig,
    /// Target frames per second.
    pub frame_rate: u32,
}

impl Default for FrameLoopConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl FrameLoopConfig {
    /// Frame rate actually used, within 1..=`MAX_FRAME_RATE`.
    pub fn effective_frame_rate(&self) -> u32 {
        self.frame_rate.clamp(1, MAX_FRAME_RATE)
    }

    /// Nominal duration of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.effective_frame_rate()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        let config = FrameLoopConfig::default();
        assert_eq!(config.frame_duration().as_nanos(), 1_000_000_000u128 / 60);

        let slow = FrameLoopConfig {
            frame_rate: 0,
            ..FrameLoopConfig::default()
        };
        assert_eq!(slow.frame_duration(), Duration::from_secs(1));

        let fast = FrameLoopConfig {
            frame_rate: u32::MAX,
            ..FrameLoopConfig::default()
        };
        assert_eq!(fast.effective_frame_rate(), MAX_FRAME_RATE);
        assert_eq!(fast.frame_duration(), Duration::from_millis(1));
    }
}
