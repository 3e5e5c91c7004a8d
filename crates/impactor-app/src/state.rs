//! Host state shared between the control API and the frame loop.

use std::sync::{Arc, Mutex};

use impactor_core::commands::SimCommand;
use impactor_core::state::SimSnapshot;

use crate::error::AppError;
use crate::frame_loop::FrameLoopHandle;

/// Messages sent from the control API to the frame-loop thread.
#[derive(Debug)]
pub enum FrameLoopCommand {
    /// A command to forward to the simulation engine.
    Command(SimCommand),
    /// Stop the frame loop.
    Shutdown,
}

/// One simulation host. The frame loop is present exactly while the
/// simulation runs; the last snapshot outlives it.
#[derive(Default)]
pub struct AppState {
    pub frame_loop: Mutex<Option<FrameLoopHandle>>,
    /// Written by the frame loop after every tick.
    pub latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> Result<bool, AppError> {
        Ok(self.frame_loop.lock()?.is_some())
    }
}
