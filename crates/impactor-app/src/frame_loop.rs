//! Frame loop thread: drives the engine with measured wall-clock deltas.
//!
//! The engine is created inside the thread and never leaves it. Commands
//! arrive over an `mpsc` channel; each tick's snapshot replaces the shared
//! latest snapshot for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Instant;

use impactor_core::commands::SimCommand;
use impactor_core::state::SimSnapshot;
use impactor_sim::SimulationEngine;

use crate::config::FrameLoopConfig;
use crate::error::AppError;
use crate::state::FrameLoopCommand;

/// A running frame loop: its command channel and its thread.
#[derive(Debug)]
pub struct FrameLoopHandle {
    command_tx: mpsc::Sender<FrameLoopCommand>,
    thread: JoinHandle<()>,
}

impl FrameLoopHandle {
    /// Forward a command; it applies at the next frame.
    pub fn send(&self, command: SimCommand) -> Result<(), AppError> {
        self.command_tx
            .send(FrameLoopCommand::Command(command))
            .map_err(|_| AppError::ChannelClosed)
    }

    /// Stop the loop and wait for its thread. No snapshot is published
    /// after this returns.
    pub fn shutdown(self) -> Result<(), AppError> {
        // A loop that already exited has dropped its receiver
        let _ = self.command_tx.send(FrameLoopCommand::Shutdown);
        self.thread.join().map_err(|_| AppError::FrameLoopPanicked)
    }
}

/// Spawns the frame loop in a new thread.
pub fn spawn_frame_loop(
    config: FrameLoopConfig,
    latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
) -> Result<FrameLoopHandle, AppError> {
    let (command_tx, cmd_rx) = mpsc::channel::<FrameLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("impactor-frame-loop".into())
        .spawn(move || {
            run_frame_loop(config, cmd_rx, &latest_snapshot);
        })?;

    Ok(FrameLoopHandle { command_tx, thread })
}

/// Runs until a Shutdown command or channel disconnect.
fn run_frame_loop(
    config: FrameLoopConfig,
    cmd_rx: mpsc::Receiver<FrameLoopCommand>,
    latest_snapshot: &Mutex<Option<SimSnapshot>>,
) {
    let frame_duration = config.frame_duration();
    log::info!(
        "frame loop started at {} Hz (seed {})",
        config.effective_frame_rate(),
        config.sim.seed
    );

    let mut engine = SimulationEngine::new(config.sim);
    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(FrameLoopCommand::Command(cmd)) => engine.queue_command(cmd),
                Ok(FrameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::info!("frame loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance by the time actually elapsed since the last frame
        let now = Instant::now();
        let snapshot = engine.tick((now - last_frame).as_secs_f64());
        last_frame = now;

        // 3. Publish for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next frame
        next_frame_time += frame_duration;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame_duration * 2 {
            // Too far behind; don't try to catch up
            next_frame_time = now;
        }
    }
}
