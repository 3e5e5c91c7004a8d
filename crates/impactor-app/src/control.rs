//! Control API: starts and stops the frame loop and forwards commands to it.

use impactor_core::commands::SimCommand;
use impactor_core::state::SimSnapshot;

use crate::config::FrameLoopConfig;
use crate::error::AppError;
use crate::frame_loop;
use crate::state::AppState;

/// Start the simulation. Spawns the frame loop unless one is running.
pub fn start_simulation(state: &AppState, config: FrameLoopConfig) -> Result<(), AppError> {
    let mut frame_loop = state.frame_loop.lock()?;

    if frame_loop.is_some() {
        return Err(AppError::AlreadyRunning);
    }

    *frame_loop = Some(frame_loop::spawn_frame_loop(
        config,
        state.latest_snapshot.clone(),
    )?);

    Ok(())
}

/// Forward a command to the engine; it applies at the next frame.
pub fn send_command(state: &AppState, command: SimCommand) -> Result<(), AppError> {
    match state.frame_loop.lock()?.as_ref() {
        Some(handle) => handle.send(command),
        None => Err(AppError::NotStarted),
    }
}

/// Latest published snapshot, if any frame has run.
pub fn get_snapshot(state: &AppState) -> Result<Option<SimSnapshot>, AppError> {
    let lock = state.latest_snapshot.lock()?;
    Ok(lock.clone())
}

/// Stop the frame loop and wait for its thread to exit. The last snapshot
/// stays readable.
pub fn stop_simulation(state: &AppState) -> Result<(), AppError> {
    let handle = state.frame_loop.lock()?.take();

    match handle {
        Some(handle) => handle.shutdown(),
        None => Err(AppError::NotStarted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use impactor_core::enums::SimPhase;
    use std::time::{Duration, Instant};

    fn poll_phase(state: &AppState, phase: SimPhase) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Ok(Some(snapshot)) = get_snapshot(state) {
                if snapshot.phase == phase {
                    return true;
                }
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        false
    }

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        let result = send_command(&state, SimCommand::Launch);
        assert!(matches!(result, Err(AppError::NotStarted)));
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_stop_before_start_fails() {
        let state = AppState::new();
        assert!(matches!(stop_simulation(&state), Err(AppError::NotStarted)));
    }

    #[test]
    fn test_start_twice_fails() {
        let state = AppState::new();
        start_simulation(&state, FrameLoopConfig::default()).unwrap();
        assert!(state.is_running().unwrap());

        let second = start_simulation(&state, FrameLoopConfig::default());
        assert!(matches!(second, Err(AppError::AlreadyRunning)));

        stop_simulation(&state).unwrap();
    }

    #[test]
    fn test_launch_and_reset_through_control() {
        let state = AppState::new();
        start_simulation(&state, FrameLoopConfig::default()).unwrap();

        send_command(&state, SimCommand::SetDiameter { km: 3.0 }).unwrap();
        send_command(&state, SimCommand::Launch).unwrap();
        assert!(poll_phase(&state, SimPhase::Flying));

        let snapshot = get_snapshot(&state).unwrap().unwrap();
        assert_eq!(snapshot.diameter_km, 3.0);
        assert_eq!(snapshot.body.unwrap().diameter_km, 3.0);

        send_command(&state, SimCommand::Reset).unwrap();
        assert!(poll_phase(&state, SimPhase::Idle));

        stop_simulation(&state).unwrap();
        assert!(!state.is_running().unwrap());
        assert!(matches!(
            send_command(&state, SimCommand::Launch),
            Err(AppError::NotStarted)
        ));
    }

    #[test]
    fn test_no_snapshot_published_after_stop() {
        let state = AppState::new();
        start_simulation(&state, FrameLoopConfig::default()).unwrap();
        send_command(&state, SimCommand::Launch).unwrap();
        assert!(poll_phase(&state, SimPhase::Flying));

        stop_simulation(&state).unwrap();
        let last = get_snapshot(&state).unwrap().unwrap();
        std::thread::sleep(Duration::from_millis(100));
        let after = get_snapshot(&state).unwrap().unwrap();

        assert_eq!(after.time.frame, last.time.frame);
        assert_eq!(after.time.elapsed, last.time.elapsed);
    }

    #[test]
    fn test_restart_after_stop() {
        let state = AppState::new();
        start_simulation(&state, FrameLoopConfig::default()).unwrap();
        stop_simulation(&state).unwrap();
        start_simulation(&state, FrameLoopConfig::default()).unwrap();
        stop_simulation(&state).unwrap();
    }
}
