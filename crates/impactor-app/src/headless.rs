//! Fixed-step runner: one launch, simulated until the explosion fades.

use serde::Serialize;

use impactor_core::events::SimEvent;
use impactor_core::state::ImpactRecord;
use impactor_sim::{SimConfig, SimulationEngine};

use crate::config::MAX_FRAME_RATE;
use crate::error::AppError;

/// Simulated time after which a run without an impact is abandoned.
const MAX_SIMULATED_SECS: f64 = 120.0;

/// Frame budget matching `MAX_SIMULATED_SECS` at the highest frame rate.
const MAX_FRAMES: u64 = 120 * MAX_FRAME_RATE as u64;

/// Outcome of a headless run.
#[derive(Debug, Clone, Serialize)]
pub struct HeadlessRun {
    pub record: ImpactRecord,
    pub frames: u64,
    pub events: Vec<SimEvent>,
}

/// Launch once with `config` and tick at `fps` until the explosion has
/// faded. Every event is logged and collected. `fps` is clamped to
/// 1..=`MAX_FRAME_RATE`.
pub fn run(config: SimConfig, fps: u32) -> Result<HeadlessRun, AppError> {
    let delta = 1.0 / f64::from(fps.clamp(1, MAX_FRAME_RATE));
    let mut engine = SimulationEngine::new(config);
    let mut events = Vec::new();

    engine.launch()?;

    loop {
        let snapshot = engine.tick(delta);
        let faded = snapshot.events.contains(&SimEvent::ExplosionFaded);
        for event in snapshot.events {
            log::info!("t={:.3}s {:?}", snapshot.time.elapsed_secs(), event);
            events.push(event);
        }

        if faded {
            let record = engine
                .impact_record()
                .cloned()
                .ok_or(AppError::NoImpact(snapshot.time.elapsed_secs()))?;
            return Ok(HeadlessRun {
                record,
                frames: snapshot.time.frame,
                events,
            });
        }
        if snapshot.time.frame >= MAX_FRAMES
            || snapshot.time.elapsed_secs() > MAX_SIMULATED_SECS
        {
            return Err(AppError::NoImpact(MAX_SIMULATED_SECS));
        }
    }
}
