//! Simulation engine: owns all per-simulation state.
//!
//! `SimulationEngine` owns the hecs world, the impact sequencer and the
//! camera shake, applies queued commands and runs the systems once per
//! host-driven `tick`. It never schedules itself, so tests drive it with
//! exact deltas and an injected random source.

use std::collections::VecDeque;
use std::time::Duration;

use glam::{DVec2, DVec3};
use hecs::{Entity, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use impactor_core::commands::SimCommand;
use impactor_core::components::{Asteroid, EarthSpin, FlightState};
use impactor_core::constants::*;
use impactor_core::enums::{AsteroidModel, LaunchRejection, SimPhase};
use impactor_core::events::SimEvent;
use impactor_core::state::{ImpactRecord, SimSnapshot};
use impactor_core::types::SimTime;

use crate::camera_shake::{CameraShake, ShakeStep};
use crate::flight::FlightController;
use crate::impact::ImpactSequencer;
use crate::orbit_path::OrbitPath;
use crate::systems;
use crate::systems::snapshot::SnapshotInputs;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed. Same seed and same inputs = same simulation.
    pub seed: u64,
    /// Time from launch to impact.
    pub flight_duration: Duration,
    /// Initially selected diameter (km).
    pub diameter_km: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            flight_duration: FLIGHT_DURATION,
            diameter_km: DEFAULT_DIAMETER_KM,
        }
    }
}

/// Why the engine refused a launch or a diameter change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LaunchError {
    #[error("a body is already in flight")]
    BodyInFlight,
    #[error("the previous impact must be reset before launching again")]
    AwaitingReset,
}

impl From<LaunchError> for LaunchRejection {
    fn from(err: LaunchError) -> Self {
        match err {
            LaunchError::BodyInFlight => LaunchRejection::BodyInFlight,
            LaunchError::AwaitingReset => LaunchRejection::AwaitingReset,
        }
    }
}

/// What was launched.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchReceipt {
    pub name: String,
    pub model: AsteroidModel,
    pub diameter_km: f64,
    pub entry_point: DVec3,
}

/// The simulation engine. One active body at a time.
pub struct SimulationEngine<R = ChaCha8Rng> {
    world: World,
    time: SimTime,
    phase: SimPhase,
    diameter_km: f64,
    rng: R,
    command_queue: VecDeque<SimCommand>,
    events: Vec<SimEvent>,

    // --- Scene ---
    earth: Entity,
    body: Option<Entity>,
    explosion: Option<Entity>,
    starfield: Vec<DVec3>,

    // --- Flight and impact ---
    flight: FlightController,
    sequencer: ImpactSequencer,
    camera_shake: CameraShake,
    camera_offset: DVec2,
}

impl SimulationEngine {
    /// Create an engine with a `ChaCha8Rng` seeded from the config.
    pub fn new(config: SimConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> SimulationEngine<R> {
    /// Create an engine drawing all randomness from `rng`.
    pub fn with_rng(config: SimConfig, mut rng: R) -> Self {
        let mut world = World::new();
        let earth = world_setup::spawn_earth(&mut world);
        let starfield = world_setup::generate_starfield(&mut rng, STAR_COUNT);

        Self {
            world,
            time: SimTime::default(),
            phase: SimPhase::Idle,
            diameter_km: snap_diameter(config.diameter_km),
            rng,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            earth,
            body: None,
            explosion: None,
            starfield,
            flight: FlightController::new(config.flight_duration),
            sequencer: ImpactSequencer::new(),
            camera_shake: CameraShake::default(),
            camera_offset: DVec2::ZERO,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by `delta_secs` of wall-clock time and return the resulting
    /// snapshot. Negative or non-finite deltas count as zero.
    pub fn tick(&mut self, delta_secs: f64) -> SimSnapshot {
        let delta = frame_delta(delta_secs);

        self.process_commands();
        self.time.advance(delta);
        self.run_systems(delta);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotInputs {
                time: self.time,
                phase: self.phase,
                diameter_km: self.diameter_km,
                body: self.body,
                explosion: self.explosion,
                earth: self.earth,
                impact: self.sequencer.record(),
                camera_position: CAMERA_HOME + self.camera_offset.extend(0.0),
                shaking: self.camera_shake.is_active(),
            },
            events,
        )
    }

    /// Launch a randomly chosen asteroid with the selected diameter.
    pub fn launch(&mut self) -> Result<LaunchReceipt, LaunchError> {
        self.ensure_idle()?;

        let model = world_setup::pick_model(&mut self.rng);
        let path = OrbitPath::build(&mut self.rng);
        let entry_point = path.start();
        let asteroid = Asteroid {
            name: model.display_name(),
            model,
            diameter_km: self.diameter_km,
        };
        let receipt = LaunchReceipt {
            name: asteroid.name.clone(),
            model,
            diameter_km: asteroid.diameter_km,
            entry_point,
        };

        log::info!(
            "launching {} ({} km) from {:?}",
            receipt.name,
            receipt.diameter_km,
            entry_point
        );
        log::debug!("control point {:?}, path length {:.2}", path.control(), path.length());

        self.body = Some(world_setup::spawn_body(&mut self.world, asteroid, path));
        self.sequencer.reset();
        self.phase = SimPhase::Flying;
        self.events.push(SimEvent::Launched {
            name: receipt.name.clone(),
            model,
            diameter_km: receipt.diameter_km,
        });

        Ok(receipt)
    }

    /// Clear the body, impact record, explosion and camera shake together
    /// and return to idle.
    pub fn reset(&mut self) {
        for entity in [self.body.take(), self.explosion.take()].into_iter().flatten() {
            let _ = self.world.despawn(entity);
        }
        self.sequencer.reset();
        self.camera_shake.deactivate();
        self.camera_offset = DVec2::ZERO;
        self.phase = SimPhase::Idle;
        self.events.push(SimEvent::Reset);
        log::info!("simulation reset");
    }

    /// Select the diameter for the next launch, snapped to the slider grid.
    /// Returns the value actually stored.
    pub fn set_diameter(&mut self, km: f64) -> Result<f64, LaunchError> {
        self.ensure_idle()?;
        self.diameter_km = snap_diameter(km);
        Ok(self.diameter_km)
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn diameter_km(&self) -> f64 {
        self.diameter_km
    }

    pub fn impact_record(&self) -> Option<&ImpactRecord> {
        self.sequencer.record()
    }

    pub fn camera_shake(&self) -> &CameraShake {
        &self.camera_shake
    }

    /// Flight state of the active body, if any.
    pub fn flight_state(&self) -> Option<FlightState> {
        let entity = self.body?;
        self.world.get::<&FlightState>(entity).ok().map(|state| *state)
    }

    /// Background star positions, fixed for the engine's lifetime.
    pub fn starfield(&self) -> &[DVec3] {
        &self.starfield
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Detach the path from the active body (for tests).
    #[cfg(test)]
    pub fn strip_body_path(&mut self) {
        if let Some(entity) = self.body {
            let _ = self.world.remove_one::<OrbitPath>(entity);
        }
    }

    fn ensure_idle(&self) -> Result<(), LaunchError> {
        match self.phase {
            SimPhase::Idle => Ok(()),
            SimPhase::Flying => Err(LaunchError::BodyInFlight),
            SimPhase::Impacted => Err(LaunchError::AwaitingReset),
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::SetDiameter { km } => {
                if let Err(err) = self.set_diameter(km) {
                    self.reject(err);
                }
            }
            SimCommand::Launch => {
                if let Err(err) = self.launch() {
                    self.reject(err);
                }
            }
            SimCommand::Reset => self.reset(),
            SimCommand::BeginEarthDrag => {
                if let Ok(mut spin) = self.world.get::<&mut EarthSpin>(self.earth) {
                    spin.dragging = true;
                }
            }
            SimCommand::DragEarth { delta_x } => {
                if let Ok(mut spin) = self.world.get::<&mut EarthSpin>(self.earth) {
                    if spin.dragging {
                        spin.angle += delta_x * EARTH_DRAG_SENSITIVITY;
                    }
                }
            }
            SimCommand::EndEarthDrag => {
                if let Ok(mut spin) = self.world.get::<&mut EarthSpin>(self.earth) {
                    spin.dragging = false;
                }
            }
        }
    }

    fn reject(&mut self, err: LaunchError) {
        log::warn!("command rejected: {err}");
        self.events.push(SimEvent::LaunchRejected { reason: err.into() });
    }

    /// Run all systems in order.
    fn run_systems(&mut self, delta: Duration) {
        // 1. Flight
        let arrival = systems::flight::run(&mut self.world, self.body, &self.flight, delta);

        // 2. Explosion aging (before a new one can spawn at age zero)
        systems::explosion::run(&mut self.world, delta, &mut self.events);

        // 3. Impact sequencing (sees this frame's arrival)
        let mut impacted_now = false;
        if let (Some(position), Some(body)) = (arrival, self.body) {
            if let Some(explosion) = systems::impact::run(
                &mut self.world,
                body,
                position,
                self.time.elapsed,
                &mut self.sequencer,
                &mut self.camera_shake,
                &mut self.rng,
                &mut self.events,
            ) {
                self.explosion = Some(explosion);
                self.phase = SimPhase::Impacted;
                impacted_now = true;
            }
        }

        // 4. Earth spin
        systems::earth::run(&mut self.world);

        // 5. Camera shake, layered over the base camera position. The
        // shake timer starts counting on the frame after the impact.
        let shake_delta = if impacted_now { Duration::ZERO } else { delta };
        self.camera_offset = match self.camera_shake.tick(shake_delta, &mut self.rng) {
            ShakeStep::Jitter(offset) => offset,
            ShakeStep::Expired => {
                self.events.push(SimEvent::CameraShakeEnded);
                DVec2::ZERO
            }
            ShakeStep::Idle => DVec2::ZERO,
        };
    }
}

/// Clamp to the selectable range and round to the nearest slider step.
pub fn snap_diameter(km: f64) -> f64 {
    if !km.is_finite() {
        return DEFAULT_DIAMETER_KM;
    }
    let snapped = (km / DIAMETER_STEP_KM).round() * DIAMETER_STEP_KM;
    snapped.clamp(DIAMETER_MIN_KM, DIAMETER_MAX_KM)
}

fn frame_delta(delta_secs: f64) -> Duration {
    match Duration::try_from_secs_f64(delta_secs) {
        Ok(delta) => delta,
        Err(_) => {
            log::warn!("ignoring invalid frame delta {delta_secs}");
            Duration::ZERO
        }
    }
}
