//! Impact sequencing: the `Flying → Impacted` transition and the derived
//! impact metrics and explosion curves.

use std::time::Duration;

use glam::DVec3;
use rand::Rng;

use impactor_core::components::Asteroid;
use impactor_core::constants::*;
use impactor_core::state::ImpactRecord;

/// Sequencer state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SequencerPhase {
    #[default]
    Flying,
    Impacted,
}

/// Fires at most one impact per flight and keeps its record.
#[derive(Debug, Clone, Default)]
pub struct ImpactSequencer {
    phase: SequencerPhase,
    record: Option<ImpactRecord>,
}

impl ImpactSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SequencerPhase {
        self.phase
    }

    pub fn record(&self) -> Option<&ImpactRecord> {
        self.record.as_ref()
    }

    /// Handle the flight's arrival signal.
    ///
    /// The first call after construction or reset records the impact and
    /// returns it; the caller then triggers the explosion, sound and camera
    /// shake. Any later call returns `None` and changes nothing.
    pub fn on_arrival<R: Rng + ?Sized>(
        &mut self,
        asteroid: &Asteroid,
        position: DVec3,
        at: Duration,
        rng: &mut R,
    ) -> Option<&ImpactRecord> {
        if self.phase == SequencerPhase::Impacted {
            return None;
        }

        let latitude = rng.gen::<f64>() * 180.0 - 90.0;
        let longitude = rng.gen::<f64>() * 360.0 - 180.0;

        self.phase = SequencerPhase::Impacted;
        self.record = Some(ImpactRecord {
            name: asteroid.name.clone(),
            position,
            latitude,
            longitude,
            diameter_km: asteroid.diameter_km,
            energy_tj: impact_energy(asteroid.diameter_km),
            radius_km2: impact_radius(asteroid.diameter_km),
            at_secs: at.as_secs_f64(),
        });
        self.record.as_ref()
    }

    /// Back to `Flying` with no record.
    pub fn reset(&mut self) {
        self.phase = SequencerPhase::Flying;
        self.record = None;
    }
}

/// Released energy (TJ) for a body of `diameter_km`.
pub fn impact_energy(diameter_km: f64) -> f64 {
    diameter_km * ENERGY_COEFFICIENT
}

/// Affected area (km²) for a body of `diameter_km`.
pub fn impact_radius(diameter_km: f64) -> f64 {
    diameter_km * RADIUS_COEFFICIENT
}

/// Explosion scale `age` after impact.
pub fn explosion_scale(age: Duration) -> f64 {
    1.0 + age.as_secs_f64() * EXPLOSION_GROWTH_RATE
}

/// Explosion opacity `age` after impact. Reaches 0 and stays there.
pub fn explosion_opacity(age: Duration) -> f64 {
    (1.0 - age.as_secs_f64() * EXPLOSION_DECAY_RATE).max(0.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use impactor_core::enums::AsteroidModel;

    fn asteroid(diameter_km: f64) -> Asteroid {
        Asteroid {
            name: AsteroidModel::A4.display_name(),
            model: AsteroidModel::A4,
            diameter_km,
        }
    }

    #[test]
    fn test_energy_and_radius_are_linear() {
        assert_eq!(impact_energy(2.0), 10_000.0);
        assert_eq!(impact_energy(4.0), 20_000.0);
        assert_eq!(impact_radius(2.0), 20.0);
        assert_eq!(impact_radius(4.0), 40.0);
        for d in [0.5, 1.0, 3.5, 10.0] {
            assert_relative_eq!(impact_energy(2.0 * d), 2.0 * impact_energy(d));
            assert_relative_eq!(impact_radius(2.0 * d), 2.0 * impact_radius(d));
        }
    }

    #[test]
    fn test_first_arrival_records_impact() {
        let mut sequencer = ImpactSequencer::new();
        let mut rng = StepRng::new(0, 0);
        let record = sequencer
            .on_arrival(&asteroid(2.0), IMPACT_TARGET, Duration::from_secs(4), &mut rng)
            .cloned()
            .expect("first arrival records");

        assert_eq!(record.name, "Asteroid A4");
        assert_eq!(record.position, IMPACT_TARGET);
        assert_eq!(record.latitude, -90.0);
        assert_eq!(record.longitude, -180.0);
        assert_eq!(record.diameter_km, 2.0);
        assert_eq!(record.energy_tj, 10_000.0);
        assert_eq!(record.radius_km2, 20.0);
        assert_eq!(record.at_secs, 4.0);
        assert_eq!(sequencer.phase(), SequencerPhase::Impacted);
    }

    #[test]
    fn test_second_arrival_is_ignored() {
        let mut sequencer = ImpactSequencer::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let first = sequencer
            .on_arrival(&asteroid(1.0), IMPACT_TARGET, Duration::from_secs(4), &mut rng)
            .cloned()
            .unwrap();

        let again = sequencer.on_arrival(
            &asteroid(9.0),
            DVec3::ZERO,
            Duration::from_secs(8),
            &mut rng,
        );
        assert!(again.is_none());
        assert_eq!(sequencer.record(), Some(&first));
    }

    #[test]
    fn test_coordinates_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            let mut sequencer = ImpactSequencer::new();
            let record = sequencer
                .on_arrival(&asteroid(1.0), IMPACT_TARGET, Duration::ZERO, &mut rng)
                .unwrap();
            assert!((-90.0..90.0).contains(&record.latitude));
            assert!((-180.0..180.0).contains(&record.longitude));
        }
    }

    #[test]
    fn test_reset_allows_next_impact() {
        let mut sequencer = ImpactSequencer::new();
        let mut rng = StepRng::new(0, 0);
        sequencer.on_arrival(&asteroid(1.0), IMPACT_TARGET, Duration::ZERO, &mut rng);
        sequencer.reset();
        assert_eq!(sequencer.phase(), SequencerPhase::Flying);
        assert!(sequencer.record().is_none());
        assert!(sequencer
            .on_arrival(&asteroid(1.5), IMPACT_TARGET, Duration::ZERO, &mut rng)
            .is_some());
    }

    #[test]
    fn test_explosion_curves() {
        assert_eq!(explosion_scale(Duration::ZERO), 1.0);
        assert_eq!(explosion_opacity(Duration::ZERO), 1.0);

        let half = Duration::from_millis(500);
        assert_relative_eq!(explosion_scale(half), 3.5);
        assert_relative_eq!(explosion_opacity(half), 0.25);

        // Fully faded after 2/3 s, never negative.
        assert_eq!(explosion_opacity(Duration::from_secs(1)), 0.0);
        assert_eq!(explosion_opacity(Duration::from_secs(30)), 0.0);
        assert_relative_eq!(explosion_scale(Duration::from_secs(2)), 11.0);
    }
}
