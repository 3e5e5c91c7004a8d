//! Models of the NeoWs feed response.
//!
//! The feed encodes most measured quantities (velocities, distances,
//! orbital elements) as strings; helpers parse them on demand.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level feed response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NeoFeed {
    #[serde(default)]
    pub element_count: u32,
    /// Objects keyed by close-approach date (`YYYY-MM-DD`).
    #[serde(default)]
    pub near_earth_objects: BTreeMap<String, Vec<NearEarthObject>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearEarthObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nasa_jpl_url: String,
    #[serde(default)]
    pub absolute_magnitude_h: f64,
    pub estimated_diameter: EstimatedDiameter,
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
    /// Present when the feed is requested with `detailed=true`.
    #[serde(default)]
    pub orbital_data: Option<OrbitalData>,
    #[serde(default)]
    pub is_sentry_object: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatedDiameter {
    pub kilometers: DiameterRange,
    #[serde(default)]
    pub meters: Option<DiameterRange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloseApproach {
    pub close_approach_date: String,
    #[serde(default)]
    pub close_approach_date_full: Option<String>,
    #[serde(default)]
    pub epoch_date_close_approach: i64,
    pub relative_velocity: RelativeVelocity,
    pub miss_distance: MissDistance,
    #[serde(default)]
    pub orbiting_body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_second: String,
    pub kilometers_per_hour: String,
    #[serde(default)]
    pub miles_per_hour: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissDistance {
    pub astronomical: String,
    pub lunar: String,
    pub kilometers: String,
    #[serde(default)]
    pub miles: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrbitalData {
    #[serde(default)]
    pub orbit_id: Option<String>,
    #[serde(default)]
    pub first_observation_date: Option<String>,
    #[serde(default)]
    pub last_observation_date: Option<String>,
    /// Days, string-encoded.
    #[serde(default)]
    pub orbital_period: Option<String>,
    #[serde(default)]
    pub orbit_class: Option<OrbitClass>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrbitClass {
    pub orbit_class_type: String,
    #[serde(default)]
    pub orbit_class_description: String,
    #[serde(default)]
    pub orbit_class_range: String,
}

impl NearEarthObject {
    /// Midpoint of the estimated diameter range (km).
    pub fn mean_diameter_km(&self) -> f64 {
        let range = self.estimated_diameter.kilometers;
        (range.estimated_diameter_min + range.estimated_diameter_max) / 2.0
    }

    /// The first listed close approach, which the feed orders by date.
    pub fn first_approach(&self) -> Option<&CloseApproach> {
        self.close_approach_data.first()
    }

    /// Orbital period in days, if reported.
    pub fn orbital_period_days(&self) -> Option<f64> {
        self.orbital_data
            .as_ref()?
            .orbital_period
            .as_deref()
            .and_then(parse_quantity)
    }
}

impl CloseApproach {
    pub fn velocity_km_s(&self) -> Option<f64> {
        parse_quantity(&self.relative_velocity.kilometers_per_second)
    }

    pub fn velocity_km_h(&self) -> Option<f64> {
        parse_quantity(&self.relative_velocity.kilometers_per_hour)
    }

    pub fn miss_distance_km(&self) -> Option<f64> {
        parse_quantity(&self.miss_distance.kilometers)
    }

    pub fn miss_distance_lunar(&self) -> Option<f64> {
        parse_quantity(&self.miss_distance.lunar)
    }

    pub fn miss_distance_au(&self) -> Option<f64> {
        parse_quantity(&self.miss_distance.astronomical)
    }
}

fn parse_quantity(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}
