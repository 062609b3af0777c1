//! Generator configuration
//!
//! Every field has a default, so a config file only needs the values it
//! overrides:
//!
//! ```json
//! { "planetCount": { "min": 5, "max": 5 }, "habitableZoneRepair": "reclassify" }
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::SystemError;

/// Inclusive planet count range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetCountRange {
    pub min: u32,
    pub max: u32,
}

impl Default for PlanetCountRange {
    fn default() -> Self {
        Self { min: 3, max: 10 }
    }
}

/// What happens to the planet moved into the habitable zone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HabitableZoneRepair {
    /// Move the planet and relabel it Terrestrial; size, atmosphere, moons
    /// and geology keep the values drawn for its old orbit.
    #[default]
    KeepStale,
    /// Regenerate the moved planet as a Terrestrial world at its new orbit
    Reclassify,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub planet_count: PlanetCountRange,
    /// Innermost orbit (AU)
    pub min_orbit_au: f64,
    /// Orbit spacing upper bound (AU, never reached)
    pub max_orbit_au: f64,
    pub habitable_zone_repair: HabitableZoneRepair,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            planet_count: PlanetCountRange::default(),
            min_orbit_au: 0.2,
            max_orbit_au: 50.0,
            habitable_zone_repair: HabitableZoneRepair::default(),
        }
    }
}

impl GeneratorConfig {
    /// Fixed planet count, otherwise defaults
    pub fn with_planet_count(count: u32) -> Self {
        Self {
            planet_count: PlanetCountRange {
                min: count,
                max: count,
            },
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SystemError> {
        let PlanetCountRange { min, max } = self.planet_count;
        if min < 1 {
            return Err(SystemError::InvalidConfig(
                "planetCount.min must be at least 1".to_string(),
            ));
        }
        if min > max {
            return Err(SystemError::InvalidConfig(format!(
                "planetCount.min ({min}) exceeds planetCount.max ({max})"
            )));
        }
        if !self.min_orbit_au.is_finite() || !self.max_orbit_au.is_finite() {
            return Err(SystemError::InvalidConfig(
                "orbit bounds must be finite".to_string(),
            ));
        }
        if self.min_orbit_au <= 0.0 || self.min_orbit_au >= self.max_orbit_au {
            return Err(SystemError::InvalidConfig(format!(
                "orbit bounds must satisfy 0 < minOrbitAu < maxOrbitAu (got {} and {})",
                self.min_orbit_au, self.max_orbit_au
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, SystemError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SystemError> {
        let path = path.as_ref();
        debug!("loading generator config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
