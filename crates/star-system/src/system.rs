//! Generated solar systems

use serde::{Deserialize, Serialize};

use planetary::{Planet, PlanetType};
use stellar::{HabitableZone, Star};

use crate::metadata::SystemMetadata;
use crate::naming::format_planet_name;

/// A star and its planets, innermost first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarSystem {
    pub metadata: SystemMetadata,
    pub star: Star,
    pub planets: Vec<Planet>,
}

impl SolarSystem {
    /// Create a system, sorting planets by orbit radius
    pub fn new(metadata: SystemMetadata, star: Star, mut planets: Vec<Planet>) -> Self {
        planets.sort_by(|a, b| a.orbit_radius.total_cmp(&b.orbit_radius));
        Self {
            metadata,
            star,
            planets,
        }
    }

    pub fn habitable_zone(&self) -> &HabitableZone {
        &self.star.habitable_zone
    }

    pub fn habitable_zone_planets(&self) -> Vec<&Planet> {
        self.planets
            .iter()
            .filter(|planet| planet.in_habitable_zone(&self.star.habitable_zone))
            .collect()
    }

    pub fn has_habitable_zone_planet(&self) -> bool {
        self.planets
            .iter()
            .any(|planet| planet.in_habitable_zone(&self.star.habitable_zone))
    }

    pub fn planets_of_type(&self, planet_type: PlanetType) -> Vec<&Planet> {
        self.planets
            .iter()
            .filter(|planet| planet.planet_type == planet_type)
            .collect()
    }

    pub fn total_moons(&self) -> u32 {
        self.planets.iter().map(|planet| planet.moons).sum()
    }

    /// Returns whether planets are in non-decreasing orbit order
    pub fn is_sorted(&self) -> bool {
        self.planets
            .windows(2)
            .all(|pair| pair[0].orbit_radius <= pair[1].orbit_radius)
    }

    /// Designation of the planet at `index`
    ///
    /// Planet numbers in names are 1-based, so the innermost planet of
    /// system 17 is "P-17-1-...".
    pub fn planet_name(&self, index: usize) -> Option<String> {
        let planet = self.planets.get(index)?;
        Some(format_planet_name(
            self.metadata.system_number(),
            index + 1,
            planet.atmosphere.key(),
            planet.geology.tectonics.label(),
            planet.moons,
        ))
    }

    pub fn planet_names(&self) -> Vec<String> {
        (0..self.planets.len())
            .filter_map(|index| self.planet_name(index))
            .collect()
    }
}
