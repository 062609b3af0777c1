//! Atmosphere selection and gas composition tables
//!
//! A planet's type (and, for terrestrial planets, whether it orbits inside
//! the habitable zone) selects a union of atmosphere categories. One
//! sub-type is drawn uniformly from that union, and each sub-type maps to a
//! fixed gas-percentage preset.
//!
//! Presets are static display data: percentages are not normalized and need
//! not sum to 100.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use stellar::HabitableZone;

use crate::error::PlanetaryError;
use crate::planet_type::PlanetType;

/// Broad atmosphere family grouping related sub-types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AtmosphereCategory {
    /// Exosphere only (Mercury-like)
    Trace,
    /// CO₂ dominated (Mars/Venus-like)
    CarbonDioxide,
    /// Primordial H₂/He envelope
    HydrogenHelium,
    /// H₂/He with methane ices (Uranus/Neptune-like)
    Ice,
    /// N₂ dominated (Earth/Titan-like)
    Nitrogen,
    /// Reduced carbon chemistry (CO/CH₄)
    Carbon,
    /// NH₃ dominated
    Ammonia,
}

impl AtmosphereCategory {
    pub const ALL: [AtmosphereCategory; 7] = [
        AtmosphereCategory::Trace,
        AtmosphereCategory::CarbonDioxide,
        AtmosphereCategory::HydrogenHelium,
        AtmosphereCategory::Ice,
        AtmosphereCategory::Nitrogen,
        AtmosphereCategory::Carbon,
        AtmosphereCategory::Ammonia,
    ];

    /// Sub-types belonging to this category
    pub fn subtypes(&self) -> &'static [AtmosphereSubtype] {
        use AtmosphereSubtype::*;
        match self {
            Self::Trace => &[Trace],
            Self::CarbonDioxide => &[CarbonDioxideI, CarbonDioxideII],
            Self::HydrogenHelium => &[HydrogenHeliumI, HydrogenHeliumII, HydrogenHeliumIII],
            Self::Ice => &[IceI, IceII],
            Self::Nitrogen => &[NitrogenI, NitrogenII, NitrogenIII],
            Self::Carbon => &[CarbonI],
            Self::Ammonia => &[AmmoniaI],
        }
    }

    /// Categories a planet of the given type can draw from
    ///
    /// Terrestrial planets split on habitable-zone membership: in-zone
    /// planets may also get nitrogen atmospheres, out-of-zone planets only
    /// CO₂. Other types ignore the zone.
    pub fn candidates_for(planet_type: PlanetType, in_habitable_zone: bool) -> &'static [Self] {
        match (planet_type, in_habitable_zone) {
            (PlanetType::LavaPlanet, _) => &[Self::CarbonDioxide, Self::Carbon],
            (PlanetType::Terrestrial, true) => &[Self::CarbonDioxide, Self::Nitrogen],
            (PlanetType::Terrestrial, false) => &[Self::CarbonDioxide],
            (PlanetType::OceanWorld, _) => &[Self::Nitrogen, Self::CarbonDioxide],
            (PlanetType::GasGiant, _) => &[Self::HydrogenHelium],
            (PlanetType::IceGiant, _) => &[Self::Ice, Self::Ammonia],
            (PlanetType::DwarfPlanet, _) => &[Self::Trace, Self::Ice],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Trace => "Trace",
            Self::CarbonDioxide => "Carbon Dioxide",
            Self::HydrogenHelium => "Hydrogen-Helium",
            Self::Ice => "Ice",
            Self::Nitrogen => "Nitrogen",
            Self::Carbon => "Carbon",
            Self::Ammonia => "Ammonia",
        }
    }
}

impl fmt::Display for AtmosphereCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Atmosphere preset, serialized by its short key (e.g. `"CO2-I"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AtmosphereSubtype {
    #[serde(rename = "trace")]
    Trace,
    #[serde(rename = "CO2-I")]
    CarbonDioxideI,
    #[serde(rename = "CO2-II")]
    CarbonDioxideII,
    #[serde(rename = "H2-He-I")]
    HydrogenHeliumI,
    #[serde(rename = "H2-He-II")]
    HydrogenHeliumII,
    #[serde(rename = "H2-He-III")]
    HydrogenHeliumIII,
    #[serde(rename = "ice-I")]
    IceI,
    #[serde(rename = "ice-II")]
    IceII,
    #[serde(rename = "nitrogen-I")]
    NitrogenI,
    #[serde(rename = "nitrogen-II")]
    NitrogenII,
    #[serde(rename = "nitrogen-III")]
    NitrogenIII,
    #[serde(rename = "carbon-I")]
    CarbonI,
    #[serde(rename = "ammonia-I")]
    AmmoniaI,
}

impl AtmosphereSubtype {
    pub const ALL: [AtmosphereSubtype; 13] = [
        AtmosphereSubtype::Trace,
        AtmosphereSubtype::CarbonDioxideI,
        AtmosphereSubtype::CarbonDioxideII,
        AtmosphereSubtype::HydrogenHeliumI,
        AtmosphereSubtype::HydrogenHeliumII,
        AtmosphereSubtype::HydrogenHeliumIII,
        AtmosphereSubtype::IceI,
        AtmosphereSubtype::IceII,
        AtmosphereSubtype::NitrogenI,
        AtmosphereSubtype::NitrogenII,
        AtmosphereSubtype::NitrogenIII,
        AtmosphereSubtype::CarbonI,
        AtmosphereSubtype::AmmoniaI,
    ];

    /// Short key used in tables, names and JSON
    pub fn key(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::CarbonDioxideI => "CO2-I",
            Self::CarbonDioxideII => "CO2-II",
            Self::HydrogenHeliumI => "H2-He-I",
            Self::HydrogenHeliumII => "H2-He-II",
            Self::HydrogenHeliumIII => "H2-He-III",
            Self::IceI => "ice-I",
            Self::IceII => "ice-II",
            Self::NitrogenI => "nitrogen-I",
            Self::NitrogenII => "nitrogen-II",
            Self::NitrogenIII => "nitrogen-III",
            Self::CarbonI => "carbon-I",
            Self::AmmoniaI => "ammonia-I",
        }
    }

    /// Exact lookup by table key; case and whitespace must match
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|subtype| subtype.key() == key)
    }

    pub fn category(&self) -> AtmosphereCategory {
        match self {
            Self::Trace => AtmosphereCategory::Trace,
            Self::CarbonDioxideI | Self::CarbonDioxideII => AtmosphereCategory::CarbonDioxide,
            Self::HydrogenHeliumI | Self::HydrogenHeliumII | Self::HydrogenHeliumIII => {
                AtmosphereCategory::HydrogenHelium
            }
            Self::IceI | Self::IceII => AtmosphereCategory::Ice,
            Self::NitrogenI | Self::NitrogenII | Self::NitrogenIII => AtmosphereCategory::Nitrogen,
            Self::CarbonI => AtmosphereCategory::Carbon,
            Self::AmmoniaI => AtmosphereCategory::Ammonia,
        }
    }

    /// Fixed gas-percentage preset for this sub-type
    pub fn base_composition(&self) -> AtmosphereComposition {
        let table: &[(&str, f64)] = match self {
            // Mercury-like exosphere
            Self::Trace => &[
                ("He", 42.0),
                ("Na", 29.0),
                ("H2", 22.0),
                ("O2", 6.0),
                ("K", 0.5),
            ],
            // Mars-like
            Self::CarbonDioxideI => &[
                ("CO2", 95.3),
                ("N2", 2.7),
                ("Ar", 1.6),
                ("O2", 0.13),
                ("CO", 0.08),
            ],
            // Venus-like
            Self::CarbonDioxideII => &[("CO2", 96.5), ("N2", 3.5), ("SO2", 0.015)],
            // Jupiter-like
            Self::HydrogenHeliumI => &[
                ("H2", 89.8),
                ("He", 10.2),
                ("CH4", 0.3),
                ("NH3", 0.026),
            ],
            // Saturn-like
            Self::HydrogenHeliumII => &[
                ("H2", 96.3),
                ("He", 3.25),
                ("CH4", 0.45),
                ("NH3", 0.0125),
            ],
            // Hot, water-bearing envelope
            Self::HydrogenHeliumIII => &[
                ("H2", 84.0),
                ("He", 14.0),
                ("H2O", 1.2),
                ("CO", 0.6),
                ("Na", 0.2),
            ],
            // Uranus-like
            Self::IceI => &[("H2", 82.5), ("He", 15.2), ("CH4", 2.3)],
            // Neptune-like
            Self::IceII => &[("H2", 80.0), ("He", 19.0), ("CH4", 1.5)],
            // Earth-like
            Self::NitrogenI => &[
                ("N2", 78.08),
                ("O2", 20.95),
                ("Ar", 0.93),
                ("CO2", 0.04),
            ],
            // Titan-like
            Self::NitrogenII => &[("N2", 94.2), ("CH4", 5.65), ("H2", 0.099)],
            // Pluto-like
            Self::NitrogenIII => &[("N2", 90.0), ("CH4", 7.5), ("CO", 2.5)],
            Self::CarbonI => &[("CO", 45.0), ("CO2", 30.0), ("CH4", 15.0), ("N2", 10.0)],
            Self::AmmoniaI => &[("NH3", 60.0), ("H2", 25.0), ("He", 10.0), ("CH4", 5.0)],
        };

        AtmosphereComposition::from_pairs(table)
    }
}

impl fmt::Display for AtmosphereSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for AtmosphereSubtype {
    type Err = PlanetaryError;

    /// Lenient parse for user input: trims and ignores case.
    /// Use [`AtmosphereSubtype::from_key`] for exact table lookups.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|subtype| subtype.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| PlanetaryError::UnknownAtmosphere(s.to_string()))
    }
}

/// Gas abundances keyed by species code (e.g. `"N2"` → 78.08)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AtmosphereComposition(BTreeMap<String, f64>);

impl AtmosphereComposition {
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(species, percent)| (species.to_string(), *percent))
                .collect(),
        )
    }

    /// Percentage for a species, if present
    pub fn get(&self, species: &str) -> Option<f64> {
        self.0.get(species).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(species, percent)| (species.as_str(), *percent))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all listed percentages
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Most abundant species
    pub fn dominant(&self) -> Option<(&str, f64)> {
        self.iter()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    }
}

/// Gas table for a sub-type key
///
/// Keys must match exactly (`"CO2-I"`, not `"co2-i"`). Unknown keys yield an
/// empty composition rather than an error, so display code can look up
/// free-form keys without special casing.
///
/// # Example
/// ```
/// use planetary::base_composition;
///
/// assert_eq!(base_composition("nitrogen-I").get("N2"), Some(78.08));
/// assert!(base_composition("nonexistent").is_empty());
/// ```
pub fn base_composition(key: &str) -> AtmosphereComposition {
    AtmosphereSubtype::from_key(key)
        .map(|subtype| subtype.base_composition())
        .unwrap_or_default()
}

/// All sub-types a planet of this type and zone membership can draw from
pub fn candidate_subtypes(
    planet_type: PlanetType,
    in_habitable_zone: bool,
) -> Vec<AtmosphereSubtype> {
    AtmosphereCategory::candidates_for(planet_type, in_habitable_zone)
        .iter()
        .flat_map(|category| category.subtypes().iter().copied())
        .collect()
}

/// Pick an atmosphere sub-type for a planet
///
/// Selection is uniform over the union of the candidate categories, so a
/// category with more sub-types is proportionally more likely.
///
/// # Arguments
/// * `rng` - Random number generator
/// * `planet_type` - Type of the planet
/// * `orbit_radius` - Orbit radius in AU, checked against the zone
/// * `habitable_zone` - Host star's habitable zone
pub fn planet_atmosphere(
    rng: &mut impl Rng,
    planet_type: PlanetType,
    orbit_radius: f64,
    habitable_zone: &HabitableZone,
) -> AtmosphereSubtype {
    let candidates = candidate_subtypes(planet_type, habitable_zone.contains(orbit_radius));
    // every category lists at least one sub-type
    candidates[rng.random_range(0..candidates.len())]
}
