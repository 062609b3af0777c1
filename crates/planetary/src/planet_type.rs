//! Planet categories and orbital classification
//!
//! A planet's type depends on its orbit radius alone. The six types
//! partition [0, ∞) into half-open bands with no gaps or overlaps:
//!
//! | band (AU)   | type         |
//! |-------------|--------------|
//! | [0, 0.5)    | Lava Planet  |
//! | [0.5, 1.5)  | Terrestrial  |
//! | [1.5, 5)    | Ocean World  |
//! | [5, 10)     | Gas Giant    |
//! | [10, 30)    | Ice Giant    |
//! | [30, ∞)     | Dwarf Planet |

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use stellar::sampling::{sample_count, sample_uniform};

use crate::error::PlanetaryError;

/// Upper edges of the orbital bands (AU, exclusive)
pub mod orbit {
    pub const LAVA_LIMIT: f64 = 0.5;
    pub const TERRESTRIAL_LIMIT: f64 = 1.5;
    pub const OCEAN_WORLD_LIMIT: f64 = 5.0;
    pub const GAS_GIANT_LIMIT: f64 = 10.0;
    pub const ICE_GIANT_LIMIT: f64 = 30.0;
}

/// Planet category, ordered by orbital band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanetType {
    LavaPlanet,
    Terrestrial,
    OceanWorld,
    GasGiant,
    IceGiant,
    DwarfPlanet,
}

impl PlanetType {
    /// All types, innermost band first
    pub const ALL: [PlanetType; 6] = [
        PlanetType::LavaPlanet,
        PlanetType::Terrestrial,
        PlanetType::OceanWorld,
        PlanetType::GasGiant,
        PlanetType::IceGiant,
        PlanetType::DwarfPlanet,
    ];

    /// Classify a planet by orbit radius (AU)
    ///
    /// Total over [0, ∞). Radii that are not comparable (NaN) fall through to
    /// the outermost band; use [`PlanetType::try_from_orbit_radius`] when the
    /// radius comes from outside the generator.
    ///
    /// # Example
    /// ```
    /// use planetary::PlanetType;
    ///
    /// assert_eq!(PlanetType::from_orbit_radius(1.0), PlanetType::Terrestrial);
    /// assert_eq!(PlanetType::from_orbit_radius(5.0), PlanetType::GasGiant);
    /// ```
    pub fn from_orbit_radius(orbit_radius: f64) -> Self {
        match orbit_radius {
            r if r < orbit::LAVA_LIMIT => Self::LavaPlanet,
            r if r < orbit::TERRESTRIAL_LIMIT => Self::Terrestrial,
            r if r < orbit::OCEAN_WORLD_LIMIT => Self::OceanWorld,
            r if r < orbit::GAS_GIANT_LIMIT => Self::GasGiant,
            r if r < orbit::ICE_GIANT_LIMIT => Self::IceGiant,
            _ => Self::DwarfPlanet,
        }
    }

    /// Classify a radius, rejecting negative or non-finite values
    pub fn try_from_orbit_radius(orbit_radius: f64) -> Result<Self, PlanetaryError> {
        if !orbit_radius.is_finite() || orbit_radius < 0.0 {
            return Err(PlanetaryError::InvalidOrbitRadius(orbit_radius));
        }
        Ok(Self::from_orbit_radius(orbit_radius))
    }

    /// Orbital band `[lower, upper)` in AU that maps to this type
    pub fn orbit_band(&self) -> (f64, f64) {
        match self {
            Self::LavaPlanet => (0.0, orbit::LAVA_LIMIT),
            Self::Terrestrial => (orbit::LAVA_LIMIT, orbit::TERRESTRIAL_LIMIT),
            Self::OceanWorld => (orbit::TERRESTRIAL_LIMIT, orbit::OCEAN_WORLD_LIMIT),
            Self::GasGiant => (orbit::OCEAN_WORLD_LIMIT, orbit::GAS_GIANT_LIMIT),
            Self::IceGiant => (orbit::GAS_GIANT_LIMIT, orbit::ICE_GIANT_LIMIT),
            Self::DwarfPlanet => (orbit::ICE_GIANT_LIMIT, f64::INFINITY),
        }
    }

    /// Size range in Earth radii
    pub fn size_range(&self) -> (f64, f64) {
        match self {
            Self::LavaPlanet => (0.3, 1.2),
            Self::Terrestrial => (0.5, 1.5),
            Self::OceanWorld => (0.8, 2.5),
            Self::GasGiant => (6.0, 15.0),
            Self::IceGiant => (3.0, 6.0),
            Self::DwarfPlanet => (0.05, 0.3),
        }
    }

    /// Inclusive moon count range
    pub fn moon_range(&self) -> (u32, u32) {
        match self {
            Self::LavaPlanet => (0, 0),
            Self::Terrestrial => (0, 3),
            Self::OceanWorld => (0, 5),
            Self::GasGiant => (1, 80),
            Self::IceGiant => (1, 30),
            Self::DwarfPlanet => (0, 5),
        }
    }

    pub fn sample_size(&self, rng: &mut impl Rng) -> f64 {
        sample_uniform(rng, self.size_range())
    }

    pub fn sample_moons(&self, rng: &mut impl Rng) -> u32 {
        sample_count(rng, self.moon_range())
    }

    /// Returns whether this type has no solid surface
    pub fn is_giant(&self) -> bool {
        matches!(self, Self::GasGiant | Self::IceGiant)
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::LavaPlanet => "Lava Planet",
            Self::Terrestrial => "Terrestrial",
            Self::OceanWorld => "Ocean World",
            Self::GasGiant => "Gas Giant",
            Self::IceGiant => "Ice Giant",
            Self::DwarfPlanet => "Dwarf Planet",
        }
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PlanetType {
    type Err = PlanetaryError;

    /// Accepts the display name or any spacing/casing of it
    /// ("Gas Giant", "gas-giant", "gas_giant", "GasGiant").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "lavaplanet" => Ok(Self::LavaPlanet),
            "terrestrial" => Ok(Self::Terrestrial),
            "oceanworld" => Ok(Self::OceanWorld),
            "gasgiant" => Ok(Self::GasGiant),
            "icegiant" => Ok(Self::IceGiant),
            "dwarfplanet" => Ok(Self::DwarfPlanet),
            _ => Err(PlanetaryError::UnknownPlanetType(s.to_string())),
        }
    }
}
