//! Placeholder geology
//!
//! Core, mantle, crust and tectonic activity are drawn uniformly from
//! per-type candidate lists. Nothing here is derived from mass, heat flow or
//! age; it only gives each planet plausible labels for display.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::planet_type::PlanetType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoreType {
    Iron,
    IronNickel,
    Rocky,
    Icy,
    MetallicHydrogen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MantleType {
    Silicate,
    Magma,
    Ice,
    /// Supercritical fluid layer of giant planets
    Fluid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrustType {
    Basaltic,
    Granitic,
    Ice,
    Regolith,
    /// No solid surface
    None,
}

/// Level of surface geological activity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TectonicActivity {
    None,
    Active,
    VeryActive,
}

impl TectonicActivity {
    pub const ALL: [TectonicActivity; 3] = [
        TectonicActivity::None,
        TectonicActivity::Active,
        TectonicActivity::VeryActive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Active => "Active",
            Self::VeryActive => "Very Active",
        }
    }
}

impl fmt::Display for TectonicActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Geology summary for one planet
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geology {
    pub core: CoreType,
    pub mantle: MantleType,
    pub crust: CrustType,
    pub tectonics: TectonicActivity,
}

impl Geology {
    /// Draw a geology for a planet type
    ///
    /// # Example
    /// ```
    /// use planetary::{CrustType, Geology, PlanetType};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaChaRng;
    ///
    /// let mut rng = ChaChaRng::seed_from_u64(42);
    /// let geology = Geology::sample(&mut rng, PlanetType::GasGiant);
    /// assert_eq!(geology.crust, CrustType::None);
    /// ```
    pub fn sample(rng: &mut impl Rng, planet_type: PlanetType) -> Self {
        let candidates = GeologyCandidates::for_planet_type(planet_type);

        Self {
            core: pick(rng, candidates.cores),
            mantle: pick(rng, candidates.mantles),
            crust: pick(rng, candidates.crusts),
            tectonics: pick(rng, candidates.tectonics),
        }
    }

    /// Returns whether the planet has a solid surface
    pub fn has_solid_surface(&self) -> bool {
        self.crust != CrustType::None
    }
}

/// Per-type option lists; every list is non-empty
struct GeologyCandidates {
    cores: &'static [CoreType],
    mantles: &'static [MantleType],
    crusts: &'static [CrustType],
    tectonics: &'static [TectonicActivity],
}

impl GeologyCandidates {
    fn for_planet_type(planet_type: PlanetType) -> Self {
        match planet_type {
            PlanetType::LavaPlanet => Self {
                cores: &[CoreType::Iron, CoreType::IronNickel],
                mantles: &[MantleType::Magma],
                crusts: &[CrustType::Basaltic, CrustType::None],
                tectonics: &[TectonicActivity::Active, TectonicActivity::VeryActive],
            },
            PlanetType::Terrestrial => Self {
                cores: &[CoreType::Iron, CoreType::IronNickel],
                mantles: &[MantleType::Silicate],
                crusts: &[CrustType::Basaltic, CrustType::Granitic],
                tectonics: &TectonicActivity::ALL,
            },
            PlanetType::OceanWorld => Self {
                cores: &[CoreType::IronNickel, CoreType::Rocky],
                mantles: &[MantleType::Silicate, MantleType::Ice],
                crusts: &[CrustType::Ice, CrustType::Basaltic],
                tectonics: &[TectonicActivity::None, TectonicActivity::Active],
            },
            PlanetType::GasGiant => Self {
                cores: &[CoreType::Rocky, CoreType::MetallicHydrogen],
                mantles: &[MantleType::Fluid],
                crusts: &[CrustType::None],
                tectonics: &[TectonicActivity::None],
            },
            PlanetType::IceGiant => Self {
                cores: &[CoreType::Rocky, CoreType::Icy],
                mantles: &[MantleType::Ice, MantleType::Fluid],
                crusts: &[CrustType::None],
                tectonics: &[TectonicActivity::None],
            },
            PlanetType::DwarfPlanet => Self {
                cores: &[CoreType::Rocky, CoreType::Icy],
                mantles: &[MantleType::Ice, MantleType::Silicate],
                crusts: &[CrustType::Ice, CrustType::Regolith],
                tectonics: &[TectonicActivity::None, TectonicActivity::Active],
            },
        }
    }
}

fn pick<T: Copy>(rng: &mut impl Rng, options: &[T]) -> T {
    options[rng.random_range(0..options.len())]
}
