//! Placeholder bulk elemental composition
//!
//! Each planet type carries a fixed table of element mass percentages. These
//! are display presets, not computed from formation history; tables are not
//! normalized.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::planet_type::PlanetType;

/// Elements tracked in bulk composition tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    H,
    He,
    C,
    N,
    O,
    Mg,
    Si,
    S,
    Fe,
    Ni,
}

impl Element {
    pub fn name(&self) -> &'static str {
        match self {
            Self::H => "Hydrogen",
            Self::He => "Helium",
            Self::C => "Carbon",
            Self::N => "Nitrogen",
            Self::O => "Oxygen",
            Self::Mg => "Magnesium",
            Self::Si => "Silicon",
            Self::S => "Sulfur",
            Self::Fe => "Iron",
            Self::Ni => "Nickel",
        }
    }

    /// Condensed-phase density in g/cm³
    ///
    /// Volatiles use their liquid density at the boiling point.
    pub fn density(&self) -> f64 {
        match self {
            Self::H => 0.0708,
            Self::He => 0.125,
            Self::C => 2.267,
            Self::N => 0.808,
            Self::O => 1.141,
            Self::Mg => 1.738,
            Self::Si => 2.329,
            Self::S => 2.07,
            Self::Fe => 7.874,
            Self::Ni => 8.908,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Element mass percentages for a planet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementalComposition(BTreeMap<Element, f64>);

impl ElementalComposition {
    pub fn from_pairs(pairs: &[(Element, f64)]) -> Self {
        Self(pairs.iter().copied().collect())
    }

    /// Preset table for a planet type
    pub fn for_planet_type(planet_type: PlanetType) -> Self {
        use Element::*;
        let table: &[(Element, f64)] = match planet_type {
            PlanetType::LavaPlanet => &[
                (Fe, 35.0),
                (O, 28.0),
                (Si, 17.0),
                (Mg, 14.0),
                (S, 4.0),
                (Ni, 2.0),
            ],
            // Earth bulk
            PlanetType::Terrestrial => &[
                (Fe, 32.1),
                (O, 30.1),
                (Si, 15.1),
                (Mg, 13.9),
                (S, 2.9),
                (Ni, 1.8),
            ],
            PlanetType::OceanWorld => &[
                (O, 45.0),
                (Fe, 18.0),
                (H, 12.0),
                (Si, 12.0),
                (Mg, 10.0),
                (C, 3.0),
            ],
            PlanetType::GasGiant => &[(H, 74.0), (He, 24.0), (O, 1.0), (C, 0.5), (N, 0.1)],
            PlanetType::IceGiant => &[
                (O, 40.0),
                (H, 20.0),
                (C, 15.0),
                (N, 10.0),
                (He, 5.0),
                (Si, 5.0),
                (Fe, 5.0),
            ],
            PlanetType::DwarfPlanet => &[
                (O, 35.0),
                (Si, 20.0),
                (Fe, 15.0),
                (Mg, 12.0),
                (H, 8.0),
                (C, 6.0),
                (N, 4.0),
            ],
        };

        Self::from_pairs(table)
    }

    pub fn get(&self, element: Element) -> Option<f64> {
        self.0.get(&element).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        self.0.iter().map(|(element, percent)| (*element, *percent))
    }

    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Abundance-weighted mean of element densities (g/cm³)
    ///
    /// Returns 0.0 for an empty table.
    pub fn mean_density(&self) -> f64 {
        let total = self.total();
        if total <= 0.0 {
            return 0.0;
        }
        self.iter()
            .map(|(element, percent)| element.density() * percent)
            .sum::<f64>()
            / total
    }

    /// Returns the most abundant element
    pub fn dominant(&self) -> Option<Element> {
        self.iter()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(element, _)| element)
    }
}
