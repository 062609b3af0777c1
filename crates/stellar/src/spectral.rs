use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::StellarError;

/// Coarse spectral class of a generated star, coolest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralType {
    M,
    K,
    G,
    F,
    A,
    B,
    O,
}

/// Per-type generation table
///
/// Ranges are `(min, max)` and sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralProfile {
    /// Age range in billions of years
    pub age_gyr: (f64, f64),
    /// Size range in solar radii
    pub size_solar: (f64, f64),
    /// Mass range in solar masses
    pub mass_solar: (f64, f64),
    /// Luminosity per solar radius (L☉ / R☉)
    pub luminosity_multiplier: f64,
}

impl SpectralType {
    /// All classes, coolest to hottest
    pub const ALL: [SpectralType; 7] = [
        SpectralType::M,
        SpectralType::K,
        SpectralType::G,
        SpectralType::F,
        SpectralType::A,
        SpectralType::B,
        SpectralType::O,
    ];

    /// Pick a class uniformly
    pub fn sample(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Generation table for this class
    ///
    /// Age ranges widen toward cool, long-lived dwarfs and collapse toward
    /// zero for hot massive stars. Size, mass and the luminosity multiplier
    /// grow monotonically from M to O.
    pub fn profile(&self) -> SpectralProfile {
        match self {
            Self::M => SpectralProfile {
                age_gyr: (1.0, 5000.0),
                size_solar: (0.1, 0.7),
                mass_solar: (0.08, 0.45),
                luminosity_multiplier: 0.08,
            },
            Self::K => SpectralProfile {
                age_gyr: (0.5, 100.0),
                size_solar: (0.7, 0.96),
                mass_solar: (0.45, 0.8),
                luminosity_multiplier: 0.4,
            },
            Self::G => SpectralProfile {
                age_gyr: (0.1, 20.0),
                size_solar: (0.96, 1.15),
                mass_solar: (0.8, 1.04),
                luminosity_multiplier: 1.0,
            },
            Self::F => SpectralProfile {
                age_gyr: (0.05, 10.0),
                size_solar: (1.15, 1.4),
                mass_solar: (1.04, 1.4),
                luminosity_multiplier: 3.0,
            },
            Self::A => SpectralProfile {
                age_gyr: (0.01, 3.0),
                size_solar: (1.4, 1.8),
                mass_solar: (1.4, 2.1),
                luminosity_multiplier: 10.0,
            },
            Self::B => SpectralProfile {
                age_gyr: (0.005, 1.0),
                size_solar: (1.8, 6.6),
                mass_solar: (2.1, 16.0),
                luminosity_multiplier: 25.0,
            },
            Self::O => SpectralProfile {
                age_gyr: (0.001, 0.1),
                size_solar: (6.6, 15.0),
                mass_solar: (16.0, 90.0),
                luminosity_multiplier: 50.0,
            },
        }
    }

    /// Single-letter designation
    pub fn letter(&self) -> char {
        match self {
            Self::M => 'M',
            Self::K => 'K',
            Self::G => 'G',
            Self::F => 'F',
            Self::A => 'A',
            Self::B => 'B',
            Self::O => 'O',
        }
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for SpectralType {
    type Err = StellarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "M" => Ok(Self::M),
            "K" => Ok(Self::K),
            "G" => Ok(Self::G),
            "F" => Ok(Self::F),
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "O" => Ok(Self::O),
            _ => Err(StellarError::UnknownSpectralType(s.to_string())),
        }
    }
}
