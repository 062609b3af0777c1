//! Generated host stars

use log::trace;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::habitable_zone::HabitableZone;
use crate::sampling::sample_uniform;
use crate::spectral::SpectralType;

/// A generated star with its habitable zone
///
/// Created once per generation request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub spectral_type: SpectralType,
    /// Age in billions of years
    pub age: f64,
    /// Radius in solar radii (R☉)
    pub size: f64,
    /// Mass in solar masses (M☉)
    pub mass: f64,
    /// Luminosity in solar luminosities (L☉)
    pub luminosity: f64,
    pub habitable_zone: HabitableZone,
}

impl Star {
    /// Build a star from explicit values, deriving its habitable zone
    ///
    /// # Example
    /// ```
    /// use stellar::{SpectralType, Star};
    ///
    /// let star = Star::new(SpectralType::G, 4.6, 1.0, 1.0, 1.0);
    /// assert_eq!(star.habitable_zone.inner_boundary, 0.95);
    /// ```
    pub fn new(
        spectral_type: SpectralType,
        age: f64,
        size: f64,
        mass: f64,
        luminosity: f64,
    ) -> Self {
        Self {
            spectral_type,
            age,
            size,
            mass,
            luminosity,
            habitable_zone: HabitableZone::from_luminosity(luminosity),
        }
    }

    /// G-type star with solar size, mass and luminosity
    pub fn sun_like() -> Self {
        Self::new(SpectralType::G, 4.6, 1.0, 1.0, 1.0)
    }
}

/// Generate a random star
///
/// The spectral type is picked uniformly; age, size and mass are drawn from
/// that type's [`SpectralProfile`](crate::SpectralProfile) and luminosity is
/// `size × luminosity_multiplier`.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use stellar::generate_star;
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let star = generate_star(&mut rng);
/// assert!(star.habitable_zone.inner_boundary < star.habitable_zone.outer_boundary);
/// ```
pub fn generate_star(rng: &mut impl Rng) -> Star {
    let spectral_type = SpectralType::sample(rng);
    let profile = spectral_type.profile();

    let age = sample_uniform(rng, profile.age_gyr);
    let size = sample_uniform(rng, profile.size_solar);
    let mass = sample_uniform(rng, profile.mass_solar);
    let luminosity = size * profile.luminosity_multiplier;

    trace!(
        "generated {}-type star: age={:.3} Gyr size={:.3} R☉ mass={:.3} M☉ L={:.3} L☉",
        spectral_type, age, size, mass, luminosity
    );

    Star::new(spectral_type, age, size, mass, luminosity)
}
