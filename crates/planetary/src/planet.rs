//! Generated planet values

use log::trace;
use rand::Rng;
use serde::{Deserialize, Serialize};
use stellar::HabitableZone;

use crate::atmosphere::{AtmosphereComposition, AtmosphereSubtype, planet_atmosphere};
use crate::composition::ElementalComposition;
use crate::geology::Geology;
use crate::planet_type::PlanetType;

/// A generated planet
///
/// `planet_type` and `orbit_radius` normally agree (see
/// [`PlanetType::from_orbit_radius`]); habitable-zone enforcement may move a
/// planet without re-deriving its other fields, which
/// [`Planet::type_matches_orbit`] detects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub planet_type: PlanetType,
    /// Orbit radius in AU
    pub orbit_radius: f64,
    /// Radius in Earth radii
    pub size: f64,
    pub atmosphere: AtmosphereSubtype,
    pub moons: u32,
    pub geology: Geology,
}

impl Planet {
    /// Generate a planet at the given orbit radius
    ///
    /// The type comes from the orbital band; size, atmosphere, moons and
    /// geology are then drawn for that type, in that order.
    ///
    /// # Example
    /// ```
    /// use planetary::{Planet, PlanetType};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaChaRng;
    /// use stellar::calculate_habitable_zone;
    ///
    /// let mut rng = ChaChaRng::seed_from_u64(42);
    /// let zone = calculate_habitable_zone(1.0);
    /// let planet = Planet::generate(&mut rng, 7.5, &zone);
    /// assert_eq!(planet.planet_type, PlanetType::GasGiant);
    /// ```
    pub fn generate(rng: &mut impl Rng, orbit_radius: f64, habitable_zone: &HabitableZone) -> Self {
        let planet_type = PlanetType::from_orbit_radius(orbit_radius);
        Self::with_type(rng, planet_type, orbit_radius, habitable_zone)
    }

    /// Generate a planet of a fixed type, regardless of its orbital band
    pub fn with_type(
        rng: &mut impl Rng,
        planet_type: PlanetType,
        orbit_radius: f64,
        habitable_zone: &HabitableZone,
    ) -> Self {
        let size = planet_type.sample_size(rng);
        let atmosphere = planet_atmosphere(rng, planet_type, orbit_radius, habitable_zone);
        let moons = planet_type.sample_moons(rng);
        let geology = Geology::sample(rng, planet_type);

        trace!(
            "{} at {:.3} AU: size={:.2} R⊕ atmosphere={} moons={}",
            planet_type, orbit_radius, size, atmosphere, moons
        );

        Self {
            planet_type,
            orbit_radius,
            size,
            atmosphere,
            moons,
            geology,
        }
    }

    pub fn in_habitable_zone(&self, habitable_zone: &HabitableZone) -> bool {
        habitable_zone.contains(self.orbit_radius)
    }

    /// Returns whether the stored type is the one its orbit radius implies
    pub fn type_matches_orbit(&self) -> bool {
        PlanetType::from_orbit_radius(self.orbit_radius) == self.planet_type
    }

    /// Gas table for this planet's atmosphere
    pub fn atmosphere_composition(&self) -> AtmosphereComposition {
        self.atmosphere.base_composition()
    }

    /// Bulk elemental preset for this planet's type
    pub fn composition(&self) -> ElementalComposition {
        ElementalComposition::for_planet_type(self.planet_type)
    }
}
