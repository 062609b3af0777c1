//! Solar system generation
//!
//! 1. Draw a planet count from the configured range.
//! 2. Place planets at log-spaced orbits and generate each one for its band.
//! 3. If no planet landed in the habitable zone, move a random planet to the
//!    zone midpoint as a Terrestrial world.
//! 4. Sort by orbit radius.
//!
//! Every random draw goes through the caller's RNG, so a seeded RNG always
//! reproduces the same system.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use uuid::Builder;

use planetary::{Planet, PlanetType};
use stellar::sampling::sample_count;
use stellar::{HabitableZone, Star, generate_star};

use crate::config::{GeneratorConfig, HabitableZoneRepair};
use crate::error::SystemError;
use crate::metadata::SystemMetadata;
use crate::orbit::orbit_radius;
use crate::system::SolarSystem;

/// Generate the planets for a star, sorted by orbit radius
///
/// # Errors
/// Returns [`SystemError::InvalidConfig`] when `config` fails
/// [`GeneratorConfig::validate`]; no random draws are made in that case.
pub fn generate_planets(
    rng: &mut impl Rng,
    star: &Star,
    config: &GeneratorConfig,
) -> Result<Vec<Planet>, SystemError> {
    config.validate()?;
    Ok(place_planets(rng, star, config))
}

/// `config` must already be validated
fn place_planets(rng: &mut impl Rng, star: &Star, config: &GeneratorConfig) -> Vec<Planet> {
    let zone = star.habitable_zone;
    let count = sample_count(rng, (config.planet_count.min, config.planet_count.max)) as usize;

    let mut planets: Vec<Planet> = (0..count)
        .map(|index| {
            let radius = orbit_radius(index, count, config.min_orbit_au, config.max_orbit_au);
            Planet::generate(rng, radius, &zone)
        })
        .collect();

    if !planets.iter().any(|planet| planet.in_habitable_zone(&zone)) {
        enforce_habitable_planet(rng, &mut planets, &zone, config.habitable_zone_repair);
    }

    planets.sort_by(|a, b| a.orbit_radius.total_cmp(&b.orbit_radius));

    debug!(
        "generated {} planets around {}-type star (habitable zone {:.3}..{:.3} AU)",
        planets.len(),
        star.spectral_type,
        zone.inner_boundary,
        zone.outer_boundary
    );

    planets
}

/// Move one randomly chosen planet to the habitable-zone midpoint
///
/// The planet becomes Terrestrial. With [`HabitableZoneRepair::KeepStale`]
/// its other fields are left as drawn for the old orbit; with
/// [`HabitableZoneRepair::Reclassify`] it is regenerated at the new orbit.
/// Returns the index of the moved planet, or `None` for an empty slice.
pub fn enforce_habitable_planet(
    rng: &mut impl Rng,
    planets: &mut [Planet],
    habitable_zone: &HabitableZone,
    repair: HabitableZoneRepair,
) -> Option<usize> {
    if planets.is_empty() {
        return None;
    }

    let index = rng.random_range(0..planets.len());
    let midpoint = habitable_zone.midpoint();

    debug!(
        "no planet in habitable zone; moving planet {} from {:.3} AU to {:.3} AU ({:?})",
        index, planets[index].orbit_radius, midpoint, repair
    );

    match repair {
        HabitableZoneRepair::KeepStale => {
            let planet = &mut planets[index];
            planet.orbit_radius = midpoint;
            planet.planet_type = PlanetType::Terrestrial;
        }
        HabitableZoneRepair::Reclassify => {
            planets[index] =
                Planet::with_type(rng, PlanetType::Terrestrial, midpoint, habitable_zone);
        }
    }

    Some(index)
}

/// Generate a system around `star` with the default config
///
/// The system id is drawn from `rng` after the planets, so the result is
/// fully determined by the RNG state.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use star_system::{Star, generate_solar_system};
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let system = generate_solar_system(&mut rng, &Star::sun_like());
/// assert!(system.has_habitable_zone_planet());
/// assert!(system.is_sorted());
/// ```
pub fn generate_solar_system(rng: &mut impl Rng, star: &Star) -> SolarSystem {
    assemble(rng, star, &GeneratorConfig::default())
}

/// Generate a system around `star` with an explicit config
pub fn generate_solar_system_with(
    rng: &mut impl Rng,
    star: &Star,
    config: &GeneratorConfig,
) -> Result<SolarSystem, SystemError> {
    config.validate()?;
    Ok(assemble(rng, star, config))
}

fn assemble(rng: &mut impl Rng, star: &Star, config: &GeneratorConfig) -> SolarSystem {
    let planets = place_planets(rng, star, config);
    let id = Builder::from_random_bytes(rng.random()).into_uuid();
    SolarSystem::new(SystemMetadata::with_id(id), star.clone(), planets)
}

/// Generate a complete system (star and planets) from its metadata
///
/// The RNG is seeded from `metadata.seed()`, so the same id always yields
/// the same system.
pub fn generate_system(
    metadata: SystemMetadata,
    config: &GeneratorConfig,
) -> Result<SolarSystem, SystemError> {
    config.validate()?;
    Ok(generate_seeded(metadata, config))
}

/// Generate a complete system with the default config from a numeric seed
pub fn generate_system_from_seed(seed: u64) -> SolarSystem {
    generate_seeded(SystemMetadata::from_seed(seed), &GeneratorConfig::default())
}

/// Generate a complete system named `name`, seeded from the name itself
pub fn generate_system_named(name: &str) -> SolarSystem {
    let metadata = SystemMetadata::from_seed_name(name).with_name(name);
    generate_seeded(metadata, &GeneratorConfig::default())
}

/// Generate a complete system with a random id
pub fn generate_system_random() -> SolarSystem {
    generate_seeded(SystemMetadata::new_random(), &GeneratorConfig::default())
}

fn generate_seeded(metadata: SystemMetadata, config: &GeneratorConfig) -> SolarSystem {
    let mut rng = ChaChaRng::seed_from_u64(metadata.seed());
    let star = generate_star(&mut rng);
    let planets = place_planets(&mut rng, &star, config);

    debug!("generated system {}", metadata.display_name());

    SolarSystem::new(metadata, star, planets)
}
