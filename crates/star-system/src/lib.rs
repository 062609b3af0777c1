//! Solar system generation
//!
//! Places planets at log-spaced orbits around a generated star, classifies
//! them, guarantees at least one habitable-zone planet and returns the
//! result sorted by orbit radius.
//!
//! ```
//! use star_system::generate_system_from_seed;
//!
//! let system = generate_system_from_seed(42);
//! assert!((3..=10).contains(&system.planets.len()));
//! assert!(system.has_habitable_zone_planet());
//! ```

pub mod config;
pub mod error;
pub mod generation;
pub mod metadata;
pub mod naming;
pub mod orbit;
pub mod system;

// Re-export main types at crate root
pub use config::{GeneratorConfig, HabitableZoneRepair, PlanetCountRange};
pub use error::SystemError;
pub use generation::{
    enforce_habitable_planet, generate_planets, generate_solar_system,
    generate_solar_system_with, generate_system, generate_system_from_seed,
    generate_system_named, generate_system_random,
};
pub use metadata::SystemMetadata;
pub use naming::{format_planet_name, generate_planet_name};
pub use orbit::{orbit_radii, orbit_radius};
pub use system::SolarSystem;

// Re-export upstream types for convenience
pub use planetary::{AtmosphereSubtype, Planet, PlanetType};
pub use stellar::{HabitableZone, SpectralType, Star};

#[cfg(test)]
mod generation_test;
#[cfg(test)]
mod orbit_test;
