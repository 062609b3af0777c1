//! Planet classification and characterization
//!
//! This crate turns an orbit radius into a planet: its type (from fixed
//! orbital bands), size and moon count (from per-type ranges), atmosphere
//! sub-type and gas table, and placeholder geology and bulk composition.

pub mod atmosphere;
pub mod composition;
pub mod error;
pub mod geology;
pub mod planet;
pub mod planet_type;

// Re-export key types at crate root
pub use atmosphere::{
    AtmosphereCategory, AtmosphereComposition, AtmosphereSubtype, base_composition,
    planet_atmosphere,
};
pub use composition::{Element, ElementalComposition};
pub use error::PlanetaryError;
pub use geology::{CoreType, CrustType, Geology, MantleType, TectonicActivity};
pub use planet::Planet;
pub use planet_type::PlanetType;

#[cfg(test)]
mod geology_test;
#[cfg(test)]
mod planet_test;
