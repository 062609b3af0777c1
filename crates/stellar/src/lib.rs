//! Star generation and habitable zones.
//!
//! Stars are drawn from per-spectral-type tables of age, size and mass
//! ranges. Luminosity is a size × multiplier proxy, not a physical
//! mass-luminosity relation, and the habitable zone scales with √L.

pub mod error;
pub mod habitable_zone;
pub mod sampling;
pub mod spectral;
pub mod star;


pub use error::StellarError;
pub use habitable_zone::{HabitableZone, calculate_habitable_zone};
pub use spectral::{SpectralProfile, SpectralType};
pub use star::{Star, generate_star};
