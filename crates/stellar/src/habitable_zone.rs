//! Habitable zone boundaries derived from stellar luminosity
//!
//! Both edges scale with √L, so a Sun-like star (L = 1 L☉) gets a zone of
//! 0.95-1.37 AU.

use serde::{Deserialize, Serialize};

use crate::error::StellarError;

/// Inner edge coefficient (AU at 1 L☉)
pub const INNER_COEFFICIENT: f64 = 0.95;

/// Outer edge coefficient (AU at 1 L☉)
pub const OUTER_COEFFICIENT: f64 = 1.37;

/// Band of orbital radii (AU) around a star
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitableZone {
    /// Inner boundary in AU
    pub inner_boundary: f64,
    /// Outer boundary in AU
    pub outer_boundary: f64,
}

impl HabitableZone {
    pub fn from_luminosity(luminosity: f64) -> Self {
        let scale = luminosity.sqrt();
        Self {
            inner_boundary: INNER_COEFFICIENT * scale,
            outer_boundary: OUTER_COEFFICIENT * scale,
        }
    }

    /// Checked variant for luminosity coming from outside the generator
    ///
    /// # Errors
    /// Returns [`StellarError::InvalidLuminosity`] when `luminosity` is not
    /// finite or not strictly positive, since the zone would otherwise be
    /// empty or undefined.
    pub fn try_from_luminosity(luminosity: f64) -> Result<Self, StellarError> {
        if !luminosity.is_finite() || luminosity <= 0.0 {
            return Err(StellarError::InvalidLuminosity(luminosity));
        }
        Ok(Self::from_luminosity(luminosity))
    }

    /// Whether `orbit_radius` lies inside the zone, both edges inclusive
    pub fn contains(&self, orbit_radius: f64) -> bool {
        orbit_radius >= self.inner_boundary && orbit_radius <= self.outer_boundary
    }

    pub fn midpoint(&self) -> f64 {
        (self.inner_boundary + self.outer_boundary) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.outer_boundary - self.inner_boundary
    }
}

/// Habitable zone for a star of the given luminosity (L☉)
///
/// Pure and total; see [`HabitableZone::try_from_luminosity`] for the
/// validating form.
pub fn calculate_habitable_zone(luminosity: f64) -> HabitableZone {
    HabitableZone::from_luminosity(luminosity)
}
