//! Orbit placement
//!
//! Planets sit at geometrically spaced radii: orbit `i` of `n` is
//! `exp(ln(min) + i · (ln(max) − ln(min)) / n)`. The first orbit is exactly
//! `min`; `max` itself is never reached.

/// Radius (AU) of orbit `index` out of `count`
///
/// `count` must be at least 1 and both bounds positive.
///
/// # Example
/// ```
/// use star_system::orbit_radius;
///
/// assert!((orbit_radius(0, 5, 0.2, 50.0) - 0.2).abs() < 1e-12);
/// ```
pub fn orbit_radius(index: usize, count: usize, min_orbit: f64, max_orbit: f64) -> f64 {
    let ln_min = min_orbit.ln();
    let ln_max = max_orbit.ln();
    (ln_min + index as f64 * (ln_max - ln_min) / count as f64).exp()
}

/// All `count` orbit radii, innermost first
pub fn orbit_radii(count: usize, min_orbit: f64, max_orbit: f64) -> Vec<f64> {
    (0..count)
        .map(|index| orbit_radius(index, count, min_orbit, max_orbit))
        .collect()
}
