use rand::Rng;

/// Sample uniformly from a `(min, max)` range
///
/// A degenerate range (`min == max`) always returns `min`, so table rows
/// with a fixed value need no special casing.
///
/// # Arguments
/// * `rng` - Random number generator
/// * `range` - Lower and upper bound
///
/// # Returns
/// A value in `[min, max)`
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use stellar::sampling::sample_uniform;
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let size = sample_uniform(&mut rng, (0.5, 1.5));
/// assert!((0.5..1.5).contains(&size));
/// ```
pub fn sample_uniform(rng: &mut impl Rng, range: (f64, f64)) -> f64 {
    let (min, max) = range;
    min + rng.random::<f64>() * (max - min)
}

/// Sample an integer uniformly from an inclusive `(min, max)` range
pub fn sample_count(rng: &mut impl Rng, range: (u32, u32)) -> u32 {
    let (min, max) = range;
    rng.random_range(min..=max)
}

