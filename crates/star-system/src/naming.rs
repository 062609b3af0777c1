//! Planet designations
//!
//! Names have the form `P-{system}-{planet}-{atmosphere}-{activity}-{moons}`,
//! e.g. "P-1-2-M-Active-3". Any attribute not supplied is drawn at random.

use rand::Rng;

use planetary::TectonicActivity;

/// Atmosphere codes used when no atmosphere is given
pub const ATMOSPHERE_CODES: [&str; 4] = ["M", "O", "K", "L"];

/// Upper bound (inclusive) of the random moon count
pub const MAX_RANDOM_MOONS: u32 = 4;

/// Generate a planet designation, filling in missing attributes
///
/// Missing values are drawn in order: atmosphere code, activity, moons.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use star_system::generate_planet_name;
///
/// let mut rng = ChaChaRng::seed_from_u64(1);
/// let name = generate_planet_name(&mut rng, 1, 2, Some("M"), Some("Active"), Some(3));
/// assert_eq!(name, "P-1-2-M-Active-3");
/// ```
pub fn generate_planet_name(
    rng: &mut impl Rng,
    system_number: u32,
    planet_index: usize,
    atmosphere_type: Option<&str>,
    geological_activity: Option<&str>,
    moon_count: Option<u32>,
) -> String {
    let atmosphere = atmosphere_type
        .unwrap_or_else(|| ATMOSPHERE_CODES[rng.random_range(0..ATMOSPHERE_CODES.len())]);
    let activity = geological_activity.unwrap_or_else(|| {
        TectonicActivity::ALL[rng.random_range(0..TectonicActivity::ALL.len())].label()
    });
    let moons = moon_count.unwrap_or_else(|| rng.random_range(0..=MAX_RANDOM_MOONS));

    format_planet_name(system_number, planet_index, atmosphere, activity, moons)
}

pub fn format_planet_name(
    system_number: u32,
    planet_index: usize,
    atmosphere: &str,
    activity: &str,
    moons: u32,
) -> String {
    format!("P-{system_number}-{planet_index}-{atmosphere}-{activity}-{moons}")
}
