//! Generate planets CSV with individual planet data
//!
//! Usage: cargo run -p planetary --example generate_planets
//!
//! Output: one row per planet, for random stars and random orbits

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use stellar::generate_star;

use planetary::Planet;

fn main() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let n_planets = 1000;

    // CSV header
    println!("planet_idx,orbit_au,spectral_type,in_hz,type,size_earth,atmosphere,moons,tectonics");

    for planet_idx in 0..n_planets {
        let star = generate_star(&mut rng);
        let orbit_radius = 0.2 * (250.0_f64).powf(rng.random::<f64>());
        let planet = Planet::generate(&mut rng, orbit_radius, &star.habitable_zone);

        println!(
            "{},{:.4},{},{},{},{:.3},{},{},{}",
            planet_idx,
            planet.orbit_radius,
            star.spectral_type,
            planet.in_habitable_zone(&star.habitable_zone),
            planet.planet_type,
            planet.size,
            planet.atmosphere,
            planet.moons,
            planet.geology.tectonics,
        );
    }

    eprintln!("Generated {} planets", n_planets);
}
