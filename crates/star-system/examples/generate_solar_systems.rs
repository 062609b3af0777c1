//! Generate solar systems from sequential seeds and export a CSV summary
//!
//! Usage: cargo run -p star-system --example generate_solar_systems

use planetary::PlanetType;
use star_system::generate_system_from_seed;

fn main() {
    let n_systems = 1000;

    // CSV header
    println!(
        "seed,catalog_name,spectral_type,luminosity,hz_inner_au,hz_outer_au,n_planets,\
         n_lava,n_terrestrial,n_ocean,n_gas_giant,n_ice_giant,n_dwarf,\
         n_in_hz,total_moons,innermost_au,outermost_au"
    );

    for seed in 0..n_systems {
        let system = generate_system_from_seed(seed);
        let zone = system.habitable_zone();
        let counts: Vec<String> = PlanetType::ALL
            .iter()
            .map(|t| system.planets_of_type(*t).len().to_string())
            .collect();

        let innermost = system.planets.first().map_or(0.0, |p| p.orbit_radius);
        let outermost = system.planets.last().map_or(0.0, |p| p.orbit_radius);

        println!(
            "{},{},{},{:.4},{:.4},{:.4},{},{},{},{},{:.4},{:.4}",
            seed,
            system.metadata.catalog_name(),
            system.star.spectral_type,
            system.star.luminosity,
            zone.inner_boundary,
            zone.outer_boundary,
            system.planets.len(),
            counts.join(","),
            system.habitable_zone_planets().len(),
            system.total_moons(),
            innermost,
            outermost,
        );
    }

    eprintln!("Generated {} systems", n_systems);
}
