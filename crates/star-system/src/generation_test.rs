use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use planetary::{AtmosphereCategory, Planet, PlanetType};
use stellar::{SpectralType, Star, calculate_habitable_zone};

use crate::{
    GeneratorConfig, HabitableZoneRepair, PlanetCountRange, SystemError, SystemMetadata,
    enforce_habitable_planet, generate_planets, generate_solar_system, generate_solar_system_with,
    generate_system, generate_system_from_seed, generate_system_named, orbit_radius,
};

/// Star whose zone (≈1.65..2.37 AU) contains the third of five default orbits
fn bright_star() -> Star {
    Star::new(SpectralType::F, 1.0, 1.0, 1.2, 3.0)
}

#[test]
fn test_default_planet_count_in_range() {
    for seed in 0..100 {
        let system = generate_system_from_seed(seed);
        assert!(
            (3..=10).contains(&system.planets.len()),
            "seed {seed}: {} planets",
            system.planets.len()
        );
    }
}

#[test]
fn test_planets_sorted() {
    for seed in 0..100 {
        assert!(generate_system_from_seed(seed).is_sorted(), "seed {seed}");
    }
}

#[test]
fn test_always_has_habitable_zone_planet() {
    for seed in 0..200 {
        let system = generate_system_from_seed(seed);
        assert!(system.has_habitable_zone_planet(), "seed {seed}");
    }
}

#[test]
fn test_same_seed_same_system() {
    assert_eq!(generate_system_from_seed(1234), generate_system_from_seed(1234));
    assert_eq!(generate_system_named("Sol"), generate_system_named("Sol"));

    let mut rng1 = ChaChaRng::seed_from_u64(5);
    let mut rng2 = ChaChaRng::seed_from_u64(5);
    let star = Star::sun_like();
    assert_eq!(
        generate_solar_system(&mut rng1, &star),
        generate_solar_system(&mut rng2, &star)
    );
}

#[test]
fn test_named_system_keeps_name() {
    let system = generate_system_named("New Eden");
    assert_eq!(system.metadata.display_name(), "New Eden");
    assert_eq!(system.metadata, SystemMetadata::from_seed_name("New Eden").with_name("New Eden"));
}

#[test]
fn test_fixed_count_without_enforcement_uses_exact_radii() {
    let star = bright_star();
    let config = GeneratorConfig::with_planet_count(5);

    for seed in 0..20 {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let planets = generate_planets(&mut rng, &star, &config).unwrap();

        assert_eq!(planets.len(), 5);
        for (i, planet) in planets.iter().enumerate() {
            assert_relative_eq!(
                planet.orbit_radius,
                orbit_radius(i, 5, 0.2, 50.0),
                max_relative = 1e-12
            );
            assert!(planet.type_matches_orbit());
        }
    }
}

#[test]
fn test_fixed_count_with_enforcement_moves_one_planet() {
    // None of the five default orbits falls inside the solar zone (0.95..1.37 AU)
    let star = Star::sun_like();
    let config = GeneratorConfig::with_planet_count(5);
    let spaced: Vec<f64> = (0..5).map(|i| orbit_radius(i, 5, 0.2, 50.0)).collect();
    assert!(!spaced.iter().any(|r| star.habitable_zone.contains(*r)));

    for seed in 0..20 {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let planets = generate_planets(&mut rng, &star, &config).unwrap();
        assert_eq!(planets.len(), 5);

        let moved: Vec<&Planet> = planets
            .iter()
            .filter(|p| (p.orbit_radius - 1.16).abs() < 1e-9)
            .collect();
        assert_eq!(moved.len(), 1, "seed {seed}");
        assert_eq!(moved[0].planet_type, PlanetType::Terrestrial);

        let kept = planets
            .iter()
            .filter(|p| spaced.iter().any(|r| (p.orbit_radius - r).abs() < 1e-9))
            .count();
        assert_eq!(kept, 4, "seed {seed}");
    }
}

#[test]
fn test_keep_stale_leaves_old_attributes() {
    let zone = calculate_habitable_zone(1.0);
    let mut rng = ChaChaRng::seed_from_u64(3);
    let giant = Planet::with_type(&mut rng, PlanetType::GasGiant, 7.0, &zone);
    let mut planets = vec![giant.clone()];

    let index =
        enforce_habitable_planet(&mut rng, &mut planets, &zone, HabitableZoneRepair::KeepStale);

    assert_eq!(index, Some(0));
    let moved = &planets[0];
    assert_eq!(moved.planet_type, PlanetType::Terrestrial);
    assert_relative_eq!(moved.orbit_radius, zone.midpoint(), epsilon = 1e-12);
    assert_eq!(moved.size, giant.size);
    assert_eq!(moved.atmosphere, giant.atmosphere);
    assert_eq!(moved.moons, giant.moons);
    assert_eq!(moved.geology, giant.geology);
}

#[test]
fn test_reclassify_regenerates_moved_planet() {
    let zone = calculate_habitable_zone(1.0);
    let mut rng = ChaChaRng::seed_from_u64(3);
    let mut planets = vec![Planet::with_type(&mut rng, PlanetType::GasGiant, 7.0, &zone)];

    enforce_habitable_planet(&mut rng, &mut planets, &zone, HabitableZoneRepair::Reclassify);

    let moved = &planets[0];
    let (min_size, max_size) = PlanetType::Terrestrial.size_range();
    let (_, max_moons) = PlanetType::Terrestrial.moon_range();

    assert_eq!(moved.planet_type, PlanetType::Terrestrial);
    assert!(moved.size >= min_size && moved.size <= max_size);
    assert!(moved.moons <= max_moons);
    assert!(
        AtmosphereCategory::candidates_for(PlanetType::Terrestrial, true)
            .contains(&moved.atmosphere.category())
    );
}

#[test]
fn test_enforce_on_empty_slice() {
    let zone = calculate_habitable_zone(1.0);
    let mut rng = ChaChaRng::seed_from_u64(0);
    let mut planets: Vec<Planet> = Vec::new();

    assert_eq!(
        enforce_habitable_planet(&mut rng, &mut planets, &zone, HabitableZoneRepair::KeepStale),
        None
    );
}

#[test]
fn test_reclassify_keeps_atmospheres_consistent() {
    let config = GeneratorConfig {
        habitable_zone_repair: HabitableZoneRepair::Reclassify,
        ..GeneratorConfig::default()
    };

    for seed in 0..50 {
        let system = generate_system(SystemMetadata::from_seed(seed), &config).unwrap();
        let zone = *system.habitable_zone();

        for planet in &system.planets {
            let in_zone = planet.in_habitable_zone(&zone);
            let candidates = AtmosphereCategory::candidates_for(planet.planet_type, in_zone);
            assert!(
                candidates.contains(&planet.atmosphere.category()),
                "seed {seed}: {} with {}",
                planet.planet_type,
                planet.atmosphere
            );
        }
    }
}

#[test]
fn test_config_respected() {
    let config = GeneratorConfig::from_json_str(
        r#"{ "planetCount": { "min": 2, "max": 4 }, "minOrbitAu": 0.5, "maxOrbitAu": 20.0 }"#,
    )
    .unwrap();

    for seed in 0..30 {
        let system = generate_system(SystemMetadata::from_seed(seed), &config).unwrap();
        assert!((2..=4).contains(&system.planets.len()));
        let zone = *system.habitable_zone();
        for planet in &system.planets {
            let spaced = planet.orbit_radius >= 0.5 && planet.orbit_radius < 20.0;
            assert!(spaced || planet.in_habitable_zone(&zone), "seed {seed}");
        }
    }
}

#[test]
fn test_invalid_config_rejected() {
    let config = GeneratorConfig::with_planet_count(0);
    let mut rng = ChaChaRng::seed_from_u64(0);

    assert!(matches!(
        generate_solar_system_with(&mut rng, &Star::sun_like(), &config),
        Err(SystemError::InvalidConfig(_))
    ));
    assert!(matches!(
        generate_system(SystemMetadata::from_seed(0), &config),
        Err(SystemError::InvalidConfig(_))
    ));
}

#[test]
fn test_generate_planets_rejects_invalid_config() {
    let inverted = GeneratorConfig {
        planet_count: PlanetCountRange { min: 8, max: 4 },
        ..GeneratorConfig::default()
    };
    let empty = GeneratorConfig::with_planet_count(0);
    let bad_orbit = GeneratorConfig {
        min_orbit_au: 0.0,
        ..GeneratorConfig::default()
    };

    for config in [inverted, empty, bad_orbit] {
        let mut rng = ChaChaRng::seed_from_u64(0);
        let untouched = rng.clone();

        let result = generate_planets(&mut rng, &Star::sun_like(), &config);
        assert!(matches!(result, Err(SystemError::InvalidConfig(_))), "{config:?}");
        assert_eq!(rng, untouched);
    }
}

#[test]
fn test_star_is_kept() {
    let mut rng = ChaChaRng::seed_from_u64(11);
    let star = bright_star();
    let system = generate_solar_system(&mut rng, &star);

    assert_eq!(system.star, star);
    assert_eq!(*system.habitable_zone(), star.habitable_zone);
}
