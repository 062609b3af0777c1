use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use stellar::calculate_habitable_zone;

use crate::atmosphere::AtmosphereCategory;
use crate::composition::ElementalComposition;
use crate::planet::Planet;
use crate::planet_type::PlanetType;

#[test]
fn test_generate_classifies_by_orbit() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let zone = calculate_habitable_zone(1.0);

    for (radius, expected) in [
        (0.3, PlanetType::LavaPlanet),
        (1.1, PlanetType::Terrestrial),
        (3.0, PlanetType::OceanWorld),
        (7.0, PlanetType::GasGiant),
        (20.0, PlanetType::IceGiant),
        (45.0, PlanetType::DwarfPlanet),
    ] {
        let planet = Planet::generate(&mut rng, radius, &zone);

        assert_eq!(planet.planet_type, expected);
        assert_eq!(planet.orbit_radius, radius);
        assert!(planet.type_matches_orbit());

        let (min_size, max_size) = expected.size_range();
        assert!(planet.size >= min_size && planet.size < max_size);

        let (min_moons, max_moons) = expected.moon_range();
        assert!(planet.moons >= min_moons && planet.moons <= max_moons);
    }
}

#[test]
fn test_with_type_ignores_band() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let zone = calculate_habitable_zone(1.0);

    let planet = Planet::with_type(&mut rng, PlanetType::Terrestrial, 8.0, &zone);

    assert_eq!(planet.planet_type, PlanetType::Terrestrial);
    assert!(!planet.type_matches_orbit());
    // out of zone, so CO2 only
    assert_eq!(
        planet.atmosphere.category(),
        AtmosphereCategory::CarbonDioxide
    );
}

#[test]
fn test_habitable_zone_membership() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let zone = calculate_habitable_zone(1.0);

    assert!(Planet::generate(&mut rng, 1.2, &zone).in_habitable_zone(&zone));
    assert!(!Planet::generate(&mut rng, 1.4, &zone).in_habitable_zone(&zone));
}

#[test]
fn test_compositions_follow_type_and_atmosphere() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let zone = calculate_habitable_zone(1.0);
    let planet = Planet::generate(&mut rng, 7.0, &zone);

    assert_eq!(
        planet.composition(),
        ElementalComposition::for_planet_type(PlanetType::GasGiant)
    );
    assert_eq!(
        planet.atmosphere_composition(),
        planet.atmosphere.base_composition()
    );
}

#[test]
fn test_generation_is_reproducible() {
    let zone = calculate_habitable_zone(1.0);
    let p1 = Planet::generate(&mut ChaChaRng::seed_from_u64(12345), 1.1, &zone);
    let p2 = Planet::generate(&mut ChaChaRng::seed_from_u64(12345), 1.1, &zone);

    assert_eq!(p1, p2);
}

#[test]
fn test_planet_serializes_camel_case() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let zone = calculate_habitable_zone(1.0);
    let planet = Planet::generate(&mut rng, 7.0, &zone);

    let json = serde_json::to_value(&planet).unwrap();
    assert_eq!(json["planetType"], "gasGiant");
    assert_eq!(json["orbitRadius"], 7.0);
    assert!(json["atmosphere"].as_str().unwrap().starts_with("H2-He"));
    assert_eq!(json["moons"], planet.moons);
}
