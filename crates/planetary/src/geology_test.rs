//! Tests for placeholder geology

use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::geology::{CoreType, CrustType, Geology, MantleType, TectonicActivity};
use crate::planet_type::PlanetType;

#[test]
fn test_giants_have_no_surface() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    for planet_type in [PlanetType::GasGiant, PlanetType::IceGiant] {
        for _ in 0..50 {
            let geology = Geology::sample(&mut rng, planet_type);
            assert_eq!(geology.crust, CrustType::None);
            assert_eq!(geology.tectonics, TectonicActivity::None);
            assert!(!geology.has_solid_surface());
        }
    }
}

#[test]
fn test_lava_planets_are_molten_and_active() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    for _ in 0..50 {
        let geology = Geology::sample(&mut rng, PlanetType::LavaPlanet);
        assert_eq!(geology.mantle, MantleType::Magma);
        assert_ne!(geology.tectonics, TectonicActivity::None);
        assert!(matches!(geology.core, CoreType::Iron | CoreType::IronNickel));
    }
}

#[test]
fn test_terrestrial_draws_every_activity_level() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    let levels: Vec<TectonicActivity> = (0..300)
        .map(|_| Geology::sample(&mut rng, PlanetType::Terrestrial).tectonics)
        .collect();

    for level in TectonicActivity::ALL {
        assert!(levels.contains(&level), "{} never drawn", level);
    }
}

#[test]
fn test_terrestrial_has_solid_surface() {
    let mut rng = ChaChaRng::seed_from_u64(9);

    for _ in 0..50 {
        let geology = Geology::sample(&mut rng, PlanetType::Terrestrial);
        assert!(geology.has_solid_surface());
        assert_eq!(geology.mantle, MantleType::Silicate);
    }
}

#[test]
fn test_activity_labels() {
    assert_eq!(TectonicActivity::None.to_string(), "None");
    assert_eq!(TectonicActivity::Active.to_string(), "Active");
    assert_eq!(TectonicActivity::VeryActive.to_string(), "Very Active");
}

#[test]
fn test_sampling_is_reproducible() {
    let g1 = Geology::sample(&mut ChaChaRng::seed_from_u64(5), PlanetType::DwarfPlanet);
    let g2 = Geology::sample(&mut ChaChaRng::seed_from_u64(5), PlanetType::DwarfPlanet);

    assert_eq!(g1, g2);
}
