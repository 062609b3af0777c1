use approx::assert_relative_eq;

use crate::{orbit_radii, orbit_radius};

#[test]
fn test_first_orbit_is_minimum() {
    for count in 1..=10 {
        assert_relative_eq!(orbit_radius(0, count, 0.2, 50.0), 0.2, epsilon = 1e-12);
    }
}

#[test]
fn test_five_orbits_match_closed_form() {
    let radii = orbit_radii(5, 0.2, 50.0);
    let ratio = (50.0_f64 / 0.2).powf(1.0 / 5.0);

    assert_eq!(radii.len(), 5);
    for (i, radius) in radii.iter().enumerate() {
        assert_relative_eq!(*radius, 0.2 * ratio.powi(i as i32), max_relative = 1e-12);
    }
}

#[test]
fn test_constant_ratio_between_neighbours() {
    let radii = orbit_radii(8, 0.2, 50.0);
    let first_ratio = radii[1] / radii[0];

    for pair in radii.windows(2) {
        assert_relative_eq!(pair[1] / pair[0], first_ratio, max_relative = 1e-12);
    }
}

#[test]
fn test_orbits_increase_and_stay_below_maximum() {
    let radii = orbit_radii(10, 0.2, 50.0);

    assert!(radii.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(radii.iter().all(|r| *r < 50.0));
}

#[test]
fn test_zero_count_is_empty() {
    assert!(orbit_radii(0, 0.2, 50.0).is_empty());
}
