//! Plain-text reports

use planetary::{AtmosphereSubtype, ElementalComposition, Planet, PlanetType};
use star_system::SolarSystem;
use stellar::Star;

pub fn render_star(star: &Star) -> String {
    let zone = &star.habitable_zone;
    [
        format!("Star: {}-type", star.spectral_type),
        format!("  Age:        {:.3} Gyr", star.age),
        format!("  Radius:     {:.3} R☉", star.size),
        format!("  Mass:       {:.3} M☉", star.mass),
        format!("  Luminosity: {:.3} L☉", star.luminosity),
        format!(
            "  Habitable zone: {:.3} .. {:.3} AU",
            zone.inner_boundary, zone.outer_boundary
        ),
    ]
    .join("\n")
}

pub fn render_system(system: &SolarSystem) -> String {
    let mut lines = vec![
        format!("System {} ({})", system.metadata.display_name(), system.metadata.id),
        String::new(),
        render_star(&system.star),
        String::new(),
        format!(
            "Planets: {} ({} moons)",
            system.planets.len(),
            system.total_moons()
        ),
        format!(
            "  {:>2}  {:>9}  {:<12}  {:>6}  {:<12}  {:>5}  {}",
            "#", "Orbit AU", "Type", "Size", "Atmosphere", "Moons", "Designation"
        ),
    ];

    let zone = system.habitable_zone();
    for (index, planet) in system.planets.iter().enumerate() {
        let designation = system.planet_name(index).unwrap_or_default();
        let marker = if planet.in_habitable_zone(zone) { "  [HZ]" } else { "" };
        lines.push(format!(
            "{}{}",
            render_planet_row(index + 1, planet, &designation),
            marker
        ));
    }

    lines.join("\n")
}

fn render_planet_row(number: usize, planet: &Planet, designation: &str) -> String {
    format!(
        "  {:>2}  {:>9.3}  {:<12}  {:>6.2}  {:<12}  {:>5}  {}",
        number,
        planet.orbit_radius,
        planet.planet_type.name(),
        planet.size,
        planet.atmosphere.key(),
        planet.moons,
        designation
    )
}

/// Gas table for one atmosphere sub-type, most abundant first
pub fn render_composition(subtype: AtmosphereSubtype) -> String {
    let composition = subtype.base_composition();
    let mut gases: Vec<(&str, f64)> = composition.iter().collect();
    gases.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut lines = vec![format!("{} ({})", subtype.key(), subtype.category())];
    lines.extend(
        gases
            .into_iter()
            .map(|(gas, percent)| format!("  {:<5} {:>8}%", gas, percent)),
    );
    lines.join("\n")
}

/// Element table and mean density for a planet type
pub fn render_elements(planet_type: PlanetType) -> String {
    let composition = ElementalComposition::for_planet_type(planet_type);
    let mut lines = vec![format!("{} bulk composition", planet_type)];
    lines.extend(
        composition
            .iter()
            .map(|(element, percent)| format!("  {:<10} {:>6}%", element.name(), percent)),
    );
    lines.push(format!(
        "  mean density {:.2} g/cm³",
        composition.mean_density()
    ));
    lines.join("\n")
}
