//! Human-readable datasheet rendering.
//!
//! A convenience view over the generated tree; everything here reads the
//! structured fields, so downstream consumers wanting other formats can
//! ignore this module entirely.

use planetary::{Breathability, Planet};

use crate::GeneratedSystem;

fn to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}

fn to_fahrenheit(kelvin: f64) -> f64 {
    kelvin * (9.0 / 5.0) - 459.67
}

fn breathability_label(planet: &Planet) -> &'static str {
    match planet.breathability() {
        Breathability::None => "None",
        Breathability::Breathable => "Breathable",
        Breathability::Unbreathable => "Unbreathable",
        Breathability::Poisonous => "Poisonous",
    }
}

/// Render the full system: primary, moon tally, then one block per planet
/// with its moons indented beneath it.
pub fn system_datasheet(system: &GeneratedSystem) -> String {
    let mut out = String::new();
    out.push_str(&format!("Primary: {}\n", system.primary));
    out.push_str(&format!("Captured Moons: {}\n\n", system.moon_count()));
    for (number, planet) in system.planets.iter().enumerate() {
        out.push_str(&format!("  Planet {:02}: ", number + 1));
        out.push_str(&planet_datasheet(planet, ""));
        for moon in &planet.moons {
            out.push_str(&planet_datasheet(moon, "    "));
        }
    }
    out
}

/// Render one body. Moons get the indent of their parent block and their
/// orbit printed in kilometers around the parent.
pub fn planet_datasheet(planet: &Planet, indent: &str) -> String {
    let mut out = String::new();

    if planet.is_moon {
        out.push_str(&format!("\n{}Moon: {}", indent, planet.kind));
    } else {
        out.push_str(&format!("{}{}", indent, planet.kind));
    }
    if !planet.gas_giant {
        if planet.habitable {
            if planet.earthlike {
                out.push_str(" (earthlike)");
            } else {
                out.push_str(" (habitable)");
            }
        } else {
            out.push_str(&format!(" ({})", breathability_label(planet)));
        }
    }
    if planet.resonant_period {
        out.push_str(" - tidally locked or resonant period.");
    }
    out.push('\n');

    out.push_str(&format!("{}  Mass: ", indent));
    if planet.gas_giant {
        out.push_str(&format!("{:.2} jm, ", planet.mass.to_jupiter_masses()));
    }
    out.push_str(&format!(
        "{:.2} em, {:.3e} kg, density - {:.2} g/cc, radius - {:.2} km\n",
        planet.mass.to_earth_masses(),
        planet.mass.to_kg(),
        planet.density,
        planet.radius.to_km()
    ));

    if planet.is_moon {
        out.push_str(&format!(
            "{}  Orbit: SMA - {:.3e} km, eccentricity - {:.3}, apoapsis: {:.3e} km, periapsis: {:.3e} km\n",
            indent,
            planet.moon_sma.to_km(),
            planet.moon_eccentricity,
            planet.moon_apoapsis().to_km(),
            planet.moon_periapsis().to_km()
        ));
    } else {
        out.push_str(&format!(
            "{}  Orbit: SMA - {:.2} AU, eccentricity - {:.3}, apoapsis: {:.4} AU, periapsis: {:.4} AU\n",
            indent,
            planet.semi_major_axis.to_au(),
            planet.eccentricity,
            planet.apoapsis().to_au(),
            planet.periapsis().to_au()
        ));
    }

    out.push_str(&format!(
        "{}  Axial Tilt: {:.2}, Day: {:.2} hours, Year: {:.2} Earth years\n",
        indent,
        planet.axial_tilt,
        planet.day_length.to_hours(),
        planet.orbital_period.to_years()
    ));

    if !planet.gas_giant {
        out.push_str(&format!(
            "{}  Surface: Gravity - {:.2} g, Temperature - {:.2} C ({:.2} F)\n",
            indent,
            planet.surface_gravity,
            to_celsius(planet.surface_temperature),
            to_fahrenheit(planet.surface_temperature)
        ));
        out.push_str(&format!(
            "{}  Water: {:.2}%, Cloud Cover: {:.2}%, Ice Cover: {:.2}%\n",
            indent,
            planet.hydrosphere * 100.0,
            planet.cloud_cover * 100.0,
            planet.ice_cover * 100.0
        ));
        out.push_str(&format!(
            "{}  Min Temperature - {:.2} C, Low Temperature - {:.2} C, High Temperature - {:.2} C, Max Temperature - {:.2} C\n",
            indent,
            to_celsius(planet.min_temperature),
            to_celsius(planet.low_temperature),
            to_celsius(planet.high_temperature),
            to_celsius(planet.max_temperature)
        ));
        out.push_str(&format!(
            "{}  Atmosphere: Pressure - {:.2} bar, Minimum Molecular Weight - {:.3}\n",
            indent,
            planet.surface_pressure / 1000.0,
            planet.minimum_molecular_weight
        ));
    }

    if !planet.atmosphere.is_empty() {
        out.push_str(&format!("{}  Atmospheric Constituents:\n", indent));
        for constituent in &planet.atmosphere {
            out.push_str(&format!(
                "{}    {} ({}) {:.4} bar\n",
                indent,
                constituent.chemical.symbol,
                constituent.chemical.name,
                constituent.partial_pressure / 1000.0
            ));
        }
    }

    out.push('\n');
    out
}
