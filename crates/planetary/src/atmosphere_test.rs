//! Tests for atmosphere synthesis and breathability

use units::{Length, Mass, Time};

use chemistry::{by_symbol, chemicals, AtmosphericConstituent, MMHG_TO_MILLIBARS};

use crate::atmosphere::Breathability;
use crate::planet::Planet;
use stellar::{Star, StellarTemplate};

fn sun() -> Star {
    let mut star = Star::from_template(&StellarTemplate::solar()).unwrap();
    star.age = Time::from_years(4.6e9);
    star
}

/// A temperate rocky body ready for gas synthesis.
fn temperate_rock() -> Planet {
    let mut planet = Planet::new(Length::from_au(1.0), 0.0167, Mass::from_earth_masses(1.0));
    planet.orbital_zone = 1;
    planet.radius = Length::from_km(6371.0);
    planet.exospheric_temperature = 1273.0;
    planet.escape_velocity = planet.escape_velocity();
    planet.minimum_molecular_weight = 5.2;
    planet.surface_pressure = 1000.0;
    planet.surface_temperature = 288.0;
    planet.low_temperature = 278.0;
    planet.dust_mass = Mass::from_earth_masses(0.999);
    planet.gas_mass = Mass::from_earth_masses(0.001);
    planet
}

#[test]
fn synthesis_normalizes_to_surface_pressure() {
    let star = sun();
    let mut planet = temperate_rock();
    planet.synthesize_atmosphere(&star, chemicals());

    assert!(!planet.atmosphere.is_empty());
    let total: f64 = planet
        .atmosphere
        .iter()
        .map(|constituent| constituent.partial_pressure)
        .sum();
    assert!(
        (total - planet.surface_pressure).abs() < 1e-6,
        "partial pressures sum to {}, expected {}",
        total,
        planet.surface_pressure
    );
    for constituent in &planet.atmosphere {
        assert!(constituent.partial_pressure > 0.0);
    }
}

#[test]
fn condensing_and_light_species_are_excluded() {
    let star = sun();
    let mut planet = temperate_rock();
    planet.synthesize_atmosphere(&star, chemicals());

    for constituent in &planet.atmosphere {
        // Nothing below the minimum retained weight
        assert!(constituent.chemical.weight >= planet.minimum_molecular_weight);
    }
    // Hydrogen (weight ~1) cannot be retained at weight floor 5.2
    assert!(planet
        .atmosphere
        .iter()
        .all(|constituent| constituent.chemical.symbol != "H"));
}

#[test]
fn no_pressure_means_no_atmosphere() {
    let star = sun();
    let mut planet = temperate_rock();
    planet.surface_pressure = 0.0;
    planet.synthesize_atmosphere(&star, chemicals());
    assert!(planet.atmosphere.is_empty());
    assert_eq!(planet.breathability(), Breathability::None);
}

#[test]
fn oxygen_window_is_breathable() {
    let mut planet = temperate_rock();
    planet.surface_pressure = 1013.25;
    planet.atmosphere = vec![
        AtmosphericConstituent {
            chemical: *by_symbol("N").unwrap(),
            partial_pressure: 792.0,
        },
        AtmosphericConstituent {
            chemical: *by_symbol("O").unwrap(),
            partial_pressure: 213.0,
        },
    ];
    assert_eq!(planet.breathability(), Breathability::Breathable);
}

#[test]
fn missing_oxygen_is_unbreathable() {
    let mut planet = temperate_rock();
    planet.surface_pressure = 1013.25;
    planet.atmosphere = vec![AtmosphericConstituent {
        chemical: *by_symbol("N").unwrap(),
        partial_pressure: 1013.25,
    }];
    assert_eq!(planet.breathability(), Breathability::Unbreathable);
}

#[test]
fn excess_carbon_dioxide_is_poisonous() {
    let mut planet = temperate_rock();
    planet.surface_pressure = 1013.25;
    planet.atmosphere = vec![
        AtmosphericConstituent {
            chemical: *by_symbol("O").unwrap(),
            partial_pressure: 213.0,
        },
        AtmosphericConstituent {
            chemical: *by_symbol("CO2").unwrap(),
            // Far above Dole's 7 mmHg ceiling
            partial_pressure: 100.0,
        },
    ];
    assert_eq!(planet.breathability(), Breathability::Poisonous);
}

#[test]
fn oxygen_outside_window_by_pressure() {
    let mut planet = temperate_rock();
    // Thin martian-like air: oxygen present but under the 72 mmHg floor
    planet.surface_pressure = 100.0;
    planet.atmosphere = vec![AtmosphericConstituent {
        chemical: *by_symbol("O").unwrap(),
        partial_pressure: 21.0,
    }];
    let ipp = planet.inspired_partial_pressure(21.0);
    assert!(ipp < 72.0 * MMHG_TO_MILLIBARS);
    assert_eq!(planet.breathability(), Breathability::Unbreathable);
}
