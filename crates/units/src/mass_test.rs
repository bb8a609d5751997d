//! Tests for mass conversions

use approx::assert_relative_eq;

use crate::mass::Mass;

#[test]
fn solar_mass_round_trip() {
    let mass = Mass::from_solar_masses(0.8);
    assert_relative_eq!(mass.to_solar_masses(), 0.8);
    assert_relative_eq!(mass.to_kg(), 0.8 * 1.989e30);
}

#[test]
fn sun_in_earth_masses() {
    let sun = Mass::from_solar_masses(1.0);
    // ~333,000 Earth masses
    let earth_masses = sun.to_earth_masses();
    assert!(
        (earth_masses - 333_054.0).abs() < 500.0,
        "expected ~333,054 Earth masses, got {}",
        earth_masses
    );
}

#[test]
fn earth_mass_round_trip() {
    let earth = Mass::from_earth_masses(1.0);
    assert_relative_eq!(earth.to_earth_masses(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(earth.to_kg(), 5.97237e24, max_relative = 1e-12);
}

#[test]
fn jupiter_in_earth_masses() {
    let jupiter = Mass::from_jupiter_masses(1.0);
    let earth_masses = jupiter.to_earth_masses();
    assert!(
        (earth_masses - 317.8).abs() < 1.0,
        "Jupiter should be ~317.8 Earth masses, got {}",
        earth_masses
    );
}

#[test]
fn arithmetic_operators() {
    let a = Mass::from_solar_masses(1.0);
    let b = Mass::from_solar_masses(0.25);

    assert_relative_eq!((a + b).to_solar_masses(), 1.25);
    assert_relative_eq!((a - b).to_solar_masses(), 0.75);
    assert_relative_eq!((a * 2.0).to_solar_masses(), 2.0);
    assert_relative_eq!((a / 4.0).to_solar_masses(), 0.25);
    // Mass / Mass is a dimensionless ratio
    assert_relative_eq!(b / a, 0.25);
}

#[test]
fn comparison() {
    assert!(Mass::from_earth_masses(2.0) > Mass::from_earth_masses(1.0));
    assert!(Mass::from_earth_masses(1.0) < Mass::from_jupiter_masses(1.0));
}
