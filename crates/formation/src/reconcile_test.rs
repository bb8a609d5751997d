//! Tests for post-accretion reconciliation

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use units::{Length, Mass, Time};

use crate::engine::Accretor;
use planetary::Planet;
use stellar::{Star, StellarTemplate};

fn sun() -> Star {
    let mut star = Star::from_template(&StellarTemplate::solar()).unwrap();
    star.age = Time::from_years(4.6e9);
    star
}

fn planet_at(sma: f64, eccentricity: f64, mass_solar: f64) -> Planet {
    let mut planet = Planet::new(
        Length::from_au(sma),
        eccentricity,
        Mass::from_solar_masses(mass_solar),
    );
    planet.dust_mass = planet.mass;
    planet
}

#[test]
fn failed_planetesimals_are_reinjected() {
    let star = sun();
    let mut rng = ChaChaRng::seed_from_u64(42);
    let mut accretor = Accretor::new(&star, true);
    accretor.failed_planetesimals.push(planet_at(9.0, 0.05, 1.0e-9));

    accretor.reconcile(&mut rng);

    assert!(accretor.failed_planetesimals.is_empty());
    // Nothing to interact with, so the leftover becomes a planet
    assert_eq!(accretor.planets.len(), 1);
    assert_eq!(accretor.planets[0].semi_major_axis.to_au(), 9.0);
}

#[test]
fn escaped_moons_get_wider_orbits_then_reinject() {
    let star = sun();
    let mut rng = ChaChaRng::seed_from_u64(42);
    let mut accretor = Accretor::new(&star, true);
    accretor.escaped_moons.push(planet_at(4.0, 0.05, 9.0e-6));

    accretor.reconcile(&mut rng);

    assert!(accretor.escaped_moons.is_empty());
    assert_eq!(accretor.planets.len(), 1);
    let planet = &accretor.planets[0];
    // The bump widened the orbit but stayed under the parabolic limit
    assert!(planet.eccentricity > 0.05);
    assert!(planet.eccentricity < 1.0);
}

#[test]
fn heaviest_moon_takes_over_an_undersized_planet() {
    let star = sun();
    let mut rng = ChaChaRng::seed_from_u64(42);
    let mut accretor = Accretor::new(&star, true);

    let mut planet = planet_at(1.0, 0.02, 1.0e-6);
    let mut small_moon = planet_at(1.0, 0.0, 2.0e-7);
    small_moon.is_moon = true;
    let mut big_moon = planet_at(1.1, 0.01, 5.0e-6);
    big_moon.is_moon = true;
    planet.moons.push(small_moon);
    planet.moons.push(big_moon);
    accretor.planets.push(planet);

    accretor.reconcile(&mut rng);

    assert_eq!(accretor.planets.len(), 1);
    let promoted = &accretor.planets[0];
    // The heavy moon is now the planet, carrying the rest as its moons
    assert_eq!(promoted.mass.to_solar_masses(), 5.0e-6);
    assert!(!promoted.is_moon);
    assert_eq!(promoted.moons.len(), 2);
    for moon in &promoted.moons {
        assert!(moon.is_moon);
        assert!(moon.mass < promoted.mass);
    }
}

#[test]
fn balanced_planets_are_left_alone() {
    let star = sun();
    let mut rng = ChaChaRng::seed_from_u64(42);
    let mut accretor = Accretor::new(&star, true);

    let mut planet = planet_at(1.0, 0.02, 5.0e-6);
    let mut moon = planet_at(1.0, 0.0, 2.0e-7);
    moon.is_moon = true;
    planet.moons.push(moon);
    accretor.planets.push(planet);

    accretor.reconcile(&mut rng);

    let kept = &accretor.planets[0];
    assert_eq!(kept.mass.to_solar_masses(), 5.0e-6);
    assert_eq!(kept.moons.len(), 1);
}

#[test]
fn reconciled_list_is_sorted_and_marked() {
    let star = sun();
    let mut rng = ChaChaRng::seed_from_u64(42);
    let mut accretor = Accretor::new(&star, true);
    accretor.planets.push(planet_at(5.0, 0.0, 3.0e-6));
    accretor.planets.push(planet_at(0.7, 0.0, 3.0e-6));
    accretor.failed_planetesimals.push(planet_at(20.0, 0.1, 1.0e-10));

    accretor.reconcile(&mut rng);

    for pair in accretor.planets.windows(2) {
        assert!(pair[0].semi_major_axis <= pair[1].semi_major_axis);
    }
    for planet in &accretor.planets {
        assert!(!planet.is_moon);
    }
}
