//! Tests for star derivation and deviation

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::star::Star;
use crate::template::{StellarTemplate, TemplateError};

#[test]
fn solar_template_derives_solar_quantities() {
    let star = Star::from_template(&StellarTemplate::solar()).unwrap();
    assert_relative_eq!(star.ecosphere_radius.to_au(), 1.0);
    assert_relative_eq!(star.main_sequence_lifetime.to_years(), 1.0e10);
    assert_relative_eq!(star.stellar_dust_limit().to_au(), 200.0);
    assert_relative_eq!(star.innermost_planet().to_au(), 0.3);
    assert_relative_eq!(star.outermost_planet().to_au(), 50.0);
}

#[test]
fn dim_star_has_closer_ecosphere() {
    let star = Star::from_template(&StellarTemplate::k_dwarf()).unwrap();
    assert_relative_eq!(star.ecosphere_radius.to_au(), 0.16_f64.sqrt());
    assert!(star.ecosphere_radius.to_au() < 0.5);
}

#[test]
fn non_positive_mass_is_rejected() {
    let mut template = StellarTemplate::solar();
    template.mass = 0.0;
    assert_eq!(
        Star::from_template(&template),
        Err(TemplateError::NonPositive {
            name: "mass",
            value: 0.0
        })
    );
}

#[test]
fn non_positive_luminosity_is_rejected() {
    let mut template = StellarTemplate::solar();
    template.luminosity = -1.0;
    assert!(Star::from_template(&template).is_err());
}

#[test]
fn deviation_stays_within_ten_percent() {
    let base = Star::from_template(&StellarTemplate::solar()).unwrap();
    let mut rng = ChaChaRng::seed_from_u64(42);
    for _ in 0..100 {
        let deviated = base.deviate(&mut rng);
        let mass = deviated.mass.to_solar_masses();
        assert!((1.0..=1.1).contains(&mass), "mass out of range: {}", mass);
        // derived quantities track the deviated values
        assert_relative_eq!(
            deviated.ecosphere_radius.to_au(),
            deviated.luminosity.sqrt()
        );
    }
}

#[test]
fn age_respects_lifetime_and_cap() {
    let mut rng = ChaChaRng::seed_from_u64(7);

    // Long-lived star: capped at 6 Gyr
    let mut sun = Star::from_template(&StellarTemplate::solar()).unwrap();
    for _ in 0..50 {
        sun.assign_age(&mut rng);
        let age = sun.age.to_years();
        assert!((1.0e9..=6.0e9).contains(&age), "age out of range: {}", age);
    }

    // Short-lived star: bounded by its own lifetime
    let mut template = StellarTemplate::solar();
    template.mass = 1.4;
    template.luminosity = 4.0;
    let mut bright = Star::from_template(&template).unwrap();
    let lifetime = bright.main_sequence_lifetime.to_years();
    assert!(lifetime < 6.0e9);
    for _ in 0..50 {
        bright.assign_age(&mut rng);
        assert!(bright.age.to_years() <= lifetime);
    }
}
