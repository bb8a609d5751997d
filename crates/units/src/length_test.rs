//! Tests for length conversions

use approx::assert_relative_eq;

use crate::length::{Length, KM_PER_AU};

#[test]
fn au_round_trip() {
    let one_au = Length::from_au(1.0);
    assert_relative_eq!(one_au.to_km(), KM_PER_AU);
    assert_relative_eq!(one_au.to_meters(), KM_PER_AU * 1000.0, max_relative = 1e-12);
}

#[test]
fn km_round_trip() {
    let earth_radius = Length::from_km(6371.0);
    assert_relative_eq!(earth_radius.to_km(), 6371.0, epsilon = 1e-9);
    assert_relative_eq!(earth_radius.to_cm(), 6371.0 * 1e5, epsilon = 1e-4);
}

#[test]
fn meters_round_trip() {
    let length = Length::from_meters(6.371e6);
    assert_relative_eq!(length.to_meters(), 6.371e6, epsilon = 1e-6);
}

#[test]
fn arithmetic_and_ratio() {
    let a = Length::from_au(2.0);
    let b = Length::from_au(0.5);

    assert_relative_eq!((a + b).to_au(), 2.5);
    assert_relative_eq!((a - b).to_au(), 1.5);
    assert_relative_eq!((a * 3.0).to_au(), 6.0);
    assert_relative_eq!((a / 2.0).to_au(), 1.0);
    assert_relative_eq!(b / a, 0.25);
}
