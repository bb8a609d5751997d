//! Tests for time conversions

use approx::assert_relative_eq;

use crate::time::Time;

#[test]
fn year_round_trip() {
    let year = Time::from_years(1.0);
    assert_relative_eq!(year.to_seconds(), 31_557_600.0);
    assert_relative_eq!(year.to_hours(), 8766.0);
}

#[test]
fn seconds_round_trip() {
    let day = Time::from_seconds(86_400.0);
    assert_relative_eq!(day.to_hours(), 24.0, epsilon = 1e-9);
}

#[test]
fn hours_round_trip() {
    let rotation = Time::from_hours(23.93);
    assert_relative_eq!(rotation.to_hours(), 23.93, epsilon = 1e-9);
}

#[test]
fn arithmetic() {
    let a = Time::from_years(4.0e9);
    let b = Time::from_years(1.0e9);
    assert_relative_eq!((a + b).to_years(), 5.0e9);
    assert_relative_eq!((a - b).to_years(), 3.0e9);
    assert!(a > b);
}
