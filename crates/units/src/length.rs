use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Kilometers per astronomical unit
pub const KM_PER_AU: f64 = 149_597_870.7;

/// Meters per astronomical unit
pub const M_PER_AU: f64 = 149_597_870_700.0;

/// Centimeters per kilometer
pub const CM_PER_KM: f64 = 100_000.0;

/// A physical length quantity using f64 precision.
///
/// `Length` stores its value in astronomical units. Orbital distances read
/// directly in AU while planetary radii (a few times 1e-5 AU) remain well
/// within f64 precision.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value / KM_PER_AU)
    }

    /// Creates a new `Length` from a value in meters.
    pub fn from_meters(value: f64) -> Self {
        Self(value / M_PER_AU)
    }

    /// Returns the length in astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0
    }

    /// Converts the length to kilometers.
    pub fn to_km(&self) -> f64 {
        self.0 * KM_PER_AU
    }

    /// Converts the length to meters.
    pub fn to_meters(&self) -> f64 {
        self.0 * M_PER_AU
    }

    /// Converts the length to centimeters.
    pub fn to_cm(&self) -> f64 {
        self.to_km() * CM_PER_KM
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Length) -> f64 {
        self.0 / rhs.0
    }
}
