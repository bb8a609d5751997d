use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Mass of the Sun in kilograms
pub const SOLAR_MASS_KG: f64 = 1.989e30;

/// Mass of the Earth in kilograms
pub const EARTH_MASS_KG: f64 = 5.97237e24;

/// Mass of Jupiter in kilograms
pub const JUPITER_MASS_KG: f64 = 1.8982e27;

/// A physical mass quantity using f64 precision.
///
/// `Mass` stores its value in solar masses, the natural base unit for a
/// star-and-planets simulation: stellar masses sit near 1.0 and even the
/// smallest planetesimals stay comfortably inside f64 range.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let star = Mass::from_solar_masses(0.8);
/// let planet = Mass::from_earth_masses(1.0);
///
/// assert!(star.to_earth_masses() > planet.to_earth_masses());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: solar masses

impl Mass {
    /// Creates a zero mass value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in Earth masses.
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value * EARTH_MASS_KG / SOLAR_MASS_KG)
    }

    /// Creates a new `Mass` from a value in Jupiter masses.
    pub fn from_jupiter_masses(value: f64) -> Self {
        Self(value * JUPITER_MASS_KG / SOLAR_MASS_KG)
    }

    /// Creates a new `Mass` from a value in kilograms.
    pub fn from_kg(value: f64) -> Self {
        Self(value / SOLAR_MASS_KG)
    }

    /// Returns the mass in solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    /// Converts the mass to Earth masses.
    pub fn to_earth_masses(&self) -> f64 {
        self.0 * SOLAR_MASS_KG / EARTH_MASS_KG
    }

    /// Converts the mass to Jupiter masses.
    pub fn to_jupiter_masses(&self) -> f64 {
        self.0 * SOLAR_MASS_KG / JUPITER_MASS_KG
    }

    /// Converts the mass to kilograms.
    pub fn to_kg(&self) -> f64 {
        self.0 * SOLAR_MASS_KG
    }

    /// Converts the mass to grams.
    pub fn to_grams(&self) -> f64 {
        self.to_kg() * 1000.0
    }

    /// Raise the solar-mass value to an integer power
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }

    /// Raise the solar-mass value to a real power
    pub fn powf(&self, n: f64) -> f64 {
        self.0.powf(n)
    }

    /// Square root of the solar-mass value
    pub fn sqrt(&self) -> f64 {
        self.0.sqrt()
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

/// Division of Mass by Mass returns a dimensionless ratio
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Mass (commutative multiplication)
impl Mul<Mass> for f64 {
    type Output = Mass;

    fn mul(self, rhs: Mass) -> Mass {
        rhs * self
    }
}
