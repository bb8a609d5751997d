//! The working star model derived from a template.

use rand::Rng;
use serde::Serialize;
use units::{Length, Mass, Time};

use crate::sampling;
use crate::template::{StellarTemplate, TemplateError};

/// Fractional amount by which an individual star varies from its template.
const STELLAR_DEVIATION: f64 = 0.05;

/// Youngest age assigned to a generated star, in years.
const MIN_RANDOM_AGE: f64 = 1.0e9;

/// Oldest age assigned to a generated star, in years. Older hosts exist but
/// the formation model is not calibrated past this.
const MAX_RANDOM_AGE: f64 = 6.0e9;

/// A star ready to host a generation run.
///
/// Holds the template quantities plus the derived values the simulation
/// needs: the ecosphere radius (√L AU, the habitable-zone center), the
/// main-sequence lifetime, and a concrete age. Build one with
/// [`Star::from_template`], then [`deviate`](Star::deviate) and
/// [`assign_age`](Star::assign_age) to get a perturbed working instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub mass: Mass,
    /// Luminosity in solar luminosities (L☉)
    pub luminosity: f64,
    /// Radius in solar radii (R☉)
    pub radius: f64,
    /// Effective temperature in Kelvin
    pub temperature: f64,
    /// Absolute visual magnitude
    pub absolute_magnitude: f64,
    /// Spectral tag, e.g. "K2V"
    pub spectral_type: String,
    /// Display color as RGB
    pub color: [u8; 3],
    /// Habitable-zone center distance
    pub ecosphere_radius: Length,
    pub main_sequence_lifetime: Time,
    pub age: Time,
}

impl Star {
    /// Validates the template and derives the working quantities. The age
    /// starts at zero; call [`assign_age`](Star::assign_age) before
    /// generating.
    pub fn from_template(template: &StellarTemplate) -> Result<Self, TemplateError> {
        template.validate()?;
        let mut star = Star {
            mass: Mass::from_solar_masses(template.mass),
            luminosity: template.luminosity,
            radius: template.radius,
            temperature: template.temperature,
            absolute_magnitude: template.absolute_magnitude,
            spectral_type: template.spectral_type.clone(),
            color: template.color,
            ecosphere_radius: Length::zero(),
            main_sequence_lifetime: Time::zero(),
            age: Time::zero(),
        };
        star.recalc();
        Ok(star)
    }

    fn recalc(&mut self) {
        self.ecosphere_radius = Length::from_au(self.luminosity.sqrt());
        self.main_sequence_lifetime =
            Time::from_years(1.0e10 * self.mass.to_solar_masses() / self.luminosity);
    }

    /// A copy of this star scaled by a random deviation, so two systems
    /// seeded from the same template still differ.
    pub fn deviate(&self, rng: &mut impl Rng) -> Star {
        let v = sampling::about(rng, STELLAR_DEVIATION, 1.0);
        let mut star = self.clone();
        star.mass = star.mass * (1.0 + v);
        star.luminosity += star.luminosity * v;
        star.radius += star.radius * v;
        star.temperature += star.temperature * v;
        star.recalc();
        star
    }

    /// Draw a random age: uniform between 1 Gyr and the lesser of the
    /// main-sequence lifetime and 6 Gyr.
    pub fn assign_age(&mut self, rng: &mut impl Rng) {
        let lifetime = self.main_sequence_lifetime.to_years();
        let age = if lifetime < MAX_RANDOM_AGE {
            sampling::uniform(rng, MIN_RANDOM_AGE, lifetime)
        } else {
            sampling::uniform(rng, MIN_RANDOM_AGE, MAX_RANDOM_AGE)
        };
        self.age = Time::from_years(age);
    }

    /// Outer edge of the dust disk this star can hold.
    pub fn stellar_dust_limit(&self) -> Length {
        Length::from_au(200.0 * self.mass.powf(1.0 / 3.0))
    }

    /// Innermost stable planet orbit.
    pub fn innermost_planet(&self) -> Length {
        Length::from_au(0.3 * self.mass.powf(1.0 / 3.0))
    }

    /// Outermost orbit at which planets condense.
    pub fn outermost_planet(&self) -> Length {
        Length::from_au(50.0 * self.mass.powf(1.0 / 3.0))
    }
}

impl std::fmt::Display for Star {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:.2} M☉, {:.2} L☉, {:.0} K)",
            self.spectral_type,
            self.mass.to_solar_masses(),
            self.luminosity,
            self.temperature
        )
    }
}
