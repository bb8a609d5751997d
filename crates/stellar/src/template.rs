//! Stellar template records and weighted catalog selection.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A raw stellar catalog record.
///
/// Values are relative to the Sun except temperature (Kelvin) and absolute
/// magnitude. The catalog loader that produces these lives outside the
/// generator; see the crate docs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarTemplate {
    /// Stellar mass in solar masses (M☉)
    pub mass: f64,
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
}

impl StellarTemplate {
    /// A Sun-equivalent template, handy for tests and examples.
    pub fn solar() -> Self {
        Self {
            mass: 1.0,
            luminosity: 1.0,
            radius: 1.0,
            temperature: 5772.0,
            absolute_magnitude: 4.83,
            spectral_type: "G2V".to_string(),
            color: [255, 244, 234],
        }
    }

    /// A mid-K dwarf, the workhorse host star of the generator.
    pub fn k_dwarf() -> Self {
        Self {
            mass: 0.70,
            luminosity: 0.16,
            radius: 0.70,
            temperature: 4550.0,
            absolute_magnitude: 6.9,
            spectral_type: "K4V".to_string(),
            color: [255, 210, 161],
        }
    }

    /// Rejects non-physical records before they reach the simulation.
    pub fn validate(&self) -> Result<(), TemplateError> {
        for (name, value) in [
            ("mass", self.mass),
            ("luminosity", self.luminosity),
            ("radius", self.radius),
            ("temperature", self.temperature),
        ] {
            if value <= 0.0 {
                return Err(TemplateError::NonPositive { name, value });
            }
        }
        Ok(())
    }
}

/// Template construction errors. Reference-data problems are fatal at
/// process start, so callers usually just propagate these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TemplateError {
    #[error("invalid stellar {name}: {value} (must be positive)")]
    NonPositive { name: &'static str, value: f64 },
}

/// Template lists grouped by spectral class, with a frequency-weighted
/// random pick across them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateCatalog {
    pub m_dwarfs: Vec<StellarTemplate>,
    pub k_dwarfs: Vec<StellarTemplate>,
    pub g_dwarfs: Vec<StellarTemplate>,
    pub f_dwarfs: Vec<StellarTemplate>,
    pub a_stars: Vec<StellarTemplate>,
    pub b_stars: Vec<StellarTemplate>,
    pub o_stars: Vec<StellarTemplate>,
    pub wolf_rayet: Vec<StellarTemplate>,
    pub carbon_stars: Vec<StellarTemplate>,
    pub s_stars: Vec<StellarTemplate>,
    pub white_dwarfs: Vec<StellarTemplate>,
    pub giants: Vec<StellarTemplate>,
}

impl TemplateCatalog {
    /// Pick a template with realistic spectral-class frequencies: ~91%
    /// main sequence (itself dominated by M and K dwarfs), ~6% white
    /// dwarfs, ~3% giants, and a tail of rare types.
    ///
    /// Returns `None` when the rolled class has no templates loaded.
    pub fn pick<'a>(&'a self, rng: &mut impl Rng) -> Option<&'a StellarTemplate> {
        let roll: f64 = rng.random();
        if roll <= 0.907 {
            let roll: f64 = rng.random();
            if roll <= 0.751 {
                pick_from(&self.m_dwarfs, rng)
            } else if roll <= 0.887 {
                pick_from(&self.k_dwarfs, rng)
            } else if roll <= 0.960 {
                pick_from(&self.g_dwarfs, rng)
            } else if roll <= 0.991 {
                pick_from(&self.f_dwarfs, rng)
            } else {
                pick_from(&self.a_stars, rng)
            }
        } else if roll <= 0.969 {
            pick_from(&self.white_dwarfs, rng)
        } else if roll <= 0.998 {
            pick_from(&self.giants, rng)
        } else {
            let roll: f64 = rng.random();
            if roll <= 0.785 {
                pick_from(&self.b_stars, rng)
            } else if roll <= 0.999 {
                pick_from(&self.o_stars, rng)
            } else {
                let roll: f64 = rng.random();
                if roll <= 0.997 {
                    pick_from(&self.o_stars, rng)
                } else if roll <= 0.998 {
                    pick_from(&self.wolf_rayet, rng)
                } else if roll <= 0.999 {
                    pick_from(&self.carbon_stars, rng)
                } else {
                    pick_from(&self.s_stars, rng)
                }
            }
        }
    }
}

fn pick_from<'a>(
    templates: &'a [StellarTemplate],
    rng: &mut impl Rng,
) -> Option<&'a StellarTemplate> {
    if templates.is_empty() {
        return None;
    }
    Some(&templates[rng.random_range(0..templates.len())])
}
