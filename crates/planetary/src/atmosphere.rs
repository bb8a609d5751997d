//! Atmosphere synthesis and breathability assessment.

use serde::Serialize;

use chemistry::{AtmosphericConstituent, Chemical, MMHG_TO_MILLIBARS};
use stellar::Star;

use crate::planet::Planet;

/// Verdict on an atmosphere against Dole's inspired-partial-pressure
/// figures ("Habitable Planets for Man", pp. 15–18).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Breathability {
    /// No atmosphere at all
    None,
    /// Oxygen inside the physiological window, nothing toxic
    Breathable,
    /// Nothing toxic, but oxygen out of range
    Unbreathable,
    /// At least one constituent above its safe partial pressure
    Poisonous,
}

/// Lowest inspired oxygen partial pressure a human tolerates, millibars
const MIN_O2_IPP: f64 = 72.0 * MMHG_TO_MILLIBARS;

/// Highest inspired oxygen partial pressure a human tolerates, millibars
const MAX_O2_IPP: f64 = 400.0 * MMHG_TO_MILLIBARS;

/// Vapor pressure of water in the nasal passage, millibars (Dole p. 15)
const H2O_ASSUMED_PRESSURE: f64 = 47.0 * MMHG_TO_MILLIBARS;

impl Planet {
    /// Populate the atmosphere list from the chemical reference table.
    ///
    /// A species survives if it neither condenses above the planet's
    /// nighttime temperature nor falls below the minimum retained weight.
    /// Survivors are weighted by cosmic abundance, a velocity-retention
    /// factor, and a species-specific reactivity adjustment, then
    /// normalized so partial pressures sum to the surface pressure.
    pub fn synthesize_atmosphere(&mut self, primary: &Star, table: &[Chemical]) {
        self.atmosphere.clear();
        if self.surface_pressure <= 0.0 {
            return;
        }

        let pressure_bars = self.surface_pressure / 1000.0;
        let age = primary.age.to_years();
        let mut amounts = vec![0.0; table.len()];
        let mut total_amount = 0.0;

        for (i, chem) in table.iter().enumerate() {
            // Condensation temperature at the local pressure
            let yp = chem.boiling_point
                / (373.0 * (((pressure_bars + 0.001).ln() / -5050.5) + (1.0 / 373.0)));

            let survives = yp >= 0.0
                && yp < self.low_temperature
                && chem.weight >= self.minimum_molecular_weight;
            if !survives {
                continue;
            }

            let vrms = self.rms_velocity(chem.weight);
            let pvrms = (1.0 / (1.0 + vrms / self.escape_velocity)).powf(age / 1.0e9);
            let mut abundance = chem.abundance_s;

            let react = match chem.code {
                // Argon accumulates from potassium decay over the star's life
                18 => 0.15 * age / 4.0e9,
                2 => {
                    abundance *= 0.001 + self.gas_mass / self.mass;
                    let pres2 = 0.75 + pressure_bars;
                    (1.0 / (1.0 + chem.reactivity)).powf(age / 2.0e9 * pres2)
                }
                // Free oxygen persists only on mature, temperate worlds
                8 | 912
                    if age > 2.0e9
                        && self.surface_temperature > 270.0
                        && self.surface_temperature < 400.0 =>
                {
                    let pres2 = 0.89 + pressure_bars / 4.0;
                    (1.0 / (1.0 + chem.reactivity)).powf((age / 2.0e9).powf(0.25) * pres2)
                }
                902 if age > 2.0e9
                    && self.surface_temperature > 270.0
                    && self.surface_temperature < 400.0 =>
                {
                    let pres2 = 0.75 + pressure_bars;
                    1.5 * (1.0 / (1.0 + chem.reactivity)).powf((age / 2.0e9).powf(0.5) * pres2)
                }
                _ => {
                    let pres2 = 0.75 + pressure_bars;
                    (1.0 / (1.0 + chem.reactivity)).powf(age / 2.0e9 * pres2)
                }
            };

            let fraction = 1.0 - self.minimum_molecular_weight / chem.weight;
            amounts[i] = abundance * pvrms * react * fraction;
            total_amount += amounts[i];
        }

        if total_amount > 0.0 {
            for (i, chem) in table.iter().enumerate() {
                if amounts[i] > 0.0 {
                    self.atmosphere.push(AtmosphericConstituent {
                        chemical: *chem,
                        partial_pressure: self.surface_pressure * amounts[i] / total_amount,
                    });
                }
            }
        }
    }

    /// Inspired partial pressure of one gas, accounting for airway
    /// humidification (Dole p. 14).
    pub fn inspired_partial_pressure(&self, gas_pressure: f64) -> f64 {
        let fraction = gas_pressure / self.surface_pressure;
        (self.surface_pressure - H2O_ASSUMED_PRESSURE) * fraction
    }

    /// Assess the atmosphere: any constituent over its safe inspired
    /// partial pressure is poisonous; otherwise breathability hinges on
    /// oxygen sitting in the physiological window.
    pub fn breathability(&self) -> Breathability {
        if self.atmosphere.is_empty() {
            return Breathability::None;
        }

        let mut oxygen_ok = false;
        for constituent in &self.atmosphere {
            let ipp = self.inspired_partial_pressure(constituent.partial_pressure);
            if ipp > constituent.chemical.max_inspired_pressure {
                return Breathability::Poisonous;
            }
            if constituent.chemical.code == 8 {
                oxygen_ok = (MIN_O2_IPP..=MAX_O2_IPP).contains(&ipp);
            }
        }

        if oxygen_ok {
            Breathability::Breathable
        } else {
            Breathability::Unbreathable
        }
    }
}
