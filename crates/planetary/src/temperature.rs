//! Surface-temperature model: effective temperature, greenhouse rise,
//! albedo blending, the damped fixed-point climate iteration, and the
//! soft-limited day/night/seasonal temperature range.
//!
//! The iteration's state is (hydrosphere, cloud, ice, albedo, surface
//! temperature). Each step recomputes the coverages from the current
//! temperature, rebuilds the albedo, rederives the temperature, and blends
//! two-thirds toward the previous state; physical damping makes the fixed
//! point converge well inside the step cap.

use stellar::Star;
use units::Length;

use crate::constants::*;
use crate::planet::Planet;

/// Soft limiter: odd, monotonic, asymptotic to ±1.
pub fn lim(x: f64) -> f64 {
    x / (1.0 + x * x * x * x).sqrt().sqrt()
}

/// Map `v` into `(min, max)` with soft saturation at both ends.
pub fn soft(v: f64, max: f64, min: f64) -> f64 {
    let dv = v - min;
    let dm = max - min;
    (lim(2.0 * dv / dm - 1.0) + 1.0) / 2.0 * dm + min
}

impl Planet {
    /// Effective (radiative-balance) temperature in Kelvin for a given
    /// albedo (Fogg's eq. 19).
    pub fn effective_temperature(&self, ecosphere_radius: Length, albedo: f64) -> f64 {
        const EARTH_EFFECTIVE_TEMP: f64 = 250.0;
        (ecosphere_radius / self.semi_major_axis).sqrt()
            * ((1.0 - albedo) / (1.0 - EARTH_ALBEDO)).powf(0.25)
            * EARTH_EFFECTIVE_TEMP
    }

    /// Quick surface-temperature estimate from the current albedo.
    pub fn estimated_temperature(&self, ecosphere_radius: Length) -> f64 {
        (ecosphere_radius / self.semi_major_axis).sqrt()
            * ((1.0 - self.albedo) / (1.0 - EARTH_ALBEDO)).powf(0.25)
            * EARTH_AVERAGE_KELVIN
    }

    /// Temperature estimate for an Earth-like body at this orbit,
    /// independent of the actual albedo.
    pub fn estimated_terrestrial_temperature(&self, ecosphere_radius: Length) -> f64 {
        (ecosphere_radius / self.semi_major_axis).sqrt() * EARTH_AVERAGE_KELVIN
    }

    /// Whether a runaway greenhouse develops: true when water never
    /// condenses out of the atmosphere at the trigger albedo.
    pub fn has_greenhouse(&self, ecosphere_radius: Length) -> bool {
        self.effective_temperature(ecosphere_radius, GREENHOUSE_TRIGGER_ALBEDO)
            > FREEZING_POINT_OF_WATER
    }

    /// Greenhouse temperature rise in Kelvin (Fogg's eq. 20 / Hart's
    /// eq. 20, with the 0.4 pressure exponent tuned against Venus).
    pub fn greenhouse_rise(&self, effective_temperature: f64) -> f64 {
        const EARTH_CONVECTION_FACTOR: f64 = 0.43;
        let convection_factor = EARTH_CONVECTION_FACTOR
            * (self.surface_pressure / EARTH_SURF_PRES_IN_MILLIBARS).powf(0.4);
        let rise = ((1.0 + 0.75 * self.optical_depth()).powf(0.25) - 1.0)
            * effective_temperature
            * convection_factor;
        rise.max(0.0)
    }

    /// Dimensionless optical depth of the atmosphere: a step function of
    /// the minimum retained molecular weight, scaled up in bands of
    /// surface pressure.
    pub fn optical_depth(&self) -> f64 {
        let mut optical_depth = 0.0;
        let weight = self.minimum_molecular_weight;
        if (0.0..10.0).contains(&weight) {
            optical_depth += 3.0;
        }
        if (10.0..20.0).contains(&weight) {
            optical_depth += 2.34;
        }
        if (20.0..30.0).contains(&weight) {
            optical_depth += 1.0;
        }
        if (30.0..45.0).contains(&weight) {
            optical_depth += 0.15;
        }
        if (45.0..100.0).contains(&weight) {
            optical_depth += 0.05;
        }

        if self.surface_pressure >= 70.0 * EARTH_SURF_PRES_IN_MILLIBARS {
            optical_depth * 8.333
        } else if self.surface_pressure >= 50.0 * EARTH_SURF_PRES_IN_MILLIBARS {
            optical_depth * 6.666
        } else if self.surface_pressure >= 30.0 * EARTH_SURF_PRES_IN_MILLIBARS {
            optical_depth * 3.333
        } else if self.surface_pressure >= 10.0 * EARTH_SURF_PRES_IN_MILLIBARS {
            optical_depth * 2.0
        } else if self.surface_pressure >= 5.0 * EARTH_SURF_PRES_IN_MILLIBARS {
            optical_depth * 1.5
        } else {
            optical_depth
        }
    }

    /// Blend cloud, rock, water, and ice albedos by surface share. Cloud
    /// cover obscures an equal slice of each component below it, so the
    /// ground fractions are reduced in place before weighting.
    pub fn planet_albedo(&mut self) -> f64 {
        let mut rock_fraction = 1.0 - self.hydrosphere - self.ice_cover;
        let mut components = 0.0;
        if self.hydrosphere > 0.0 {
            components += 1.0;
        }
        if self.ice_cover > 0.0 {
            components += 1.0;
        }
        if rock_fraction > 0.0 {
            components += 1.0;
        }

        let cloud_adjustment = self.cloud_cover / components;

        if rock_fraction >= cloud_adjustment {
            rock_fraction -= cloud_adjustment;
        } else {
            rock_fraction = 0.0;
        }
        if self.hydrosphere > cloud_adjustment {
            self.hydrosphere -= cloud_adjustment;
        } else {
            self.hydrosphere = 0.0;
        }
        if self.ice_cover > cloud_adjustment {
            self.ice_cover -= cloud_adjustment;
        } else {
            self.ice_cover = 0.0;
        }

        let cloud_part = self.cloud_cover * CLOUD_ALBEDO;
        let (rock_part, water_part, ice_part) = if self.surface_pressure == 0.0 {
            (
                rock_fraction * ROCKY_AIRLESS_ALBEDO,
                0.0,
                self.ice_cover * AIRLESS_ICE_ALBEDO,
            )
        } else {
            (
                rock_fraction * ROCKY_ALBEDO,
                self.hydrosphere * WATER_ALBEDO,
                self.ice_cover * ICE_ALBEDO,
            )
        };

        cloud_part + rock_part + water_part + ice_part
    }

    /// One step of the climate fixed point. The `first` step initializes
    /// from the reference albedo; later steps blend toward the previous
    /// state for damping.
    #[allow(clippy::too_many_arguments)]
    pub fn calculate_surface_temperature(
        &mut self,
        primary: &Star,
        first: bool,
        last_water: f64,
        last_clouds: f64,
        last_ice: f64,
        last_temperature: f64,
        last_albedo: f64,
    ) {
        let ecosphere = primary.ecosphere_radius;
        let mut boil_off = false;

        if first {
            self.albedo = EARTH_ALBEDO;
            let effective = self.effective_temperature(ecosphere, self.albedo);
            let greenhouse = self.greenhouse_rise(effective);
            self.surface_temperature = effective + greenhouse;
            self.set_temperature_range();
        }

        // A greenhouse that no longer boils the oceans shuts down and the
        // volatile budget re-equilibrates.
        if self.greenhouse_effect && self.max_temperature < self.boiling_point {
            self.greenhouse_effect = false;
            self.volatile_gas_inventory = self.volatile_gas_inventory(primary.mass);
            self.surface_pressure = self.pressure();
            self.boiling_point = self.boiling_point();
        }

        self.hydrosphere = self.water_coverage();
        self.cloud_cover = self.cloud_fraction();
        self.ice_cover = self.ice_fraction();

        if self.greenhouse_effect && self.surface_pressure > 0.0 {
            self.cloud_cover = 1.0;
        }

        if self.high_temperature >= self.boiling_point && !first && !self.tidally_locked() {
            self.hydrosphere = 0.0;
            boil_off = true;
            self.cloud_cover = if self.minimum_molecular_weight > WATER_VAPOR {
                0.0
            } else {
                1.0
            };
        }

        if self.surface_temperature < FREEZING_POINT_OF_WATER - 3.0 {
            self.hydrosphere = 0.0;
        }

        self.albedo = self.planet_albedo();
        let effective = self.effective_temperature(ecosphere, self.albedo);
        let greenhouse = self.greenhouse_rise(effective);
        self.surface_temperature = effective + greenhouse;

        if !first {
            if !boil_off {
                self.hydrosphere = (self.hydrosphere + last_water * 2.0) / 3.0;
            }
            self.cloud_cover = (self.cloud_cover + last_clouds * 2.0) / 3.0;
            self.ice_cover = (self.ice_cover + last_ice * 2.0) / 3.0;
            self.albedo = (self.albedo + last_albedo * 2.0) / 3.0;
            self.surface_temperature = (self.surface_temperature + last_temperature * 2.0) / 3.0;
        }

        self.set_temperature_range();
    }

    /// Run the climate fixed point to convergence (|ΔT| < 0.25 K) or the
    /// step cap, whichever comes first; the final state is accepted
    /// unconditionally. Records the total greenhouse rise relative to the
    /// initial estimate.
    pub fn iterate_surface_temperature(&mut self, primary: &Star) {
        let initial_temperature = self.estimated_temperature(primary.ecosphere_radius);

        self.calculate_surface_temperature(primary, true, 0.0, 0.0, 0.0, 0.0, 0.0);

        for _ in 0..=25 {
            let last_water = self.hydrosphere;
            let last_clouds = self.cloud_cover;
            let last_ice = self.ice_cover;
            let last_temperature = self.surface_temperature;
            let last_albedo = self.albedo;

            self.calculate_surface_temperature(
                primary,
                false,
                last_water,
                last_clouds,
                last_ice,
                last_temperature,
                last_albedo,
            );

            if (self.surface_temperature - last_temperature).abs() < 0.25 {
                break;
            }
        }

        self.greenhouse_rise = self.surface_temperature - initial_temperature;
    }

    /// Derive day/night and seasonal temperature extremes from the mean
    /// surface temperature, soft-limited into a plausible envelope.
    pub fn set_temperature_range(&mut self) {
        let day_hours = self.day_length.to_hours();
        let pressmod = 1.0 / (1.0 + 20.0 * self.surface_pressure / 1000.0).sqrt();
        let ppmod = 1.0 / (10.0 + 5.0 * self.surface_pressure / 1000.0).sqrt();
        let tiltmod = ((self.axial_tilt.to_radians()).cos()
            * (1.0 + self.eccentricity).powi(2))
        .abs();
        let daymod = 1.0 / (200.0 / day_hours + 1.0);

        let mh = (1.0 + daymod).powf(pressmod);
        let ml = (1.0 - daymod).powf(pressmod);
        let hi = mh * self.surface_temperature;
        let mut lo = ml * self.surface_temperature;
        let sh = hi + ((100.0 + hi) * tiltmod).powf(ppmod.sqrt());
        let mut wl = lo - ((150.0 + lo) * tiltmod).powf(ppmod.sqrt());

        let max = self.surface_temperature + self.surface_temperature.sqrt() * 10.0;
        let min = self.surface_temperature / (day_hours + 24.0).sqrt();

        if lo < min {
            lo = min;
        }
        if wl < 0.0 {
            wl = 0.0;
        }

        self.high_temperature = soft(hi, max, min);
        self.low_temperature = soft(lo, max, min);
        self.max_temperature = soft(sh, max, min);
        self.min_temperature = soft(wl, max, min);
    }
}
