//! The planet record and its physical derivations.
//!
//! Fields are built up in stages: the formation pass fills the orbit and
//! masses, reconciliation may rewrite them, and
//! [`finalize_environment`](Planet::finalize_environment) derives everything
//! else. Derived quantities are always recomputed from the primary fields,
//! never stored independently.

use rand::Rng;
use serde::Serialize;
use units::{Length, Mass, Time};

use chemistry::AtmosphericConstituent;
use stellar::sampling;

use crate::constants::*;
use crate::planet_type::PlanetType;

/// A planet or moon. Moons set [`is_moon`](Planet::is_moon) and carry their
/// orbit around the parent in `moon_sma`/`moon_eccentricity`; their
/// `semi_major_axis` is pinned to the parent's before finalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub semi_major_axis: Length,
    pub eccentricity: f64,
    /// Orbital inclination in radians
    pub inclination: f64,
    pub mass: Mass,
    pub dust_mass: Mass,
    pub gas_mass: Mass,
    /// Orbit around the parent planet; meaningful only for moons
    pub moon_sma: Length,
    pub moon_eccentricity: f64,
    pub radius: Length,
    pub core_radius: Length,
    /// Bulk density in g/cm³
    pub density: f64,
    pub orbital_period: Time,
    pub day_length: Time,
    /// Axial tilt in degrees
    pub axial_tilt: f64,
    /// Exospheric temperature in Kelvin
    pub exospheric_temperature: f64,
    pub estimated_temperature: f64,
    pub estimated_terrestrial_temperature: f64,
    /// RMS velocity of molecular nitrogen in the exosphere, m/s
    pub rms_velocity: f64,
    /// Escape velocity in m/s
    pub escape_velocity: f64,
    /// Unitless volatile inventory (Fogg's eq. 17)
    pub volatile_gas_inventory: f64,
    /// Surface acceleration in m/s²
    pub surface_acceleration: f64,
    /// Surface gravity in Earth gravities
    pub surface_gravity: f64,
    /// Surface pressure in millibars
    pub surface_pressure: f64,
    /// Mean surface temperature in Kelvin
    pub surface_temperature: f64,
    /// Daytime temperature in Kelvin
    pub high_temperature: f64,
    /// Nighttime temperature in Kelvin
    pub low_temperature: f64,
    /// Summer-pole extreme in Kelvin
    pub max_temperature: f64,
    /// Winter-pole extreme in Kelvin
    pub min_temperature: f64,
    /// Boiling point of water in Kelvin at the surface pressure
    pub boiling_point: f64,
    /// Temperature rise from the greenhouse effect, Kelvin
    pub greenhouse_rise: f64,
    /// Smallest molecular weight the body retains over the stellar age
    pub minimum_molecular_weight: f64,
    /// Fraction of the surface covered by liquid water
    pub hydrosphere: f64,
    pub cloud_cover: f64,
    pub ice_cover: f64,
    pub albedo: f64,
    /// Insolation zone 1–3; selects composition constants
    pub orbital_zone: i32,
    pub gas_giant: bool,
    pub habitable_jovian: bool,
    pub is_moon: bool,
    pub resonant_period: bool,
    pub greenhouse_effect: bool,
    pub habitable: bool,
    pub earthlike: bool,
    pub habitable_moon: bool,
    pub kind: PlanetType,
    pub moons: Vec<Planet>,
    pub atmosphere: Vec<AtmosphericConstituent>,
}

impl Planet {
    pub fn new(semi_major_axis: Length, eccentricity: f64, mass: Mass) -> Self {
        Planet {
            semi_major_axis,
            eccentricity,
            inclination: 0.0,
            mass,
            dust_mass: Mass::zero(),
            gas_mass: Mass::zero(),
            moon_sma: Length::zero(),
            moon_eccentricity: 0.0,
            radius: Length::zero(),
            core_radius: Length::zero(),
            density: 0.0,
            orbital_period: Time::zero(),
            day_length: Time::zero(),
            axial_tilt: 0.0,
            exospheric_temperature: 0.0,
            estimated_temperature: 0.0,
            estimated_terrestrial_temperature: 0.0,
            rms_velocity: 0.0,
            escape_velocity: 0.0,
            volatile_gas_inventory: 0.0,
            surface_acceleration: 0.0,
            surface_gravity: 0.0,
            surface_pressure: 0.0,
            surface_temperature: 0.0,
            high_temperature: 0.0,
            low_temperature: 0.0,
            max_temperature: 0.0,
            min_temperature: 0.0,
            boiling_point: 0.0,
            greenhouse_rise: 0.0,
            minimum_molecular_weight: 0.0,
            hydrosphere: 0.0,
            cloud_cover: 0.0,
            ice_cover: 0.0,
            albedo: 0.0,
            orbital_zone: 0,
            gas_giant: false,
            habitable_jovian: false,
            is_moon: false,
            resonant_period: false,
            greenhouse_effect: false,
            habitable: false,
            earthlike: false,
            habitable_moon: false,
            kind: PlanetType::Unknown,
            moons: Vec::new(),
            atmosphere: Vec::new(),
        }
    }

    pub fn mass_in_earth_masses(&self) -> f64 {
        self.mass.to_earth_masses()
    }

    /// Orbital apoapsis around the star.
    pub fn apoapsis(&self) -> Length {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Orbital periapsis around the star.
    pub fn periapsis(&self) -> Length {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Apoapsis of the orbit around the parent planet (moons).
    pub fn moon_apoapsis(&self) -> Length {
        self.moon_sma * (1.0 + self.moon_eccentricity)
    }

    /// Periapsis of the orbit around the parent planet (moons).
    pub fn moon_periapsis(&self) -> Length {
        self.moon_sma * (1.0 - self.moon_eccentricity)
    }

    /// Standard gravitational parameter μ in m³/s².
    pub fn mu(&self) -> f64 {
        G * self.mass.to_kg()
    }

    /// Insolation zone: inside `4√L` AU is zone 1, inside `15√L` zone 2,
    /// beyond that zone 3.
    pub fn orbital_zone(&self, luminosity: f64) -> i32 {
        let sma = self.semi_major_axis.to_au();
        if sma < 4.0 * luminosity.sqrt() {
            1
        } else if sma < 15.0 * luminosity.sqrt() {
            2
        } else {
            3
        }
    }

    /// Orbital period around a central body of the given mass.
    pub fn orbital_period_around(&self, central_mass: Mass) -> Time {
        let sma_m = self.semi_major_axis.to_meters();
        let mu = G * central_mass.to_kg();
        Time::from_seconds((sma_m.powi(3) / mu).sqrt() * std::f64::consts::PI * 2.0)
    }

    /// Radius from mass and an already-known density, in spherical
    /// approximation.
    pub fn volume_radius(&self) -> Length {
        let radius_cm = (((self.mass.to_grams() / self.density) / std::f64::consts::PI)
            * (3.0 / 4.0))
            .powf(1.0 / 3.0);
        Length::from_km(radius_cm / 1.0e5)
    }

    /// Closed-form degenerate-matter radius (Kothari 1936, eq. 23; Fogg's
    /// eq. 9). Composition constants depend on the insolation zone and
    /// whether the body holds a gas envelope.
    pub fn kothari_radius(&self) -> Length {
        const A1: f64 = 6.485e12;
        const A2: f64 = 4.0032e-8;
        const BETA: f64 = 5.71e12;
        // Normalizes a 1 M⊕ zone-1 rocky body to Earth's radius
        const RADIUS_FUDGE: f64 = 1.004;

        let (atomic_weight, atomic_number): (f64, f64) = match (self.orbital_zone, self.gas_giant)
        {
            (1, true) => (9.5, 4.5),
            (1, false) => (15.0, 8.0),
            (2, true) => (2.47, 2.0),
            (2, false) => (10.0, 5.0),
            (_, true) => (7.0, 4.0),
            (_, false) => (10.0, 5.0),
        };

        let mass = self.mass.to_solar_masses();
        let weight_number = atomic_weight * atomic_number;

        let numerator = (2.0 * BETA * SOLAR_MASS_IN_GRAMS.powf(1.0 / 3.0))
            / (A1 * weight_number.powf(1.0 / 3.0));
        let correction = 1.0
            + A2 * atomic_weight.powf(4.0 / 3.0)
                * SOLAR_MASS_IN_GRAMS.powf(2.0 / 3.0)
                * mass.powf(2.0 / 3.0)
                / (A1 * atomic_number.powi(2));
        let radius_km = (numerator / correction) * mass.powf(1.0 / 3.0) / 1.0e5;

        Length::from_km(radius_km / RADIUS_FUDGE)
    }

    /// Mass-and-orbit density estimate in g/cm³, used for gas-giant sizing.
    pub fn empirical_density(&self, ecosphere_radius: Length) -> f64 {
        let density = self.mass_in_earth_masses().powf(1.0 / 8.0)
            * (ecosphere_radius / self.semi_major_axis).powf(1.0 / 4.0);
        if self.gas_giant {
            density * 1.2
        } else {
            density * 5.5
        }
    }

    /// Density from mass and an already-known radius, in g/cm³.
    pub fn volume_density(&self) -> f64 {
        self.mass.to_grams()
            / ((4.0 * std::f64::consts::PI * self.radius.to_cm().powi(3)) / 3.0)
    }

    /// Escape velocity from the surface, m/s.
    pub fn escape_velocity(&self) -> f64 {
        (2.0 * self.mu() / self.radius.to_meters()).sqrt()
    }

    /// RMS velocity of a gas at the exospheric temperature, m/s (Fogg's
    /// eq. 16).
    pub fn rms_velocity(&self, molecular_weight: f64) -> f64 {
        ((3.0 * MOLAR_GAS_CONST * self.exospheric_temperature) / (molecular_weight / 1000.0))
            .sqrt()
    }

    /// Smallest molecular weight retained at the gas-retention threshold.
    pub fn molecular_limit(&self) -> f64 {
        (3000.0 * MOLAR_GAS_CONST * self.exospheric_temperature)
            / (self.escape_velocity() / GAS_RETENTION_THRESHOLD).powi(2)
    }

    /// Surface acceleration in m/s².
    pub fn gravitational_acceleration(&self) -> f64 {
        self.mu() / self.radius.to_meters().powi(2)
    }

    /// Surface gravity in Earth gravities.
    pub fn gravity(&self) -> f64 {
        self.gravitational_acceleration() / EARTH_ACCELERATION
    }

    /// Years for 1/e of a gas to escape the atmosphere (Dole p. 34, after
    /// Jeans 1916).
    pub fn gas_life(&self, molecular_weight: f64) -> f64 {
        let v = self.rms_velocity(molecular_weight);
        let r = self.radius.to_meters();
        let seconds = (v.powi(3) / (2.0 * self.surface_acceleration.powi(2) * r))
            * ((3.0 * self.surface_acceleration * r) / v.powi(2)).exp();
        seconds / (3600.0 * 24.0 * 365.256)
    }

    /// Smallest molecular weight whose escape lifetime matches the stellar
    /// age: bracket-expand from the retention limit, then bisect.
    pub fn minimum_molecular_weight(&self, stellar_age: Time) -> f64 {
        let target = stellar_age.to_years();
        let mut guess_lo = self.molecular_limit();
        let mut guess_hi = guess_lo;
        let mut life = self.gas_life(guess_lo);

        let mut loops = 0;
        if life > target {
            while life > target && loops < 25 {
                guess_lo /= 2.0;
                life = self.gas_life(guess_lo);
                loops += 1;
            }
        } else {
            while life < target && loops < 25 {
                guess_hi *= 2.0;
                life = self.gas_life(guess_hi);
                loops += 1;
            }
        }

        loops = 0;
        while guess_hi - guess_lo > 0.1 && loops < 25 {
            let midpoint = (guess_lo + guess_hi) / 2.0;
            if self.gas_life(midpoint) < target {
                guess_lo = midpoint;
            } else {
                guess_hi = midpoint;
            }
            loops += 1;
        }

        guess_hi
    }

    /// Unitless volatile inventory (Fogg's eq. 17). Zero when the body
    /// cannot hold nitrogen against thermal escape.
    pub fn volatile_gas_inventory(&self, stellar_mass: Mass) -> f64 {
        let velocity_ratio = self.escape_velocity / self.rms_velocity;
        if velocity_ratio < GAS_RETENTION_THRESHOLD {
            return 0.0;
        }
        let proportional = match self.orbital_zone {
            1 => 140_000.0,
            2 => 75_000.0,
            3 => 250.0,
            _ => 0.0,
        };
        let inventory = proportional * self.mass_in_earth_masses() / stellar_mass.to_solar_masses();
        if self.greenhouse_effect || self.gas_mass / self.mass > 1.0e-6 {
            inventory
        } else {
            inventory / 140.0
        }
    }

    /// Surface pressure in millibars from the volatile inventory (Fogg's
    /// eq. 18).
    pub fn pressure(&self) -> f64 {
        self.volatile_gas_inventory * self.surface_gravity
            * (EARTH_SURF_PRES_IN_MILLIBARS / 1000.0)
            / self.earth_radius_ratio().powi(2)
    }

    /// Boiling point of water at the surface pressure, Kelvin (Fogg's
    /// eq. 21).
    pub fn boiling_point(&self) -> f64 {
        1.0 / (((self.surface_pressure / 1000.0).ln() / -5050.5) + (1.0 / 373.0))
    }

    /// Fraction of the surface under liquid water (Fogg's eq. 22, with the
    /// 71% Earth calibration).
    pub fn water_coverage(&self) -> f64 {
        let fraction =
            (0.708 * self.volatile_gas_inventory / 1000.0) * self.earth_radius_ratio().powi(2);
        fraction.min(1.0)
    }

    /// Fraction of the surface hidden by cloud (Fogg's eq. 23 after Hart
    /// 1978).
    pub fn cloud_fraction(&self) -> f64 {
        if self.minimum_molecular_weight > WATER_VAPOR {
            return 0.0;
        }
        const Q2_36: f64 = 0.0698; // 1/Kelvin
        const CLOUD_COVERAGE_FACTOR: f64 = 1.839e-8; // km²/kg

        let surface_area = 4.0 * std::f64::consts::PI * self.radius.to_km().powi(2);
        let hydro_mass = self.hydrosphere * surface_area * EARTH_WATER_MASS_PER_AREA;
        let water_vapor_kg =
            (1.0e-8 * hydro_mass) * (Q2_36 * (self.surface_temperature - EARTH_AVERAGE_KELVIN)).exp();
        (CLOUD_COVERAGE_FACTOR * water_vapor_kg / surface_area).min(1.0)
    }

    /// Fraction of the surface under ice (Fogg's eq. 24 after Hart, with
    /// the 90 K divisor recalibration).
    pub fn ice_fraction(&self) -> f64 {
        let surface_temp = self.surface_temperature.min(328.0);
        let mut fraction = ((328.0 - surface_temp) / 90.0).powi(5);
        if fraction > 1.5 * self.hydrosphere {
            fraction = 1.5 * self.hydrosphere;
        }
        fraction.min(1.0)
    }

    /// Length of the local day. Spin-down from stellar tides can push the
    /// rotation into lock or, for eccentric orbits, a spin-orbit resonance
    /// (sets [`resonant_period`](Planet::resonant_period)).
    pub fn day_length(&mut self, stellar_mass: Mass, stellar_age: Time) -> Time {
        const J: f64 = 1.46e-19; // cm²/(s²·g)
        const CHANGE_IN_EARTH_ANGULAR_VELOCITY: f64 = -1.3e-15; // rad/s/yr

        let k2 = if self.gas_giant { 0.24 } else { 0.33 };
        let base_angular_velocity =
            (2.0 * J * self.mass.to_grams() / (k2 * self.radius.to_cm().powi(2))).sqrt();
        let change_in_angular_velocity = CHANGE_IN_EARTH_ANGULAR_VELOCITY
            * (self.density / EARTH_DENSITY)
            * (self.radius.to_meters() / EARTH_RADIUS_M)
            * (1.0 / self.mass_in_earth_masses())
            * stellar_mass.powi(2)
            * (1.0 / self.semi_major_axis.to_au().powi(6));
        let angular_velocity =
            base_angular_velocity + change_in_angular_velocity * stellar_age.to_years();

        let mut stopped = false;
        let day_in_seconds = if angular_velocity <= 0.0 {
            stopped = true;
            f64::MAX
        } else {
            2.0 * std::f64::consts::PI / angular_velocity
        };

        let period_seconds = self.orbital_period.to_seconds();
        if day_in_seconds >= period_seconds || stopped {
            if self.eccentricity > 0.1 {
                let spin_resonance_factor = (1.0 - self.eccentricity) / (1.0 + self.eccentricity);
                self.resonant_period = true;
                return Time::from_seconds(spin_resonance_factor * period_seconds);
            }
            return self.orbital_period;
        }

        Time::from_seconds(day_in_seconds)
    }

    /// Random axial tilt in degrees, drifting higher with orbital distance.
    pub fn axial_tilt(&self, rng: &mut impl Rng) -> f64 {
        const EARTH_AXIAL_TILT: f64 = 23.5;
        (self.semi_major_axis.to_au().powf(0.2) * sampling::about(rng, EARTH_AXIAL_TILT, 0.4))
            % 360.0
    }

    /// True when rotation is locked to the orbit, either exactly or through
    /// a spin-orbit resonance.
    pub fn tidally_locked(&self) -> bool {
        self.resonant_period
            || self.day_length.to_hours() as i64 == self.orbital_period.to_hours() as i64
    }

    /// Mark this body and its moon list with their roles after
    /// reconciliation reshuffles them.
    pub fn mark_moon(&mut self, is_moon: bool) {
        self.is_moon = is_moon;
        if !is_moon {
            for moon in &mut self.moons {
                moon.mark_moon(true);
            }
        }
    }

    /// `R⊕ / R`, the inverse radius ratio several Fogg equations scale by.
    pub(crate) fn earth_radius_ratio(&self) -> f64 {
        EARTH_RADIUS_M / self.radius.to_meters()
    }
}
