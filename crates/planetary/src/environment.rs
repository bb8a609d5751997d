//! The per-body environment pipeline: classification, atmospheric escape,
//! climate, habitability, and moon finalization.

use log::debug;
use rand::Rng;
use units::Length;

use chemistry::Chemical;
use stellar::{sampling, Star};

use crate::atmosphere::Breathability;
use crate::constants::*;
use crate::planet::Planet;
use crate::planet_type::PlanetType;

impl Planet {
    /// Finalize this body. The orbit and accreted masses must be settled
    /// before calling; everything else is derived here. Recurses into the
    /// moon list when `generate_moons` is set (moons are finalized pinned
    /// to the parent's orbit, then given their own orbit around it when
    /// the Roche limit and Hill sphere leave room).
    ///
    /// # Panics
    ///
    /// Panics if a moon-list entry sits at or below the planetesimal
    /// failure threshold — the coalescence pass never admits one, so such
    /// an entry means the list was corrupted upstream.
    pub fn finalize_environment(
        &mut self,
        primary: &Star,
        table: &[Chemical],
        generate_moons: bool,
        rng: &mut impl Rng,
    ) {
        self.surface_temperature = 0.0;
        self.high_temperature = 0.0;
        self.low_temperature = 0.0;
        self.max_temperature = 0.0;
        self.min_temperature = 0.0;
        self.greenhouse_rise = 0.0;
        self.resonant_period = false;

        self.orbital_zone = self.orbital_zone(primary.luminosity);
        self.orbital_period = self.orbital_period_around(primary.mass);
        self.axial_tilt = self.axial_tilt(rng);
        self.exospheric_temperature = EARTH_EXOSPHERIC_TEMPERATURE
            / (self.semi_major_axis / primary.ecosphere_radius).powi(2);
        self.rms_velocity = self.rms_velocity(MOLECULAR_NITROGEN);
        self.core_radius = self.kothari_radius();

        // Size the body as if it kept its envelope; if it qualifies as a
        // gas giant these stand, otherwise the rocky branch rederives them.
        self.density = self.empirical_density(primary.ecosphere_radius);
        self.radius = self.volume_radius();
        self.surface_acceleration = self.gravitational_acceleration();
        self.surface_gravity = self.gravity();
        self.minimum_molecular_weight = self.minimum_molecular_weight(primary.age);

        let gas_fraction = self.gas_mass / self.mass;
        if self.mass_in_earth_masses() > 1.0
            && gas_fraction > 0.05
            && self.minimum_molecular_weight <= 4.0
        {
            self.kind = if gas_fraction < 0.20 {
                PlanetType::SubSubGasGiant
            } else if self.mass_in_earth_masses() < 20.0 {
                PlanetType::SubGasGiant
            } else {
                PlanetType::GasGiant
            };
        } else {
            self.radius = self.kothari_radius();
            self.density = self.volume_density();
            self.surface_acceleration = self.gravitational_acceleration();
            self.surface_gravity = self.gravity();
            self.kind = PlanetType::Unknown;

            // Strip primordial hydrogen and helium the body cannot hold
            // over the star's age; gravity re-equilibrates after each loss.
            if self.gas_mass / self.mass > 1.0e-6 {
                let h2_mass = self.gas_mass * 0.85;
                let he_mass = (self.gas_mass - h2_mass) * 0.999;
                let age = primary.age.to_years();

                let h2_life = self.gas_life(MOLECULAR_HYDROGEN);
                if h2_life < age {
                    let h2_loss = h2_mass * (1.0 - (-age / h2_life).exp());
                    self.gas_mass = self.gas_mass - h2_loss;
                    self.mass = self.mass - h2_loss;
                    self.surface_acceleration = self.gravitational_acceleration();
                    self.surface_gravity = self.gravity();
                }

                let he_life = self.gas_life(HELIUM);
                if he_life < age {
                    let he_loss = he_mass * (1.0 - (-age / he_life).exp());
                    self.gas_mass = self.gas_mass - he_loss;
                    self.mass = self.mass - he_loss;
                    self.surface_acceleration = self.gravitational_acceleration();
                    self.surface_gravity = self.gravity();
                }
            }
        }

        self.day_length = self.day_length(primary.mass, primary.age);
        self.escape_velocity = self.escape_velocity();

        if self.kind.is_gaseous() {
            // Sentinel surface values: a gas giant has no surface to speak
            // of, and the datasheet knows to skip these.
            self.greenhouse_effect = false;
            self.volatile_gas_inventory = f64::MAX;
            self.surface_pressure = f64::MAX;
            self.boiling_point = f64::MAX;
            self.surface_temperature = f64::MAX;
            self.greenhouse_rise = 0.0;
            self.albedo = sampling::about(rng, GAS_GIANT_ALBEDO, 0.1);
            self.hydrosphere = 1.0;
            self.cloud_cover = 1.0;
            self.ice_cover = 0.0;
            self.surface_gravity = self.gravity();
            self.minimum_molecular_weight = self.minimum_molecular_weight(primary.age);
            self.surface_gravity = f64::MAX;
            self.estimated_temperature = self.estimated_temperature(primary.ecosphere_radius);
            self.estimated_terrestrial_temperature =
                self.estimated_terrestrial_temperature(primary.ecosphere_radius);

            // A Jovian in the right thermal band around a mature star could
            // host habitable satellites.
            let est = self.estimated_terrestrial_temperature;
            if est >= FREEZING_POINT_OF_WATER
                && est <= EARTH_AVERAGE_KELVIN + 10.0
                && primary.age.to_years() > 2.0e9
            {
                self.habitable_jovian = true;
            }
        } else {
            self.estimated_temperature = self.estimated_temperature(primary.ecosphere_radius);
            self.estimated_terrestrial_temperature =
                self.estimated_terrestrial_temperature(primary.ecosphere_radius);
            self.surface_gravity = self.gravity();
            self.minimum_molecular_weight = self.minimum_molecular_weight(primary.age);
            self.greenhouse_effect = self.has_greenhouse(primary.ecosphere_radius);
            self.volatile_gas_inventory = self.volatile_gas_inventory(primary.mass);
            self.surface_pressure = self.pressure();
            self.boiling_point = if self.surface_pressure <= 0.0 {
                0.0
            } else {
                self.boiling_point()
            };

            self.iterate_surface_temperature(primary);

            if self.max_temperature >= FREEZING_POINT_OF_WATER
                && self.min_temperature <= self.boiling_point
            {
                self.synthesize_atmosphere(primary, table);
            }

            self.kind = if self.surface_pressure < 1.0 {
                if !self.is_moon && self.mass_in_earth_masses() < ASTEROID_MASS_LIMIT {
                    PlanetType::Asteroids
                } else {
                    PlanetType::Rock
                }
            } else if self.surface_pressure > 6000.0 && self.minimum_molecular_weight <= 2.0 {
                // Deep atmosphere that retains hydrogen
                if self.density < 2.0 {
                    self.atmosphere.clear();
                    PlanetType::SubSubGasGiant
                } else if !self.atmosphere.is_empty() {
                    PlanetType::SuperEarth
                } else {
                    PlanetType::Rock
                }
            } else if self.tidally_locked() {
                PlanetType::TidallyLocked
            } else if self.hydrosphere >= 0.95 {
                PlanetType::Water
            } else if self.ice_cover >= 0.95 {
                PlanetType::Ice
            } else if self.hydrosphere > 0.05 {
                PlanetType::Terrestrial
            } else if self.max_temperature > self.boiling_point {
                PlanetType::Venusian
            } else if self.gas_mass / self.mass > 0.0001 {
                // Accreted gas but no greenhouse: frozen volatiles
                self.ice_cover = 1.0;
                PlanetType::Ice
            } else if self.surface_pressure <= 250.0 {
                PlanetType::Martian
            } else if self.surface_temperature < FREEZING_POINT_OF_WATER {
                PlanetType::Ice
            } else {
                PlanetType::Unknown
            };
        }

        if generate_moons && !self.is_moon {
            let parent_sma = self.semi_major_axis;
            let parent_eccentricity = self.eccentricity;
            let mut moons = std::mem::take(&mut self.moons);
            for moon in &mut moons {
                assert!(
                    moon.mass_in_earth_masses() > 1.0e-6,
                    "moon-list entry at {:.3e} M⊕ is below the planetesimal threshold",
                    moon.mass_in_earth_masses()
                );

                moon.semi_major_axis = parent_sma;
                moon.eccentricity = parent_eccentricity;
                moon.finalize_environment(primary, table, false, rng);

                let roche_limit_km =
                    2.44 * self.radius.to_km() * (self.density / moon.density).powf(1.0 / 3.0);
                let hill_sphere_km = self.semi_major_axis.to_km()
                    * (self.mass / (primary.mass * 3.0)).powf(1.0 / 3.0);

                if roche_limit_km * 3.0 < hill_sphere_km {
                    moon.moon_sma = Length::from_km(sampling::uniform(
                        rng,
                        roche_limit_km * 1.5,
                        hill_sphere_km / 2.0,
                    ));
                    moon.moon_eccentricity = sampling::eccentricity(rng);
                } else {
                    debug!(
                        "no stable moon orbit at {:.2} AU (Roche {:.0} km, Hill {:.0} km)",
                        parent_sma.to_au(),
                        roche_limit_km,
                        hill_sphere_km
                    );
                }

                if moon.habitable {
                    self.habitable_moon = true;
                }
            }
            self.moons = moons;
        }

        if self.kind.is_gaseous() {
            self.gas_giant = true;
            return;
        }
        self.gas_giant = false;

        if self.breathability() == Breathability::Breathable && !self.tidally_locked() {
            self.habitable = true;

            let relative_temp =
                self.surface_temperature - FREEZING_POINT_OF_WATER - EARTH_AVERAGE_CELSIUS;
            let pressure_ratio = self.surface_pressure / EARTH_SURF_PRES_IN_MILLIBARS;

            if (0.8..=1.2).contains(&self.surface_gravity)
                && (-2.0..=3.0).contains(&relative_temp)
                && self.ice_cover <= 0.1
                && (0.5..=2.0).contains(&pressure_ratio)
                && (0.4..=0.8).contains(&self.cloud_cover)
                && (0.5..=0.8).contains(&self.hydrosphere)
                && self.kind != PlanetType::Water
            {
                self.earthlike = true;
            }
        }
    }
}
