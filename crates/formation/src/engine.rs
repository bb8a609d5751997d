//! The accretion engine: protoplanet injection and swept-mass growth.

use log::debug;
use rand::Rng;
use units::{Length, Mass};

use planetary::Planet;
use stellar::{sampling, Star};

use crate::disk::DustDisk;

/// Critical-mass scale factor (solar masses)
const B: f64 = 1.2e-5;

/// Seed mass of an injected protoplanet, in solar masses
pub const PROTOPLANET_MASS: f64 = 1.0e-15;

/// Leading coefficient of the disk's dust-density profile
const DUST_DENSITY_COEFF: f64 = 2.0e-3;

/// Radial falloff of the dust-density profile
const ALPHA: f64 = 5.0;
const N: f64 = 3.0;

/// Gas/dust mass ratio of the nebula
const K: f64 = 50.0;

/// Mean eccentricity of the dust cloud's own orbits; widens every
/// influence zone
const CLOUD_ECCENTRICITY: f64 = 0.2;

/// State of one accretion run around a star.
///
/// Owns the dust-lane partition and the planet list while they are under
/// construction. Failed planetesimals and escaped moons are retained for
/// the reconciliation pass.
pub struct Accretor<'a> {
    pub(crate) star: &'a Star,
    pub disk: DustDisk,
    pub planets: Vec<Planet>,
    pub failed_planetesimals: Vec<Planet>,
    pub escaped_moons: Vec<Planet>,
    pub(crate) generate_moons: bool,
    pub(crate) inner_bound: f64,
    pub(crate) outer_bound: f64,
    /// Dust density at the current injection orbit
    pub(crate) dust_density: f64,
    /// Reduced-mass term of the most recent influence-zone computation
    pub(crate) reduced_mass: f64,
    /// Influence-zone radii left by the most recent dust collection
    pub(crate) radius_inner: f64,
    pub(crate) radius_outer: f64,
}

impl<'a> Accretor<'a> {
    pub fn new(star: &'a Star, generate_moons: bool) -> Self {
        Accretor {
            star,
            disk: DustDisk::new(star.stellar_dust_limit().to_au()),
            planets: Vec::new(),
            failed_planetesimals: Vec::new(),
            escaped_moons: Vec::new(),
            generate_moons,
            inner_bound: star.innermost_planet().to_au(),
            outer_bound: star.outermost_planet().to_au(),
            dust_density: 0.0,
            reduced_mass: 0.0,
            radius_inner: 0.0,
            radius_outer: 0.0,
        }
    }

    /// Inject trial protoplanets at random orbits until no accessible band
    /// retains dust. Bodies that grow beyond the seed go through
    /// coalescence; the rest are recorded as failed planetesimals.
    pub fn distribute_planetary_masses(&mut self, rng: &mut impl Rng) {
        while self.disk.dust_left {
            let sma = sampling::uniform(rng, self.inner_bound, self.outer_bound);
            let eccentricity = sampling::eccentricity(rng);
            let seed = PROTOPLANET_MASS;

            let zone_inner = self.inner_effect_limit(sma, eccentricity, seed);
            let zone_outer = self.outer_effect_limit(sma, eccentricity, seed);
            if !self.disk.has_dust(zone_inner, zone_outer) {
                continue;
            }

            debug!("injecting protoplanet at {:.2} AU", sma);
            self.dust_density = DUST_DENSITY_COEFF
                * self.star.mass.sqrt()
                * (-ALPHA * sma.powf(1.0 / N)).exp();
            let critical_mass = self.critical_mass(sma, eccentricity);

            let (mass, mut dust, gas) = self.accrete_dust(seed, sma, eccentricity, critical_mass);
            dust += PROTOPLANET_MASS;

            if mass > PROTOPLANET_MASS {
                self.coalesce_planetesimals(sma, eccentricity, mass, critical_mass, dust, gas);
            } else {
                debug!("planetesimal at {:.2} AU never grew past its seed", sma);
                let mut failed = Planet::new(
                    Length::from_au(sma),
                    eccentricity,
                    Mass::from_solar_masses(dust + gas),
                );
                failed.dust_mass = Mass::from_solar_masses(dust);
                failed.gas_mass = Mass::from_solar_masses(gas);
                self.failed_planetesimals.push(failed);
            }
        }
    }

    /// Orbit-dependent mass threshold for gas retention:
    /// `B·(periapsis·√L)^-0.75`.
    pub fn critical_mass(&self, sma: f64, eccentricity: f64) -> f64 {
        let periapsis = sma * (1.0 - eccentricity);
        B * (periapsis * self.star.luminosity.sqrt()).powf(-0.75)
    }

    /// Grow a body from `seed_mass` by repeatedly collecting swept mass
    /// until the growth between iterations falls under 0.01% of the prior
    /// mass, then clear the swept interval from the disk. Returns the
    /// final mass and its dust/gas split.
    pub fn accrete_dust(
        &mut self,
        seed_mass: f64,
        sma: f64,
        eccentricity: f64,
        critical_mass: f64,
    ) -> (f64, f64, f64) {
        let mut new_mass = seed_mass;
        let mut dust;
        let mut gas;

        loop {
            let previous_mass = new_mass;
            let (collected, collected_dust, collected_gas) =
                self.collect_dust(previous_mass, sma, eccentricity, critical_mass);
            new_mass = collected;
            dust = collected_dust;
            gas = collected_gas;
            if new_mass - previous_mass < 0.0001 * previous_mass {
                break;
            }
        }

        let total = seed_mass + new_mass;
        self.disk.consume(
            self.radius_inner,
            self.radius_outer,
            total <= critical_mass,
            self.inner_bound,
            self.outer_bound,
        );
        (total, dust, gas)
    }

    /// One sweep over the disk: total mass collected by a body of
    /// `last_mass` at the given orbit, split into dust and gas. Below
    /// critical mass only dust is swept; above it gas bands contribute at
    /// the nebular gas/dust ratio.
    fn collect_dust(
        &mut self,
        last_mass: f64,
        sma: f64,
        eccentricity: f64,
        critical_mass: f64,
    ) -> (f64, f64, f64) {
        self.reduced_mass = (last_mass / (1.0 + last_mass)).powf(1.0 / 4.0);
        self.radius_inner = self
            .inner_effect_limit(sma, eccentricity, self.reduced_mass)
            .max(0.0);
        self.radius_outer = self.outer_effect_limit(sma, eccentricity, self.reduced_mass);

        let mut total_mass = 0.0;
        let mut total_dust = 0.0;
        let mut total_gas = 0.0;

        for band in self.disk.bands() {
            if band.outer_edge <= self.radius_inner || band.inner_edge >= self.radius_outer {
                continue;
            }

            let dust_density = if band.dust_present {
                self.dust_density
            } else {
                0.0
            };
            let (mass_density, gas_density) = if last_mass < critical_mass || !band.gas_present {
                (dust_density, 0.0)
            } else {
                let mass_density =
                    K * dust_density / (1.0 + (critical_mass / last_mass).sqrt() * (K - 1.0));
                (mass_density, mass_density - dust_density)
            };

            let band_width = self.radius_outer - self.radius_inner;
            let outside_outer = (self.radius_outer - band.outer_edge).max(0.0);
            let outside_inner = (band.inner_edge - self.radius_inner).max(0.0);
            let width = band_width - outside_outer - outside_inner;

            let area = 4.0
                * std::f64::consts::PI
                * sma.powi(2)
                * self.reduced_mass
                * (1.0 - eccentricity * (outside_outer - outside_inner) / band_width);
            let volume = area * width;

            let band_mass = volume * mass_density;
            let band_gas = volume * gas_density;
            total_mass += band_mass;
            total_gas += band_gas;
            total_dust += band_mass - band_gas;
        }

        (total_mass, total_dust, total_gas)
    }

    /// Inner edge of a body's gravitational influence zone. Can compute
    /// negative near the star; callers clamp to zero.
    pub(crate) fn inner_effect_limit(&self, sma: f64, eccentricity: f64, mass: f64) -> f64 {
        sma * (1.0 - eccentricity) * (1.0 - mass) / (1.0 + CLOUD_ECCENTRICITY)
    }

    /// Outer edge of a body's gravitational influence zone.
    pub(crate) fn outer_effect_limit(&self, sma: f64, eccentricity: f64, mass: f64) -> f64 {
        sma * (1.0 + eccentricity) * (1.0 + mass) / (1.0 - CLOUD_ECCENTRICITY)
    }

    /// Planets sort ascending by semi-major axis; moons live in their
    /// parents' lists and are never cross-ordered with planets.
    pub(crate) fn sort_planets(&mut self) {
        self.planets.sort_by(|a, b| {
            a.semi_major_axis
                .partial_cmp(&b.semi_major_axis)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    /// Hand the finished planet list to the caller, consuming the run.
    pub fn into_planets(self) -> Vec<Planet> {
        self.planets
    }
}
