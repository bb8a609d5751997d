//! The coalescence resolver: collision, moon capture, escape, or new
//! planet for every grown body.

use log::{debug, info};
use units::{Length, Mass};

use planetary::Planet;

use crate::engine::Accretor;

/// Mass window for moon capture, in Earth masses.
const MOON_CAPTURE_MIN: f64 = 0.0001;
const MOON_CAPTURE_MAX: f64 = 2.5;

/// Captured moons may hold at most this fraction of the planet's mass.
const MOON_MASS_BUDGET: f64 = 0.05;

/// Orbit parameters for a body interacting with an existing planet:
/// mass-weighted semi-major axis and the angular-momentum eccentricity
/// combination.
struct MergedOrbit {
    index: usize,
    sma: f64,
    eccentricity: f64,
}

impl<'a> Accretor<'a> {
    /// Resolve a freshly grown body against the existing planet list:
    /// an overlapping orbit leads to moon capture, escape, or a merge
    /// (with a re-run of the dust sweep at the combined orbit); otherwise
    /// the body joins the list as a new planet.
    pub fn coalesce_planetesimals(
        &mut self,
        sma: f64,
        eccentricity: f64,
        mass: f64,
        critical_mass: f64,
        dust_mass: f64,
        gas_mass: f64,
    ) {
        match self.find_overlap(sma, eccentricity, mass) {
            Some(merged) => {
                if self.generate_moons && mass < critical_mass {
                    // The captured or escaping body keeps its own orbit
                    // radius; only the eccentricity was recombined.
                    self.capture_or_escape(merged, sma, mass, dust_mass, gas_mass);
                } else {
                    self.merge_with_sweep(merged, mass, critical_mass, dust_mass, gas_mass);
                }
            }
            None => self.insert_planet(sma, eccentricity, mass, critical_mass, dust_mass, gas_mass),
        }
        self.sort_planets();
    }

    /// Reconciliation-path variant: identical interaction logic but the
    /// merge adds mass directly without re-running the dust sweep, and a
    /// failed capture falls through to the merge instead of escaping.
    pub fn inject_mass(
        &mut self,
        sma: f64,
        eccentricity: f64,
        mass: f64,
        critical_mass: f64,
        dust_mass: f64,
        gas_mass: f64,
    ) {
        match self.find_overlap(sma, eccentricity, mass) {
            Some(merged) => {
                let mass_em = Mass::from_solar_masses(mass).to_earth_masses();
                if self.generate_moons
                    && mass < critical_mass
                    && mass_em < MOON_CAPTURE_MAX
                    && mass_em > MOON_CAPTURE_MIN
                    && self.captured_moon_mass(merged.index)
                        < self.planets[merged.index].mass.to_solar_masses() * MOON_MASS_BUDGET
                {
                    self.capture_moon(merged, sma, mass, dust_mass, gas_mass);
                } else {
                    let planet = &mut self.planets[merged.index];
                    info!(
                        "re-injected mass merges with planet at {:.2} AU -> {:.2} AU",
                        planet.semi_major_axis.to_au(),
                        merged.sma
                    );
                    planet.semi_major_axis = Length::from_au(merged.sma);
                    planet.eccentricity = merged.eccentricity;
                    planet.mass = planet.mass + Mass::from_solar_masses(mass);
                    planet.dust_mass = planet.dust_mass + Mass::from_solar_masses(dust_mass);
                    planet.gas_mass = planet.gas_mass + Mass::from_solar_masses(gas_mass);
                    if planet.mass.to_solar_masses() >= critical_mass {
                        planet.gas_giant = true;
                    }
                }
            }
            None => self.insert_planet(sma, eccentricity, mass, critical_mass, dust_mass, gas_mass),
        }
        self.sort_planets();
    }

    /// Scan for an existing planet whose influence-inflated orbital reach
    /// overlaps the candidate orbit, and compute the merged orbit.
    fn find_overlap(&mut self, sma: f64, eccentricity: f64, mass: f64) -> Option<MergedOrbit> {
        for index in 0..self.planets.len() {
            let (planet_sma, planet_eccentricity, planet_mass) = {
                let planet = &self.planets[index];
                (
                    planet.semi_major_axis.to_au(),
                    planet.eccentricity,
                    planet.mass.to_solar_masses(),
                )
            };

            let diff = planet_sma - sma;
            let (dist1, dist2) = if diff > 0.0 {
                // Candidate reaches out to apoapsis, planet reaches in
                let dist1 = sma * (1.0 + eccentricity) * (1.0 + self.reduced_mass) - sma;
                self.reduced_mass = (planet_mass / (1.0 + planet_mass)).powf(1.0 / 4.0);
                let dist2 = planet_sma
                    - planet_sma * (1.0 - planet_eccentricity) * (1.0 - self.reduced_mass);
                (dist1, dist2)
            } else {
                // Candidate reaches in to periapsis, planet reaches out
                let dist1 = sma - sma * (1.0 - eccentricity) * (1.0 - self.reduced_mass);
                self.reduced_mass = (planet_mass / (1.0 + planet_mass)).powf(1.0 / 4.0);
                let dist2 = planet_sma * (1.0 + planet_eccentricity) * (1.0 + self.reduced_mass)
                    - planet_sma;
                (dist1, dist2)
            };

            if diff.abs() <= dist1.abs() || diff.abs() <= dist2.abs() {
                let new_sma = (planet_mass + mass) / (planet_mass / planet_sma + mass / sma);

                let mut term = planet_mass
                    * planet_sma.sqrt()
                    * (1.0 - planet_eccentricity.powi(2)).sqrt();
                term += mass * sma.sqrt() * (1.0 - eccentricity.powi(2)).sqrt().sqrt();
                term /= (planet_mass + mass) * new_sma.sqrt();
                let mut eccentricity_sq = 1.0 - term.powi(2);
                if !(0.0..1.0).contains(&eccentricity_sq) {
                    eccentricity_sq = 0.0;
                }

                return Some(MergedOrbit {
                    index,
                    sma: new_sma,
                    eccentricity: eccentricity_sq.sqrt(),
                });
            }
        }
        None
    }

    fn captured_moon_mass(&self, index: usize) -> f64 {
        self.planets[index]
            .moons
            .iter()
            .map(|moon| moon.mass.to_solar_masses())
            .sum()
    }

    /// Sub-critical body meeting a planet: capture it as a moon when it
    /// fits the mass window and the planet's moon budget, otherwise record
    /// it as an escapee for reconciliation.
    fn capture_or_escape(
        &mut self,
        merged: MergedOrbit,
        sma: f64,
        mass: f64,
        dust_mass: f64,
        gas_mass: f64,
    ) {
        let mass_em = Mass::from_solar_masses(mass).to_earth_masses();
        let planet_mass = self.planets[merged.index].mass.to_solar_masses();

        if mass_em < MOON_CAPTURE_MAX
            && mass_em > MOON_CAPTURE_MIN
            && self.captured_moon_mass(merged.index) < planet_mass * MOON_MASS_BUDGET
        {
            self.capture_moon(merged, sma, mass, dust_mass, gas_mass);
        } else {
            debug!(
                "moon escapes planet at {:.2} AU ({:.4} M⊕ candidate)",
                self.planets[merged.index].semi_major_axis.to_au(),
                mass_em
            );
            let mut escaped = Planet::new(
                Length::from_au(sma),
                merged.eccentricity,
                Mass::from_solar_masses(dust_mass + gas_mass),
            );
            escaped.dust_mass = Mass::from_solar_masses(dust_mass);
            escaped.gas_mass = Mass::from_solar_masses(gas_mass);
            self.escaped_moons.push(escaped);
        }
    }

    /// Attach the body to the planet's moon list. If the newcomer
    /// out-masses the planet the two swap identities (the heavier body
    /// keeps the planetary orbit).
    fn capture_moon(
        &mut self,
        merged: MergedOrbit,
        sma: f64,
        mass: f64,
        dust_mass: f64,
        gas_mass: f64,
    ) {
        let planet = &mut self.planets[merged.index];

        let mut moon = Planet::new(
            Length::from_au(sma),
            merged.eccentricity,
            Mass::from_solar_masses(mass),
        );
        moon.dust_mass = Mass::from_solar_masses(dust_mass);
        moon.gas_mass = Mass::from_solar_masses(gas_mass);
        moon.is_moon = true;

        if moon.dust_mass + moon.gas_mass > planet.dust_mass + planet.gas_mass {
            std::mem::swap(&mut planet.dust_mass, &mut moon.dust_mass);
            std::mem::swap(&mut planet.gas_mass, &mut moon.gas_mass);
            std::mem::swap(&mut planet.mass, &mut moon.mass);
        }

        info!(
            "moon captured by planet at {:.2} AU ({:.2} M⊕ <- {:.2} M⊕)",
            planet.semi_major_axis.to_au(),
            planet.mass.to_earth_masses(),
            moon.mass.to_earth_masses()
        );
        planet.moons.push(moon);
    }

    /// Collide the body with the planet: re-run the accretion sweep at the
    /// combined mass and merged orbit, then fold the results in.
    fn merge_with_sweep(
        &mut self,
        merged: MergedOrbit,
        mass: f64,
        critical_mass: f64,
        dust_mass: f64,
        gas_mass: f64,
    ) {
        let planet_mass = self.planets[merged.index].mass.to_solar_masses();
        info!(
            "collision between planetesimals at {:.2} AU ({:.2} M⊕ + {:.2} M⊕) -> {:.2} AU",
            self.planets[merged.index].semi_major_axis.to_au(),
            self.planets[merged.index].mass.to_earth_masses(),
            Mass::from_solar_masses(mass).to_earth_masses(),
            merged.sma
        );

        let combined = planet_mass + mass;
        let (total, new_dust, new_gas) = self.accrete_dust(
            combined,
            merged.sma,
            merged.eccentricity,
            self.star.luminosity,
        );

        let planet = &mut self.planets[merged.index];
        planet.semi_major_axis = Length::from_au(merged.sma);
        planet.eccentricity = merged.eccentricity;
        planet.mass = Mass::from_solar_masses(total);
        planet.dust_mass = planet.dust_mass + Mass::from_solar_masses(dust_mass + new_dust);
        planet.gas_mass = planet.gas_mass + Mass::from_solar_masses(gas_mass + new_gas);
        if planet.mass.to_solar_masses() >= critical_mass {
            planet.gas_giant = true;
        }
    }

    /// No overlap: the body becomes a planet in its own right.
    fn insert_planet(
        &mut self,
        sma: f64,
        eccentricity: f64,
        mass: f64,
        critical_mass: f64,
        dust_mass: f64,
        gas_mass: f64,
    ) {
        let mut planet = Planet::new(
            Length::from_au(sma),
            eccentricity,
            Mass::from_solar_masses(mass),
        );
        planet.dust_mass = Mass::from_solar_masses(dust_mass);
        planet.gas_mass = Mass::from_solar_masses(gas_mass);
        if mass >= critical_mass {
            planet.gas_giant = true;
        }
        debug!(
            "new planet at {:.2} AU ({:.4} M⊕{})",
            sma,
            planet.mass.to_earth_masses(),
            if planet.gas_giant { ", gas giant" } else { "" }
        );
        self.planets.push(planet);
    }
}
