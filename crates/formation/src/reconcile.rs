//! Post-accretion reconciliation: re-inject leftover mass and repair
//! planet/moon inversions before the environment pass runs.

use log::info;
use rand::Rng;

use stellar::sampling;

use crate::engine::Accretor;

impl<'a> Accretor<'a> {
    /// Reconcile the run: widen escaped-moon orbits, push every failed
    /// planetesimal and escaped moon back through the interact-or-new
    /// logic (without the accretion sweep), then guarantee no planet is
    /// lighter than its heaviest moon and re-sort.
    pub fn reconcile(&mut self, rng: &mut impl Rng) {
        // Escape leaves a moon on a hotter orbit; widen eccentricity by a
        // power-law bump, clamped under 1.
        for moon in &mut self.escaped_moons {
            let bump = (sampling::uniform(rng, 0.1, 0.9) * moon.semi_major_axis.to_au())
                .powf(sampling::ECCENTRICITY_COEFF);
            moon.eccentricity = (moon.eccentricity + bump).min(0.99);
        }

        let failed = std::mem::take(&mut self.failed_planetesimals);
        for body in failed {
            let sma = body.semi_major_axis.to_au();
            let critical_mass = self.critical_mass(sma, body.eccentricity);
            self.inject_mass(
                sma,
                body.eccentricity,
                body.mass.to_solar_masses(),
                critical_mass,
                body.dust_mass.to_solar_masses(),
                body.gas_mass.to_solar_masses(),
            );
        }

        let escaped = std::mem::take(&mut self.escaped_moons);
        for body in escaped {
            let sma = body.semi_major_axis.to_au();
            let critical_mass = self.critical_mass(sma, body.eccentricity);
            self.inject_mass(
                sma,
                body.eccentricity,
                body.mass.to_solar_masses(),
                critical_mass,
                body.dust_mass.to_solar_masses(),
                body.gas_mass.to_solar_masses(),
            );
        }

        // A planet may never be lighter than its heaviest moon: promote
        // the moon, demote the planet, and hand over the siblings.
        let planets = std::mem::take(&mut self.planets);
        let mut repaired = Vec::with_capacity(planets.len());
        for mut planet in planets {
            let heaviest = planet
                .moons
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| {
                    a.mass
                        .partial_cmp(&b.mass)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .map(|(index, moon)| (index, moon.mass));

            match heaviest {
                Some((index, moon_mass)) if moon_mass > planet.mass => {
                    info!(
                        "moon outweighs its planet at {:.2} AU; swapping roles",
                        planet.semi_major_axis.to_au()
                    );
                    let mut promoted = planet.moons.swap_remove(index);
                    promoted.moons.append(&mut planet.moons);
                    promoted.moons.push(planet);
                    repaired.push(promoted);
                }
                _ => repaired.push(planet),
            }
        }
        self.planets = repaired;

        self.sort_planets();
        for planet in &mut self.planets {
            planet.mark_moon(false);
        }
    }
}
