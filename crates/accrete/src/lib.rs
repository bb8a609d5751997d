//! Star-system generation by stochastic dust accretion.
//!
//! One call to [`generate_system`] runs the whole pipeline for a star:
//! protoplanet injection and growth over the dust disk, coalescence into a
//! planet list, reconciliation of leftovers, and per-body environment
//! finalization down to atmospheres and habitability. The caller supplies
//! the star, the chemical reference table, and the random source; the
//! result is a finalized planet/moon tree plus a system-level habitability
//! flag.
//!
//! ```no_run
//! use rand::SeedableRng;
//! use rand_chacha::ChaChaRng;
//! use stellar::StellarTemplate;
//!
//! let mut rng = ChaChaRng::seed_from_u64(42);
//! let system = accrete::generate_from_template(
//!     &StellarTemplate::k_dwarf(),
//!     chemistry::chemicals(),
//!     &accrete::GenerationOptions::default(),
//!     &mut rng,
//! )
//! .unwrap();
//! println!("{} planets, habitable: {}", system.planets.len(), system.habitable);
//! ```

pub mod report;

use log::debug;
use rand::Rng;
use serde::Serialize;

use chemistry::Chemical;
use formation::Accretor;
use planetary::Planet;
use stellar::{Star, StellarTemplate, TemplateError};

/// Knobs for one generation run.
#[derive(Debug, Clone, Copy)]
pub struct GenerationOptions {
    /// Whether sub-critical encounters may capture moons
    pub generate_moons: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        GenerationOptions {
            generate_moons: true,
        }
    }
}

/// A finalized system: the star, its planets sorted ascending by
/// semi-major axis (each carrying its own moon and atmosphere lists), and
/// whether anything in the system came out habitable.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSystem {
    pub primary: Star,
    pub planets: Vec<Planet>,
    pub habitable: bool,
}

impl GeneratedSystem {
    /// Total number of captured moons across all planets.
    pub fn moon_count(&self) -> usize {
        self.planets.iter().map(|planet| planet.moons.len()).sum()
    }

    /// Human-readable multi-line rendering of the whole system.
    pub fn datasheet(&self) -> String {
        report::system_datasheet(self)
    }
}

/// Generate one system around an already-prepared star (deviated, aged).
///
/// Runs the accretion, reconciliation, and environment passes in order.
/// The run owns all of its state; concurrent generations only need their
/// own `rng`.
pub fn generate_system(
    star: Star,
    chemicals: &[Chemical],
    options: &GenerationOptions,
    rng: &mut impl Rng,
) -> GeneratedSystem {
    debug!("generating system around {}", star);

    let mut accretor = Accretor::new(&star, options.generate_moons);
    accretor.distribute_planetary_masses(rng);
    accretor.reconcile(rng);
    let mut planets = accretor.into_planets();

    for planet in &mut planets {
        planet.finalize_environment(&star, chemicals, options.generate_moons, rng);
    }

    let habitable = planets
        .iter()
        .any(|planet| planet.habitable || planet.habitable_moon);

    debug!(
        "system complete: {} planets, habitable: {}",
        planets.len(),
        habitable
    );

    GeneratedSystem {
        primary: star,
        planets,
        habitable,
    }
}

/// Generate from a raw catalog template: validate, deviate, draw an age,
/// then run [`generate_system`].
pub fn generate_from_template(
    template: &StellarTemplate,
    chemicals: &[Chemical],
    options: &GenerationOptions,
    rng: &mut impl Rng,
) -> Result<GeneratedSystem, TemplateError> {
    let mut star = Star::from_template(template)?.deviate(rng);
    star.assign_age(rng);
    Ok(generate_system(star, chemicals, options, rng))
}
