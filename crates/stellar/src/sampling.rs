//! Shared random draws for the generation pipeline.
//!
//! Every function takes the random source explicitly; nothing here holds
//! state, so concurrent generations can each run with their own `Rng`.

use rand::Rng;

/// Exponent of the low-biased eccentricity draw. Small values push the
/// distribution hard toward circular orbits.
pub const ECCENTRICITY_COEFF: f64 = 0.077;

/// Uniform draw in `[inner, outer)`.
pub fn uniform(rng: &mut impl Rng, inner: f64, outer: f64) -> f64 {
    rng.random::<f64>() * (outer - inner) + inner
}

/// Low-biased orbital eccentricity: `1 − U^0.077`.
///
/// Clamped just below 1 so a pathological draw can never produce a
/// parabolic orbit.
pub fn eccentricity(rng: &mut impl Rng) -> f64 {
    (1.0 - rng.random::<f64>().powf(ECCENTRICITY_COEFF)).min(0.99)
}

/// Jitter `value` by up to ±`variation` of itself.
pub fn about(rng: &mut impl Rng, value: f64, variation: f64) -> f64 {
    value + value * uniform(rng, -variation, variation)
}
