//! Tests for the sampling helpers

use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::sampling;

#[test]
fn uniform_stays_in_range() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    for _ in 0..1000 {
        let x = sampling::uniform(&mut rng, 0.3, 50.0);
        assert!((0.3..50.0).contains(&x), "draw out of range: {}", x);
    }
}

#[test]
fn eccentricity_is_low_biased_and_bounded() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let mut sum = 0.0;
    for _ in 0..1000 {
        let e = sampling::eccentricity(&mut rng);
        assert!((0.0..1.0).contains(&e), "eccentricity out of range: {}", e);
        sum += e;
    }
    // 1 − U^0.077 has mean ≈ 0.071; anything near-circular on average is fine
    let mean = sum / 1000.0;
    assert!(mean < 0.15, "eccentricity should be low-biased, mean {}", mean);
}

#[test]
fn about_jitters_within_variation() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    for _ in 0..1000 {
        let x = sampling::about(&mut rng, 23.5, 0.4);
        assert!(
            (23.5 * 0.6..=23.5 * 1.4).contains(&x),
            "jitter out of range: {}",
            x
        );
    }
}
