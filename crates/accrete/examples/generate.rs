//! Generate a single star system and print its datasheet.
//!
//! Run with an optional seed:
//! `cargo run --example generate -- 42`

use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use accrete::GenerationOptions;
use stellar::StellarTemplate;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(42);
    let mut rng = ChaChaRng::seed_from_u64(seed);

    let system = accrete::generate_from_template(
        &StellarTemplate::k_dwarf(),
        chemistry::chemicals(),
        &GenerationOptions::default(),
        &mut rng,
    )
    .expect("template is valid");

    println!("New System (seed: {})", seed);
    print!("{}", system.datasheet());
    println!(
        "{} planets, {} moons, habitable: {}",
        system.planets.len(),
        system.moon_count(),
        system.habitable
    );
}
