//! Problem 1: Sort Random Letters Increasing and Decreasing
//! Solution with slice algorithms
//!
//! Run with: cargo run --bin p4_letters_std [config.toml]

use std::error::Error;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use algorithms_tour::display::{banner, key_points, show};
use algorithms_tour::letters::{random_letters, std_algos};
use algorithms_tour::logger;
use algorithms_tour::TourConfig;

fn main() -> Result<(), Box<dyn Error>> {
    let config = TourConfig::discover(std::env::args().skip(1))?;
    logger::init_with_level(config.log_level);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let letters = random_letters(config.letters.count, &mut rng);

    banner("Letters: sort_unstable + reverse");

    let start = Instant::now();
    let orders = std_algos::order_letters(&letters);
    let elapsed = start.elapsed();

    show("Increasing", &orders.increasing);
    show("Decreasing", &orders.decreasing);
    println!("\nSorted {} letters in {:?}", letters.len(), elapsed);

    key_points(&[
        "sort_unstable is O(n log n) worst case and needs no extra memory",
        "reverse is O(n)",
        "Library calls say what happens; the loops in p4_letters_native say how",
    ]);

    Ok(())
}
