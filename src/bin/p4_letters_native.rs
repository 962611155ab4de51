//! Problem 1: Sort Random Letters Increasing and Decreasing
//! Solution with hand-written quicksort and reverse
//!
//! Run with: cargo run --bin p4_letters_native [config.toml]

use std::error::Error;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use algorithms_tour::display::{banner, key_points, show};
use algorithms_tour::letters::{native, random_letters};
use algorithms_tour::logger;
use algorithms_tour::{Quicksort, TourConfig};

fn main() -> Result<(), Box<dyn Error>> {
    let config = TourConfig::discover(std::env::args().skip(1))?;
    logger::init_with_level(config.log_level);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let letters = random_letters(config.letters.count, &mut rng);

    banner("Letters: Native Quicksort");
    show("Original vector", &letters);

    let sorter = Quicksort::new().pivot(config.sort.pivot);
    let start = Instant::now();
    let (orders, report) = native::order_letters_with(&letters, &sorter);
    let elapsed = start.elapsed();

    show("Increasing", &orders.increasing);
    show("Decreasing", &orders.decreasing);
    println!(
        "\nSorted {} letters ({:?} pivot) in {:?}",
        letters.len(),
        sorter.strategy(),
        elapsed
    );
    println!(
        "Partitions: {}, comparisons: {}, swaps: {}, deepest work-stack: {}",
        report.partitions, report.comparisons, report.swaps, report.max_pending
    );

    key_points(&[
        "Quicksort is O(n log n) on average, O(n^2) with a bad pivot on sorted input",
        "Reversing by swapping from both ends is O(n)",
        "Compare with p4_letters_std: same output, two library calls",
    ]);

    Ok(())
}
