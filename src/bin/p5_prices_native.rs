//! Problem 2: Basic and Order Statistics over a Price Series
//! Solution with explicit loops and the hand-written quicksort
//!
//! Run with: cargo run --bin p5_prices_native [config.toml]

use std::error::Error;

use algorithms_tour::display::{banner, key_points};
use algorithms_tour::logger;
use algorithms_tour::prices::{native, PriceSeries};
use algorithms_tour::TourConfig;

fn main() -> Result<(), Box<dyn Error>> {
    let config = TourConfig::discover(std::env::args().skip(1))?;
    logger::init_with_level(config.log_level);

    let series = PriceSeries::load(config.prices.source.as_deref())?;
    let stats = native::compute(&series, config.prices.top_peaks, config.sort.pivot)?;

    banner("Price Statistics: Native Loops");
    print!("{}", stats.render(&series));

    key_points(&[
        "Sorting once gives the median, min, max and the peaks by position",
        "Each loop is O(n); the quicksort is O(n log n) on average",
        "Compare with p5_prices_std for the same numbers from library calls",
    ]);

    Ok(())
}
